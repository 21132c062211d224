use anyhow::{anyhow, Result};
use reqwest::Url;
use scraper::{ElementRef, Html, Selector};

use crate::core::models::{SearchResponse, SearchResultItem};
use crate::global_constants;

fn build_selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| anyhow!("Invalid CSS selector {:?}: {:?}", css, e))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn element_text(element: ElementRef<'_>) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

fn is_duckduckgo_redirect(url: &Url) -> bool {
    let host_matches = url.host_str().is_some_and(|host| {
        host == global_constants::DUCKDUCKGO_HOST
            || host.ends_with(&format!(".{}", global_constants::DUCKDUCKGO_HOST))
    });

    host_matches && url.path() == global_constants::DUCKDUCKGO_REDIRECT_PATH
}

/// Turns a result href into an absolute URL, unwrapping DuckDuckGo's
/// `/l/?uddg=` redirect when present.
pub fn resolve_result_link(href: &str) -> Option<String> {
    let href = href.trim();
    let absolute_href = if href.starts_with("//") {
        format!("{}{}", global_constants::DUCKDUCKGO_RELATIVE_LINK_BASE, href)
    } else {
        href.to_string()
    };

    let parsed = Url::parse(&absolute_href).ok()?;

    let redirect_target = if is_duckduckgo_redirect(&parsed) {
        parsed
            .query_pairs()
            .find(|(key, _)| key == global_constants::DUCKDUCKGO_REDIRECT_TARGET_PARAM)
            .map(|(_, value)| value.into_owned())
    } else {
        None
    };

    if let Some(target) = redirect_target {
        let target_url = Url::parse(&target).ok()?;
        return match target_url.scheme() {
            "http" | "https" => Some(target),
            _ => None,
        };
    }

    match parsed.scheme() {
        "http" | "https" => Some(absolute_href),
        _ => None,
    }
}

pub fn parse_results_page(html: &str) -> Result<SearchResponse> {
    let document = Html::parse_document(html);

    let challenge_selector = build_selector(global_constants::SELECTOR_CHALLENGE_PAGE)?;
    if document.select(&challenge_selector).next().is_some() {
        log::warn!("[DDG] Received bot challenge page instead of results");
        return Ok(SearchResponse::failed());
    }

    let block_selector = build_selector(global_constants::SELECTOR_RESULT_BLOCK)?;
    let link_selector = build_selector(global_constants::SELECTOR_RESULT_LINK)?;
    let snippet_selector = build_selector(global_constants::SELECTOR_RESULT_SNIPPET)?;

    let mut items = Vec::new();

    for block in document.select(&block_selector) {
        let Some(link) = block.select(&link_selector).next() else {
            continue;
        };

        let Some(url) = link.value().attr("href").and_then(resolve_result_link) else {
            log::debug!("[DDG] Skipping result with unresolvable link");
            continue;
        };

        let description = block
            .select(&snippet_selector)
            .next()
            .map(element_text)
            .unwrap_or_default();

        items.push(SearchResultItem::new(element_text(link), url, description));
    }

    log::debug!("[DDG] Parsed {} result(s) from page", items.len());

    Ok(SearchResponse::succeeded_with(items))
}
