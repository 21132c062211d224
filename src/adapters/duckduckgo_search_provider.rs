use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::Url;
use std::time::Duration;

use crate::adapters::duckduckgo_results_page;
use crate::core::interfaces::adapters::WebSearchProvider;
use crate::core::models::{SearchQuery, SearchResponse};
use crate::global_constants;
use crate::user_settings::UserSettings;

pub struct DuckDuckGoSearchProvider {
    http_client: Client,
    search_endpoint_url: String,
    region: Option<String>,
}

impl DuckDuckGoSearchProvider {
    pub fn build(settings: &UserSettings) -> Result<Self> {
        let http_client = Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(None::<Duration>)
            .build()
            .context("Unable to build HTTP client")?;

        Ok(Self::build_with_client(http_client, settings))
    }

    pub fn build_with_client(http_client: Client, settings: &UserSettings) -> Self {
        Self {
            http_client,
            search_endpoint_url: settings.search_endpoint_url.clone(),
            region: settings.region.clone(),
        }
    }

    fn construct_search_url(&self, query: &SearchQuery) -> Result<Url> {
        let mut params = vec![(global_constants::DUCKDUCKGO_QUERY_PARAM, query.as_str())];

        if let Some(region) = self.region.as_deref() {
            if !region.trim().is_empty() {
                params.push((global_constants::DUCKDUCKGO_REGION_PARAM, region.trim()));
            }
        }

        Url::parse_with_params(&self.search_endpoint_url, &params).with_context(|| {
            format!("Invalid search endpoint URL {:?}", self.search_endpoint_url)
        })
    }

    fn fetch_results_page(&self, search_url: Url) -> Result<String> {
        let response = self
            .http_client
            .get(search_url)
            .send()
            .context("Search request failed")?
            .error_for_status()
            .context("Search provider returned an error status")?;

        let body = response
            .text()
            .context("Unable to read search provider response")?;
        log::debug!("[DDG] Received {} bytes of HTML", body.len());

        Ok(body)
    }
}

impl WebSearchProvider for DuckDuckGoSearchProvider {
    fn search(&self, query: &SearchQuery) -> Result<SearchResponse> {
        let search_url = self.construct_search_url(query)?;

        log::info!("[DDG] Querying DuckDuckGo");
        log::debug!("[DDG] Search URL: {}", search_url);

        let body = self.fetch_results_page(search_url)?;

        duckduckgo_results_page::parse_results_page(&body)
    }
}
