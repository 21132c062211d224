use anyhow::Result;
use std::io::Write;
use std::sync::Arc;

use crate::core::interfaces::adapters::WebSearchProvider;
use crate::core::models::{SearchQuery, SearchResponse};
use crate::global_constants;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    ResultsPrinted,
    UsagePrinted,
}

pub struct SearchOrchestrator {
    search_provider: Arc<dyn WebSearchProvider>,
}

impl SearchOrchestrator {
    pub fn build(search_provider: Arc<dyn WebSearchProvider>) -> Self {
        Self { search_provider }
    }

    /// Hands the query to the provider and returns its answer untouched.
    /// Provider errors are returned as-is.
    pub fn search(&self, query: &SearchQuery) -> Result<SearchResponse> {
        log::info!("{} searching for: {}", global_constants::LOG_TAG_SEARCH, query);

        let response = self.search_provider.search(query)?;

        log::info!(
            "{} provider returned success={} with {} result(s)",
            global_constants::LOG_TAG_SEARCH,
            response.success,
            response.data.len()
        );

        Ok(response)
    }

    /// `build_provider` runs only once keywords are known to be present, so the
    /// usage path never reads settings or builds a client.
    pub fn run_with_arguments<W, F>(
        arguments: &[String],
        output: &mut W,
        build_provider: F,
    ) -> Result<SearchOutcome>
    where
        W: Write,
        F: FnOnce() -> Result<Arc<dyn WebSearchProvider>>,
    {
        let Some(query) = SearchQuery::from_arguments(arguments) else {
            log::debug!(
                "{} no keywords supplied, printing usage",
                global_constants::LOG_TAG_SEARCH
            );
            writeln!(output, "{}", global_constants::USAGE_MESSAGE)?;
            return Ok(SearchOutcome::UsagePrinted);
        };

        let orchestrator = Self::build(build_provider()?);
        let response = orchestrator.search(&query)?;
        let json = response.to_json()?;

        writeln!(output, "{}", json)?;
        output.flush()?;

        Ok(SearchOutcome::ResultsPrinted)
    }
}
