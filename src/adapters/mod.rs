mod duckduckgo_results_page;
mod duckduckgo_search_provider;

pub use duckduckgo_search_provider::DuckDuckGoSearchProvider;
