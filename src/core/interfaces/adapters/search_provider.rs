use anyhow::Result;

use crate::core::models::{SearchQuery, SearchResponse};

pub trait WebSearchProvider: Send + Sync {
    fn search(&self, query: &SearchQuery) -> Result<SearchResponse>;
}
