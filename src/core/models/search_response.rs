use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub title: String,
    pub url: String,
    pub description: String,
}

impl SearchResultItem {
    pub fn new(title: String, url: String, description: String) -> Self {
        Self {
            title,
            url,
            description,
        }
    }
}

/// Provider answer for one query. `data` keeps the provider's ranking order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub success: bool,
    pub data: Vec<SearchResultItem>,
}

impl SearchResponse {
    pub fn succeeded_with(data: Vec<SearchResultItem>) -> Self {
        Self {
            success: true,
            data,
        }
    }

    pub fn failed() -> Self {
        Self {
            success: false,
            data: Vec::new(),
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
