mod search_query;
mod search_response;

pub use search_query::SearchQuery;
pub use search_response::{SearchResponse, SearchResultItem};
