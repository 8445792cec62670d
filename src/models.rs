use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How thorough the service should be when answering a query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SearchDepth {
    #[default]
    Basic,
    Advanced,
}

/// Body of the outbound `POST /search` call.
#[derive(Clone, Serialize)]
pub struct SearchRequest {
    pub api_key: String,
    pub query: String,
    pub search_depth: SearchDepth,
    pub max_results: i64,
}

impl fmt::Debug for SearchRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchRequest")
            .field("api_key", &"<redacted>")
            .field("query", &self.query)
            .field("search_depth", &self.search_depth)
            .field("max_results", &self.max_results)
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Absent in the payload means no results.
    #[serde(default)]
    pub results: Vec<ResultItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub url: String,
    /// Snippet or summary of the page.
    #[serde(default)]
    pub content: String,
    /// Relevance in `[0, 1]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl SearchResponse {
    /// Reads a response out of an already-parsed JSON value.
    ///
    /// Anything that does not look like a search response is treated as
    /// an empty one; only invalid JSON is an error, and that is caught
    /// before this point.
    pub fn from_value(value: serde_json::Value) -> Self {
        match serde_json::from_value(value) {
            Ok(response) => response,
            Err(err) => {
                tracing::warn!("Unexpected response shape, treating as no results: {}", err);
                Self::default()
            }
        }
    }
}
