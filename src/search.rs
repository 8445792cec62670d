use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};
use url::Url;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::models::{SearchDepth, SearchRequest, SearchResponse};

pub struct SearchClient {
    client: Client,
    api_key: String,
    endpoint: Url,
    search_depth: SearchDepth,
}

impl SearchClient {
    /// Builds a client for `config`. A `timeout` of `None` waits forever.
    pub fn new(config: &Config, timeout: Option<Duration>) -> Result<Self> {
        let mut builder =
            Client::builder().user_agent(concat!("tavily-search/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            api_key: config.api_key.clone(),
            endpoint: config.endpoint.clone(),
            search_depth: SearchDepth::default(),
        })
    }

    pub fn with_search_depth(mut self, search_depth: SearchDepth) -> Self {
        self.search_depth = search_depth;
        self
    }

    pub fn request(&self, query: &str, max_results: i64) -> SearchRequest {
        SearchRequest {
            api_key: self.api_key.clone(),
            query: query.to_string(),
            search_depth: self.search_depth,
            max_results,
        }
    }

    /// Sends one search request. There is no retry.
    pub async fn search(&self, query: &str, max_results: i64) -> Result<SearchResponse> {
        info!("Searching for: {} with limit {}", query, max_results);
        let request = self.request(query, max_results);

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        debug!("Search API answered {} with {} bytes", status, body.len());

        if !status.is_success() {
            return Err(Error::Status {
                status,
                detail: error_detail(&body),
            });
        }

        let value: Value = serde_json::from_slice(&body)?;
        Ok(SearchResponse::from_value(value))
    }
}

/// Pulls the service's error message out of a failed response body.
fn error_detail(body: &[u8]) -> String {
    let Ok(value) = serde_json::from_slice::<Value>(body) else {
        return "no details".to_string();
    };

    let detail = value.get("detail");
    detail
        .and_then(|d| d.get("error"))
        .and_then(Value::as_str)
        .or_else(|| detail.and_then(Value::as_str))
        .or_else(|| value.get("error").and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| "no details".to_string())
}
