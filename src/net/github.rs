//! GitHub repository listing client.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`, raced against a
//! `gloo-timers` timeout.
//! Native builds: `list_repositories` returns `FeedError::Unavailable` since
//! the endpoint is only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure (transport, non-2xx, non-array body, timeout) comes back as
//! a typed `FeedError` so the feed can record it without crashing the page.
//! No authentication header is sent; rate limits surface as `Status`.

#[cfg(test)]
#[path = "github_test.rs"]
mod github_test;

use super::error::FeedError;
use super::types::RepositorySummary;
use crate::config::SiteConfig;

/// Entries requested from the listing endpoint. One page only.
pub const PER_PAGE: u8 = 100;

/// Source of repository listings for an owner handle.
pub trait RepositorySource {
    /// List `owner`'s repositories, most recently updated first.
    fn list_repositories(&self, owner: &str) -> impl Future<Output = Result<Vec<RepositorySummary>, FeedError>>;
}

fn repositories_endpoint(base_url: &str, owner: &str) -> String {
    format!("{base_url}/users/{owner}/repos?per_page={PER_PAGE}&sort=updated")
}

/// Decode a listing body. Anything other than a JSON array of repository
/// objects is malformed.
///
/// # Errors
///
/// Returns `FeedError::MalformedPayload` when the body does not decode.
pub fn parse_repositories(body: &str) -> Result<Vec<RepositorySummary>, FeedError> {
    serde_json::from_str(body).map_err(|e| FeedError::MalformedPayload(e.to_string()))
}

/// Unauthenticated client for the public GitHub REST API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GithubApi {
    base_url: String,
    timeout_ms: u32,
}

impl GithubApi {
    pub fn new(config: &SiteConfig) -> Self {
        Self { base_url: config.api_base_url.clone(), timeout_ms: config.fetch_timeout_ms }
    }

    /// Listing URL for `owner`.
    pub fn endpoint(&self, owner: &str) -> String {
        repositories_endpoint(&self.base_url, owner)
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }
}

impl RepositorySource for GithubApi {
    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    async fn list_repositories(&self, owner: &str) -> Result<Vec<RepositorySummary>, FeedError> {
        #[cfg(feature = "csr")]
        {
            use futures::future::{Either, select};

            let url = self.endpoint(owner);
            let request = std::pin::pin!(fetch_body(&url));
            let after_ms = u64::from(self.timeout_ms);
            let deadline = std::pin::pin!(gloo_timers::future::sleep(std::time::Duration::from_millis(after_ms)));
            match select(request, deadline).await {
                Either::Left((body, _)) => parse_repositories(&body?),
                Either::Right(((), _)) => Err(FeedError::Timeout { after_ms }),
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(FeedError::Unavailable)
        }
    }
}

#[cfg(feature = "csr")]
async fn fetch_body(url: &str) -> Result<String, FeedError> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| FeedError::Network(e.to_string()))?;
    let status = resp.status();
    if !(200..300).contains(&status) {
        return Err(FeedError::Status { status });
    }
    resp.text().await.map_err(|e| FeedError::Network(e.to_string()))
}
