//! The ureq-backed GitHub API client.

use serde::de::DeserializeOwned;
use tracing::debug;
use ureq::Agent;

use beatv_core::card::{Card, CardContent};
use beatv_core::column::ColumnRef;

use crate::error::{ApiError, Result};
use crate::traits::CardSource;

/// Default API host for github.com.
pub const DEFAULT_API_BASE: &str = "https://api.github.com";

/// The preview media type required by the Projects (classic) cards endpoint.
const INERTIA_PREVIEW: &str = "application/vnd.github.inertia-preview+json";

/// Authenticated, synchronous GitHub API client.
///
/// Requests run strictly one at a time; timeouts are ureq's defaults.
pub struct GithubClient {
    agent: Agent,
    token: String,
    api_base: String,
}

impl GithubClient {
    /// Creates a client for github.com with the given bearer token.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_api_base(token, DEFAULT_API_BASE)
    }

    /// Creates a client against a different API base (e.g. a GitHub
    /// Enterprise host, or a local test server). No trailing slash.
    pub fn with_api_base(token: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            agent: Agent::new_with_defaults(),
            token: token.into(),
            api_base: api_base.into(),
        }
    }

    /// The API base this client talks to.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Issues an authenticated GET and decodes the JSON body.
    fn get_json<T: DeserializeOwned>(&self, url: &str, accept: Option<&str>) -> Result<T> {
        debug!(url, "GET");

        let mut request = self
            .agent
            .get(url)
            .header("Authorization", format!("Bearer {}", self.token));
        if let Some(media_type) = accept {
            request = request.header("Accept", media_type);
        }

        let mut response = request.call().map_err(|err| match err {
            ureq::Error::StatusCode(status) => ApiError::status(status, url),
            source => ApiError::Transport {
                url: url.to_string(),
                source,
            },
        })?;

        response
            .body_mut()
            .read_json::<T>()
            .map_err(|source| ApiError::Decode {
                url: url.to_string(),
                source,
            })
    }
}

impl CardSource for GithubClient {
    fn list_cards(&self, column: &ColumnRef) -> Result<Vec<Card>> {
        self.get_json(&column.cards_url(&self.api_base), Some(INERTIA_PREVIEW))
    }

    fn card_content(&self, content_url: &str) -> Result<CardContent> {
        self.get_json(content_url, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_to_github_dot_com() {
        let client = GithubClient::new("tok");
        assert_eq!(client.api_base(), "https://api.github.com");
    }

    #[test]
    fn api_base_is_overridable() {
        let client = GithubClient::with_api_base("tok", "https://ghe.example.test/api/v3");
        let column: ColumnRef = "https://ghe.example.test/p/1#column-7".parse().unwrap();
        assert_eq!(
            column.cards_url(client.api_base()),
            "https://ghe.example.test/api/v3/projects/columns/7/cards"
        );
    }
}
