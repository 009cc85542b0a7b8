//! Blocking HTTP client plus the [`FileApi`] seam the pipeline consumes.
//!
//! Everything downstream of this module works against [`FileApi`], so tests
//! swap in an in-memory fake and never open a socket.

use std::collections::HashMap;
use std::time::Duration;

use crate::endpoints::{Endpoint, NodesEndpoint, StylesEndpoint};
use crate::error::ApiError;
use crate::models::{Node, NodeId, Style};

/// Production API root. Overridable for tests against a local server.
pub const DEFAULT_BASE_URL: &str = "https://api.figma.com/v1";

/// Header carrying the personal access token.
pub const TOKEN_HEADER: &str = "X-Figma-Token";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Read access to the parts of a Figma file the exporter needs.
///
/// Implemented by [`HttpClient`] for production and by in-memory fakes in
/// tests. Both calls are snapshots; there is no pagination on either
/// endpoint.
pub trait FileApi {
    /// The published style catalog of a file.
    fn fetch_styles(&self, file_key: &str) -> Result<Vec<Style>, ApiError>;

    /// Document subtrees for the given node ids. Ids the file does not
    /// contain are simply absent from the returned map.
    fn fetch_nodes(
        &self,
        file_key: &str,
        ids: &[NodeId],
    ) -> Result<HashMap<NodeId, Node>, ApiError>;
}

/// Authenticated blocking client for the Figma REST API.
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    token: String,
    http: reqwest::blocking::Client,
}

impl HttpClient {
    /// Build a client against the production API.
    pub fn new(token: impl Into<String>) -> Result<Self, ApiError> {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    /// Build a client against a custom API root.
    pub fn with_base_url(
        token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, ApiError> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            base_url: base_url.into(),
            token: token.into(),
            http,
        })
    }

    /// Perform one endpoint request and decode its payload.
    pub fn request<E: Endpoint>(&self, endpoint: &E) -> Result<E::Output, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint.path());

        let mut builder = self.http.get(&url).header(TOKEN_HEADER, &self.token);
        let query = endpoint.query();
        if !query.is_empty() {
            builder = builder.query(&query);
        }

        let response = builder.send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { code: status.as_u16(), url });
        }

        let body = response.bytes()?;
        endpoint.parse(&body)
    }
}

impl FileApi for HttpClient {
    fn fetch_styles(&self, file_key: &str) -> Result<Vec<Style>, ApiError> {
        self.request(&StylesEndpoint::new(file_key))
    }

    fn fetch_nodes(
        &self,
        file_key: &str,
        ids: &[NodeId],
    ) -> Result<HashMap<NodeId, Node>, ApiError> {
        self.request(&NodesEndpoint::new(file_key, ids.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds_with_default_base_url() {
        let client = HttpClient::new("token").unwrap();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn custom_base_url_is_kept_verbatim() {
        let client = HttpClient::with_base_url("token", "http://127.0.0.1:9876").unwrap();
        assert_eq!(client.base_url, "http://127.0.0.1:9876");
    }
}
