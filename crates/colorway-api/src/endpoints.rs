//! Typed request descriptions for the Figma endpoints colorway calls.
//!
//! Each endpoint knows its path, its query string, and how to turn the
//! response body into a useful value. The client stays a dumb transport.

use std::collections::HashMap;

use crate::error::ApiError;
use crate::models::{Node, NodeId, NodesResponse, Style, StylesResponse};

/// A single GET request against the Figma API.
pub trait Endpoint {
    /// The decoded payload this endpoint yields.
    type Output;

    /// Path below the API root, e.g. `/files/abc/styles`.
    fn path(&self) -> String;

    /// Query parameters, empty for most endpoints.
    fn query(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Decode the raw response body.
    fn parse(&self, body: &[u8]) -> Result<Self::Output, ApiError>;
}

/// `GET /files/:key/styles`: the published style catalog of a file.
#[derive(Debug, Clone)]
pub struct StylesEndpoint {
    pub file_key: String,
}

impl StylesEndpoint {
    pub fn new(file_key: impl Into<String>) -> Self {
        Self { file_key: file_key.into() }
    }
}

impl Endpoint for StylesEndpoint {
    type Output = Vec<Style>;

    fn path(&self) -> String {
        format!("/files/{}/styles", self.file_key)
    }

    fn parse(&self, body: &[u8]) -> Result<Self::Output, ApiError> {
        let response: StylesResponse = serde_json::from_slice(body)?;
        Ok(response.meta.styles)
    }
}

/// `GET /files/:key/nodes?ids=...`: document subtrees for specific nodes.
#[derive(Debug, Clone)]
pub struct NodesEndpoint {
    pub file_key: String,
    pub ids: Vec<NodeId>,
}

impl NodesEndpoint {
    pub fn new(file_key: impl Into<String>, ids: Vec<NodeId>) -> Self {
        Self { file_key: file_key.into(), ids }
    }
}

impl Endpoint for NodesEndpoint {
    type Output = HashMap<NodeId, Node>;

    fn path(&self) -> String {
        format!("/files/{}/nodes", self.file_key)
    }

    fn query(&self) -> Vec<(String, String)> {
        vec![("ids".to_string(), self.ids.join(","))]
    }

    fn parse(&self, body: &[u8]) -> Result<Self::Output, ApiError> {
        let response: NodesResponse = serde_json::from_slice(body)?;
        Ok(response.nodes)
    }
}
