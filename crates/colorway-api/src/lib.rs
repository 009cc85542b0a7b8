//! Minimal Figma REST API surface for exporting design tokens.
//!
//! colorway needs exactly two endpoints: the published style catalog of a
//! file and the document nodes those styles point at. This crate provides
//! the wire models for both, a typed [`Endpoint`] description per request,
//! and a blocking [`HttpClient`] that authenticates with a personal access
//! token.
//!
//! The [`FileApi`] trait is the seam between transport and pipeline:
//! production code hands the pipeline an [`HttpClient`], tests hand it an
//! in-memory fake.
//!
//! # Example
//!
//! ```rust,no_run
//! use colorway_api::{FileApi, HttpClient};
//!
//! let token = std::env::var("FIGMA_PERSONAL_TOKEN").unwrap();
//! let client = HttpClient::new(token).unwrap();
//! let styles = client.fetch_styles("h7bQWC05xysVRz7sSTif2D").unwrap();
//! for style in &styles {
//!     println!("{} -> {}", style.name, style.node_id);
//! }
//! ```

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

pub use client::{FileApi, HttpClient, DEFAULT_BASE_URL, TOKEN_HEADER};
pub use endpoints::{Endpoint, NodesEndpoint, StylesEndpoint};
pub use error::ApiError;
pub use models::{
    ColorStop, Document, LineHeightUnit, Node, NodeId, NodesResponse, Paint, PaintColor,
    PaintType, Style, StyleMeta, StyleType, StylesResponse, TextCase, TypeStyle,
};
