//! Style catalog loading and filtering.
//!
//! The catalog drives everything: only styles that survive the filter here
//! get their nodes fetched and their paints normalized. Designers opt a
//! style out of export by putting the word `none` anywhere in its
//! description.

use std::collections::HashMap;

use colorway_api::{FileApi, Node, NodeId, Style, StyleType};

use crate::error::LoadError;

/// Fetch the fill styles of a file, filtered down to the exportable ones.
///
/// Fails with [`LoadError::StylesNotFound`] when nothing survives, which
/// almost always means the wrong file key or an unpublished library.
pub fn load_fill_styles(api: &dyn FileApi, file_key: &str) -> Result<Vec<Style>, LoadError> {
    load_styles(api, file_key, StyleType::Fill)
}

/// Fetch the text styles of a file, filtered the same way as fills.
pub fn load_text_styles(api: &dyn FileApi, file_key: &str) -> Result<Vec<Style>, LoadError> {
    load_styles(api, file_key, StyleType::Text)
}

fn load_styles(
    api: &dyn FileApi,
    file_key: &str,
    kind: StyleType,
) -> Result<Vec<Style>, LoadError> {
    let styles: Vec<Style> = api
        .fetch_styles(file_key)?
        .into_iter()
        .filter(|style| style.style_type == kind && is_exported(style))
        .collect();

    if styles.is_empty() {
        return Err(LoadError::StylesNotFound);
    }
    Ok(styles)
}

/// The export opt-out: an empty description always exports; any other
/// description exports unless it contains `none`. Case sensitive, substring
/// match, so `"do not export: none"` and `"none"` both opt out.
fn is_exported(style: &Style) -> bool {
    if style.description.is_empty() {
        return true;
    }
    !style.description.contains("none")
}

/// Fetch the document nodes behind a set of catalog entries.
///
/// Ids missing from the response are not an error here; the normalizer
/// reports them per style.
pub fn load_nodes(
    api: &dyn FileApi,
    file_key: &str,
    styles: &[Style],
) -> Result<HashMap<NodeId, Node>, LoadError> {
    let ids: Vec<NodeId> = styles.iter().map(|style| style.node_id.clone()).collect();
    Ok(api.fetch_nodes(file_key, &ids)?)
}
