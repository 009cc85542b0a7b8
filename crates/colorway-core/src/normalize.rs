//! Catalog-to-token normalization.
//!
//! This is the join at the center of the pipeline: each surviving catalog
//! entry is looked up in the fetched node map, its first fill is
//! classified, and the result becomes zero or more tokens. Output order
//! follows catalog order, and within a gradient, stop order follows paint
//! order, so the whole export is deterministic.

use std::collections::HashMap;

use colorway_api::{Node, NodeId, Style};

use crate::classify::{classify, ClassifiedPaint};
use crate::diagnostics::{Diagnostic, DiagnosticsSink};
use crate::platform::Platform;
use crate::token::{ColorSet, ColorToken, GradientStop, GradientToken, TokenName};

/// Turn catalog entries plus their nodes into a [`ColorSet`].
///
/// Flawed entries are skipped with a diagnostic, never aborting the run:
/// a missing node, an empty fill stack, or an unsupported paint each cost
/// exactly the one style that carried them.
///
/// A gradient contributes its own token plus one synthetic color token per
/// stop, named `{style}_{index}` with zero-based indices. The stop tokens
/// carry the stop's own color and alpha; paint-level opacity applies only
/// to solid paints.
pub fn normalize(
    styles: &[Style],
    nodes: &HashMap<NodeId, Node>,
    diagnostics: &mut dyn DiagnosticsSink,
) -> ColorSet {
    let mut set = ColorSet::default();

    for style in styles {
        let Some(node) = nodes.get(&style.node_id) else {
            diagnostics.record(Diagnostic::MissingNode {
                style: style.name.clone(),
                node_id: style.node_id.clone(),
            });
            continue;
        };

        let Some(fill) = node.document.fills.first() else {
            diagnostics.record(Diagnostic::EmptyFills { style: style.name.clone() });
            continue;
        };

        let platform = Platform::from_description(&style.description);

        match classify(fill) {
            ClassifiedPaint::Solid { opacity, color } => {
                set.colors.push(ColorToken {
                    name: TokenName::new(&style.name),
                    platform,
                    red: color.r,
                    green: color.g,
                    blue: color.b,
                    alpha: opacity.unwrap_or(color.a),
                });
            }
            ClassifiedPaint::Gradient { stops } => {
                let mut gradient_stops = Vec::with_capacity(stops.len());
                for (index, stop) in stops.iter().enumerate() {
                    let stop_name = TokenName::stop(&style.name, index);
                    set.colors.push(ColorToken {
                        name: stop_name.clone(),
                        platform,
                        red: stop.color.r,
                        green: stop.color.g,
                        blue: stop.color.b,
                        alpha: stop.color.a,
                    });
                    gradient_stops.push(GradientStop {
                        color: stop_name,
                        position: stop.position,
                    });
                }
                set.gradients.push(GradientToken {
                    name: TokenName::new(&style.name),
                    platform,
                    stops: gradient_stops,
                });
            }
            ClassifiedPaint::Unsupported { kind } => {
                diagnostics.record(Diagnostic::UnsupportedFill {
                    style: style.name.clone(),
                    kind,
                });
            }
        }
    }

    set
}
