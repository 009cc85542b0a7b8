//! Paint classification.
//!
//! The wire [`Paint`] is a bag of optional fields because that is what the
//! API sends. Classification turns it into a closed union the normalizer
//! can match exhaustively, so "solid without a color" and "gradient with no
//! stops" become explicit [`ClassifiedPaint::Unsupported`] values instead of
//! scattered `if let` chains.

use colorway_api::{ColorStop, Paint, PaintColor, PaintType};

/// A paint after classification. Exactly one of three things.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassifiedPaint {
    /// A usable solid paint. `opacity` is the paint-level opacity, distinct
    /// from the color's own alpha channel; the effective alpha is
    /// `opacity` when present, the color alpha otherwise.
    Solid {
        opacity: Option<f64>,
        color: PaintColor,
    },
    /// A usable gradient paint with at least one stop, in paint order.
    /// Linear and radial gradients both land here; the geometry is not
    /// part of the token model.
    Gradient { stops: Vec<ColorStop> },
    /// Anything the exporter cannot express, including structurally broken
    /// paints of a supported kind.
    Unsupported { kind: PaintType },
}

/// Classify one paint.
pub fn classify(paint: &Paint) -> ClassifiedPaint {
    match paint.paint_type {
        PaintType::Solid => match paint.color {
            Some(color) => ClassifiedPaint::Solid { opacity: paint.opacity, color },
            None => ClassifiedPaint::Unsupported { kind: PaintType::Solid },
        },
        PaintType::GradientLinear | PaintType::GradientRadial => {
            match paint.gradient_stops.as_deref() {
                Some(stops) if !stops.is_empty() => {
                    ClassifiedPaint::Gradient { stops: stops.to_vec() }
                }
                _ => ClassifiedPaint::Unsupported { kind: paint.paint_type },
            }
        }
        other => ClassifiedPaint::Unsupported { kind: other },
    }
}
