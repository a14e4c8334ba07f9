//! Border fragment types

use super::ColorSpec;

/// A border record in the style sheet's border list.
///
/// All four sides are always present in the model and always serialized,
/// even when a side carries no line style; the consuming application's
/// schema expects the placeholder elements.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Border {
    pub left: BorderSide,
    pub right: BorderSide,
    pub top: BorderSide,
    pub bottom: BorderSide,
}

impl Border {
    /// Create a new empty border record
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the same line style to all four sides
    pub fn outline(style: BorderLineStyle) -> Self {
        let side = BorderSide {
            style: Some(style),
            color: None,
        };
        Border {
            left: side.clone(),
            right: side.clone(),
            top: side.clone(),
            bottom: side,
        }
    }
}

/// One side of a border
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BorderSide {
    /// Line style; `None` means the side has no line
    pub style: Option<BorderLineStyle>,
    /// Line color
    pub color: Option<ColorSpec>,
}

/// Border line style (`style` attribute on a border side)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderLineStyle {
    Thin,
    Medium,
    Thick,
    Dashed,
    Dotted,
    Double,
    Hair,
    MediumDashed,
    DashDot,
    MediumDashDot,
    DashDotDot,
    MediumDashDotDot,
    SlantDashDot,
}
