//! Font fragment types

use super::ColorSpec;
use crate::rich_text::BoolProperty;

/// A font record in the style sheet's font list.
///
/// Every field is optional: an unset field means the sub-element was absent
/// from the source markup, which is distinct from an explicit default. The
/// distinction matters both for round-trip fidelity and for interning, where
/// an unset field is only equal to another unset field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Font {
    /// Font size in points (`sz`)
    pub size: Option<f64>,
    /// Font family name (`name`), e.g. "Calibri"
    pub name: Option<String>,
    /// Font family numbering (`family`)
    pub family: Option<i64>,
    /// Character set id (`charset`)
    pub charset: Option<i64>,
    /// Font color
    pub color: Option<ColorSpec>,
    /// Bold marker; `Some` iff the `b` element was present
    pub bold: Option<BoolProperty>,
    /// Italic marker; `Some` iff the `i` element was present
    pub italic: Option<BoolProperty>,
    /// Underline style; `Some` iff the `u` element was present
    pub underline: Option<Underline>,
    /// Strikethrough marker; `Some` iff the `strike` element was present
    pub strike: Option<BoolProperty>,
}

impl Font {
    /// Create a new empty font record
    pub fn new() -> Self {
        Self::default()
    }

    /// Set font size
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = Some(size);
        self
    }

    /// Set font name
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set font color
    pub fn with_color(mut self, color: ColorSpec) -> Self {
        self.color = Some(color);
        self
    }

    /// Mark the font bold
    pub fn with_bold(mut self) -> Self {
        self.bold = Some(BoolProperty::TRUE);
        self
    }

    /// Mark the font italic
    pub fn with_italic(mut self) -> Self {
        self.italic = Some(BoolProperty::TRUE);
        self
    }

    /// Set the underline style
    pub fn with_underline(mut self, underline: Underline) -> Self {
        self.underline = Some(underline);
        self
    }

    /// Mark the font struck through
    pub fn with_strike(mut self) -> Self {
        self.strike = Some(BoolProperty::TRUE);
        self
    }
}

impl std::hash::Hash for Font {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.size.map(f64::to_bits).hash(state);
        self.name.hash(state);
        self.family.hash(state);
        self.charset.hash(state);
        self.color.hash(state);
        self.bold.hash(state);
        self.italic.hash(state);
        self.underline.hash(state);
        self.strike.hash(state);
    }
}

impl Eq for Font {}

/// Underline style (`u` element)
///
/// A bare `u` element with no `val` attribute means [`Underline::Single`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Underline {
    /// Explicit "none"
    None,
    /// Single underline
    #[default]
    Single,
    /// Double underline
    Double,
    /// Single accounting underline (extends to cell width)
    SingleAccounting,
    /// Double accounting underline
    DoubleAccounting,
}
