//! Rich-text runs and their character-level properties

use std::hash::{Hash, Hasher};

use crate::style::{ColorSpec, Underline};

/// A tri-state boolean marker element.
///
/// The markup distinguishes an absent element (false), a bare element
/// (true), and an element with an explicit `val` attribute. This newtype
/// carries the decoded value; whether the element was present at all is
/// expressed by wrapping in `Option` where that distinction matters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BoolProperty(pub bool);

impl BoolProperty {
    pub const TRUE: BoolProperty = BoolProperty(true);
    pub const FALSE: BoolProperty = BoolProperty(false);

    pub fn get(self) -> bool {
        self.0
    }
}

impl From<bool> for BoolProperty {
    fn from(value: bool) -> Self {
        BoolProperty(value)
    }
}

/// Vertical alignment of a run relative to the baseline (`vertAlign`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunVerticalAlign {
    Baseline,
    Superscript,
    Subscript,
}

/// Theme font scheme membership of a run's font (`scheme`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontScheme {
    /// Explicit "none"
    None,
    Major,
    Minor,
}

/// Character-level formatting of one text run (`rPr`).
///
/// Boolean markers follow element-presence semantics directly: an absent
/// marker decodes as false, so plain `BoolProperty` fields suffice here,
/// unlike font records where presence itself must round-trip.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunProperties {
    /// Run font name (`rFont`)
    pub font: Option<String>,
    /// Character set id (`charset`)
    pub charset: Option<i64>,
    /// Font family numbering (`family`)
    pub family: Option<i64>,
    pub bold: BoolProperty,
    pub italic: BoolProperty,
    pub strike: BoolProperty,
    pub outline: BoolProperty,
    pub shadow: BoolProperty,
    pub condense: BoolProperty,
    pub extend: BoolProperty,
    pub color: Option<ColorSpec>,
    /// Font size in points (`sz`)
    pub size: Option<f64>,
    pub underline: Option<Underline>,
    pub vert_align: Option<RunVerticalAlign>,
    pub scheme: Option<FontScheme>,
}

impl RunProperties {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Hash for RunProperties {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.font.hash(state);
        self.charset.hash(state);
        self.family.hash(state);
        self.bold.hash(state);
        self.italic.hash(state);
        self.strike.hash(state);
        self.outline.hash(state);
        self.shadow.hash(state);
        self.condense.hash(state);
        self.extend.hash(state);
        self.color.hash(state);
        self.size.map(f64::to_bits).hash(state);
        self.underline.hash(state);
        self.vert_align.hash(state);
        self.scheme.hash(state);
    }
}

impl Eq for RunProperties {}

/// One run of a rich-text value: a text span with optional character
/// formatting.
///
/// `properties: None` means the run had no `rPr` element at all, which is
/// distinct from an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TextRun {
    pub text: String,
    pub properties: Option<RunProperties>,
}

impl TextRun {
    /// A run with no character formatting
    pub fn plain<S: Into<String>>(text: S) -> Self {
        TextRun {
            text: text.into(),
            properties: None,
        }
    }

    /// A run with character formatting
    pub fn formatted<S: Into<String>>(text: S, properties: RunProperties) -> Self {
        TextRun {
            text: text.into(),
            properties: Some(properties),
        }
    }
}
