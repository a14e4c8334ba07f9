//! Core data model for spreadsheet formatting: the shared-string table,
//! rich-text runs, and the style sheet with its resolution cascade.
//!
//! This crate is format-agnostic; the markup codecs live in
//! `lark-sheets-xlsx`.

pub mod error;
pub mod rich_text;
pub mod shared_strings;
pub mod style;

pub use error::{Error, Result};
pub use rich_text::{BoolProperty, FontScheme, RunProperties, RunVerticalAlign, TextRun};
pub use shared_strings::{SharedStringEntry, SharedStrings};
pub use style::{
    Alignment, Border, BorderLineStyle, BorderSide, CellFormat, ColorSpec, Fill, Font,
    HorizontalAlignment, IndexedColors, NamedStyle, NumFmt, PatternType, ResolvedStyle,
    ResolvedStyleCache, StyleSheet, Theme, Underline, VerticalAlignment,
};
