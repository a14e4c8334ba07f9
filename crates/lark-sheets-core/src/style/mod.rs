//! Cell and run formatting: fragments, the style sheet registry, and style
//! resolution.

mod alignment;
mod border;
mod color;
mod fill;
mod font;
mod number_format;
mod sheet;

pub use alignment::{Alignment, HorizontalAlignment, VerticalAlignment};
pub use border::{Border, BorderLineStyle, BorderSide};
pub use color::{ColorSpec, IndexedColors, Theme, DEFAULT_INDEXED_COLOR};
pub use fill::{Fill, PatternType};
pub use font::{Font, Underline};
pub use number_format::{
    builtin_num_fmt_code, builtin_num_fmt_id, NumFmt, BUILT_IN_NUM_FMTS, FIRST_CUSTOM_NUM_FMT_ID,
};
pub use sheet::{CellFormat, NamedStyle, ResolvedStyle, ResolvedStyleCache, StyleSheet};
