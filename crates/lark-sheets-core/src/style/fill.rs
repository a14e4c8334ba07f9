//! Fill fragment types

use super::ColorSpec;

/// A pattern fill record in the style sheet's fill list.
///
/// All parts are optional; an empty fill serializes as a bare `patternFill`
/// element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Fill {
    /// Pattern type; `None` means the attribute was absent
    pub pattern_type: Option<PatternType>,
    /// Foreground (pattern) color
    pub fg_color: Option<ColorSpec>,
    /// Background color
    pub bg_color: Option<ColorSpec>,
}

impl Fill {
    /// Create a new empty fill record
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a solid fill with the given foreground color
    pub fn solid(color: ColorSpec) -> Self {
        Fill {
            pattern_type: Some(PatternType::Solid),
            fg_color: Some(color),
            bg_color: None,
        }
    }

    /// Create a pattern fill
    pub fn pattern(pattern: PatternType, fg: ColorSpec, bg: ColorSpec) -> Self {
        Fill {
            pattern_type: Some(pattern),
            fg_color: Some(fg),
            bg_color: Some(bg),
        }
    }
}

/// Fill pattern type (`patternFill@patternType`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternType {
    None,
    Solid,
    MediumGray,
    DarkGray,
    LightGray,
    DarkHorizontal,
    DarkVertical,
    DarkDown,
    DarkUp,
    DarkGrid,
    DarkTrellis,
    LightHorizontal,
    LightVertical,
    LightDown,
    LightUp,
    LightGrid,
    LightTrellis,
    Gray125,
    Gray0625,
}
