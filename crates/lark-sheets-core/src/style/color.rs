//! Color representation and resolution

use std::fmt;

/// Fallback for indexed colors with no palette entry.
///
/// A wrong color is preferable to aborting the decode of an otherwise-valid
/// document, so out-of-range indexed lookups resolve to opaque black.
pub const DEFAULT_INDEXED_COLOR: &str = "FF000000";

/// A color as it appears in a style sheet or rich-text run.
///
/// Exactly one variant is populated. `Rgb` carries the raw 8-hex-digit ARGB
/// string verbatim so that malformed-but-round-trippable input survives a
/// load/save cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorSpec {
    /// Direct ARGB color, e.g. `"FFFF0000"`
    Rgb(String),

    /// Reference into the workbook's indexed-color palette
    Indexed(u32),

    /// Theme color scheme reference with an optional lightness tint
    ///
    /// A tint of `0.0` is the identity and is omitted on encode.
    Theme {
        /// Index into the theme's color scheme, in declaration order
        index: u32,
        /// Tint value in [-1.0, 1.0]; negative darkens, positive lightens
        tint: f64,
    },
}

impl ColorSpec {
    /// Create a direct ARGB color
    pub fn rgb<S: Into<String>>(argb: S) -> Self {
        ColorSpec::Rgb(argb.into())
    }

    /// Create an indexed palette reference
    pub fn indexed(index: u32) -> Self {
        ColorSpec::Indexed(index)
    }

    /// Create an untinted theme reference
    pub fn theme(index: u32) -> Self {
        ColorSpec::Theme { index, tint: 0.0 }
    }

    /// Create a theme reference with a tint
    pub fn theme_tint(index: u32, tint: f64) -> Self {
        ColorSpec::Theme { index, tint }
    }
}

impl std::hash::Hash for ColorSpec {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        match self {
            ColorSpec::Rgb(argb) => {
                0u8.hash(state);
                argb.hash(state);
            }
            ColorSpec::Indexed(index) => {
                1u8.hash(state);
                index.hash(state);
            }
            ColorSpec::Theme { index, tint } => {
                2u8.hash(state);
                index.hash(state);
                tint.to_bits().hash(state);
            }
        }
    }
}

impl Eq for ColorSpec {}

impl fmt::Display for ColorSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorSpec::Rgb(argb) => write!(f, "#{argb}"),
            ColorSpec::Indexed(i) => write!(f, "indexed({i})"),
            ColorSpec::Theme { index, tint } => write!(f, "theme({index}, {tint})"),
        }
    }
}

/// The workbook's indexed-color override palette.
///
/// Legacy documents may override the standard indexed palette via the style
/// sheet's `colors` block. An empty palette resolves every index to
/// [`DEFAULT_INDEXED_COLOR`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexedColors {
    colors: Vec<String>,
}

impl IndexedColors {
    /// Create a palette from override entries in declaration order
    pub fn new(colors: Vec<String>) -> Self {
        Self { colors }
    }

    /// Append an override entry (decode path)
    pub fn push<S: Into<String>>(&mut self, argb: S) {
        self.colors.push(argb.into());
    }

    /// The raw override entries
    pub fn entries(&self) -> &[String] {
        &self.colors
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Resolve an indexed color reference to an ARGB string.
    ///
    /// The host application treats index 1 as the first override entry.
    /// Out-of-range lookups fall back to [`DEFAULT_INDEXED_COLOR`] rather
    /// than failing.
    pub fn argb(&self, index: u32) -> &str {
        match index
            .checked_sub(1)
            .and_then(|i| self.colors.get(i as usize))
        {
            Some(argb) => argb,
            None => {
                if !self.colors.is_empty() {
                    log::warn!(
                        "indexed color {index} out of range (palette size {}), using default",
                        self.colors.len()
                    );
                }
                DEFAULT_INDEXED_COLOR
            }
        }
    }
}

/// Theme color lookup built from the theme part's color scheme.
///
/// Element *i* is the *i*-th declared `sysClr`/`srgbClr` color, stored as a
/// 6-hex-digit RGB string without alpha.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Theme {
    colors: Vec<String>,
}

impl Theme {
    /// Create a theme lookup from scheme colors in declaration order
    pub fn new(colors: Vec<String>) -> Self {
        Self { colors }
    }

    /// The declared scheme color at `index`, if any
    pub fn color(&self, index: u32) -> Option<&str> {
        self.colors.get(index as usize).map(String::as_str)
    }

    /// Number of declared scheme colors
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Resolve a theme reference plus tint to an 8-hex-digit ARGB string.
    ///
    /// The tint is applied as a luminance adjustment in HSL space: negative
    /// values scale the luminance toward black, positive values blend it
    /// toward white. Tint `0.0` is the identity.
    pub fn argb(&self, index: u32, tint: f64) -> String {
        let base = match self.color(index) {
            Some(c) => c,
            None => {
                log::warn!(
                    "theme color {index} out of range (scheme size {}), using black",
                    self.colors.len()
                );
                return DEFAULT_INDEXED_COLOR.to_string();
            }
        };

        if tint == 0.0 {
            return format!("FF{base}");
        }

        let (r, g, b) = match parse_rgb_hex(base) {
            Some(rgb) => rgb,
            // Malformed scheme entry; pass it through untinted.
            None => return format!("FF{base}"),
        };

        let (h, s, l) = rgb_to_hsl(r, g, b);
        let l = if tint < 0.0 {
            l * (1.0 + tint)
        } else {
            l * (1.0 - tint) + tint
        };
        let (r, g, b) = hsl_to_rgb(h, s, l);
        format!("FF{r:02X}{g:02X}{b:02X}")
    }
}

fn parse_rgb_hex(hex: &str) -> Option<(u8, u8, u8)> {
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some((r, g, b))
}

fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let r = r as f64 / 255.0;
    let g = g as f64 / 255.0;
    let b = b as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max == min {
        // Achromatic
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    } / 6.0;

    (h, s, l)
}

fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (u8, u8, u8) {
    if s == 0.0 {
        let v = (l * 255.0).round().clamp(0.0, 255.0) as u8;
        return (v, v, v);
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    let channel = |t: f64| -> u8 {
        let t = t.rem_euclid(1.0);
        let v = if t < 1.0 / 6.0 {
            p + (q - p) * 6.0 * t
        } else if t < 1.0 / 2.0 {
            q
        } else if t < 2.0 / 3.0 {
            p + (q - p) * (2.0 / 3.0 - t) * 6.0
        } else {
            p
        };
        (v * 255.0).round().clamp(0.0, 255.0) as u8
    };

    (
        channel(h + 1.0 / 3.0),
        channel(h),
        channel(h - 1.0 / 3.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_indexed_color_uninitialised() {
        let colors = IndexedColors::default();
        assert_eq!(colors.argb(1), "FF000000");
    }

    #[test]
    fn test_indexed_color_initialised() {
        let colors = IndexedColors::new(vec!["00FF00FF".to_string()]);
        assert_eq!(colors.argb(1), "00FF00FF");
    }

    #[test]
    fn test_indexed_color_out_of_range() {
        let colors = IndexedColors::new(vec!["00FF00FF".to_string()]);
        assert_eq!(colors.argb(0), "FF000000");
        assert_eq!(colors.argb(2), "FF000000");
    }

    #[test]
    fn test_theme_color_untinted() {
        let theme = Theme::new(vec!["FFFFFF".to_string(), "000000".to_string()]);
        assert_eq!(theme.argb(0, 0.0), "FFFFFFFF");
        assert_eq!(theme.argb(1, 0.0), "FF000000");
    }

    #[test]
    fn test_theme_color_out_of_range() {
        let theme = Theme::new(vec!["FFFFFF".to_string()]);
        assert_eq!(theme.argb(7, 0.0), "FF000000");
    }

    #[test]
    fn test_tint_extremes() {
        let theme = Theme::new(vec!["4F81BD".to_string()]);
        // Tint -1 collapses luminance to zero; +1 saturates it.
        assert_eq!(theme.argb(0, -1.0), "FF000000");
        assert_eq!(theme.argb(0, 1.0), "FFFFFFFF");
    }

    #[test]
    fn test_tint_midpoints() {
        let white = Theme::new(vec!["FFFFFF".to_string()]);
        assert_eq!(white.argb(0, -0.5), "FF808080");

        let black = Theme::new(vec!["000000".to_string()]);
        assert_eq!(black.argb(0, 0.5), "FF808080");
    }

    #[test]
    fn test_hsl_round_trip_preserves_channels() {
        for &(r, g, b) in &[(79u8, 129u8, 189u8), (255, 0, 0), (18, 52, 86)] {
            let (h, s, l) = rgb_to_hsl(r, g, b);
            assert_eq!(hsl_to_rgb(h, s, l), (r, g, b));
        }
    }

    #[test]
    fn test_color_spec_equality_is_structural() {
        assert_eq!(ColorSpec::rgb("FFFF0000"), ColorSpec::rgb("FFFF0000"));
        assert_ne!(ColorSpec::rgb("FFFF0000"), ColorSpec::indexed(2));
        assert_ne!(ColorSpec::theme(1), ColorSpec::theme_tint(1, 0.1));
    }
}
