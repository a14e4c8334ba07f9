//! Shared markup primitives: quirk-compatible text escaping, boolean marker
//! elements, and color attribute handling.

use quick_xml::events::BytesStart;

use crate::error::{XlsxError, XlsxResult};
use lark_sheets_core::rich_text::{FontScheme, RunVerticalAlign};
use lark_sheets_core::style::{ColorSpec, Underline};

/// Whether a text value needs `xml:space="preserve"` to survive a
/// whitespace-normalizing consumer.
///
/// CR and TAB never trigger it: they are written as character references
/// (`&#xD;`, `&#x9;`) and survive on their own. LF is written literally, so
/// its presence anywhere in the string requires the attribute, as does any
/// other leading or trailing byte ≤ 0x20.
pub(crate) fn needs_space_preserve(s: &str) -> bool {
    let bytes = s.as_bytes();
    let triggers = |c: u8| c <= 0x20 && c != b'\t' && c != b'\r';
    match (bytes.first(), bytes.last()) {
        (Some(&first), Some(&last)) => {
            triggers(first) || triggers(last) || bytes.contains(&b'\n')
        }
        _ => false,
    }
}

/// Escape character data for a text element.
///
/// CR and TAB become character references so they round-trip through
/// consumers that normalize literal control characters; LF stays literal
/// (and is covered by [`needs_space_preserve`]).
pub(crate) fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\r' => out.push_str("&#xD;"),
            '\t' => out.push_str("&#x9;"),
            _ => out.push(c),
        }
    }
    out
}

pub(crate) fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Write a text element, adding `xml:space="preserve"` when the content
/// needs it.
pub(crate) fn write_text_element(tag: &str, text: &str) -> String {
    if needs_space_preserve(text) {
        format!("<{tag} xml:space=\"preserve\">{}</{tag}>", escape_text(text))
    } else {
        format!("<{tag}>{}</{tag}>", escape_text(text))
    }
}

/// Decode a boolean marker element.
///
/// A present element without a `val` attribute is true; `val` accepts the
/// schema's boolean lexical space ("true", "1", "false", "0") and anything
/// else is an error rather than a silent default.
pub(crate) fn parse_bool_prop(e: &BytesStart<'_>) -> XlsxResult<bool> {
    let mut value = true;
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == b"val" {
            let v = attr.unescape_value()?;
            value = match v.as_ref() {
                "true" | "1" => true,
                "false" | "0" => false,
                other => return Err(XlsxError::InvalidBooleanLiteral(other.to_string())),
            };
        }
    }
    Ok(value)
}

/// Decode the color attributes shared by style and run color elements.
///
/// Exactly one addressing scheme is kept, in fixed precedence: a direct
/// `rgb` value wins over `indexed`, which wins over `theme`/`tint`.
pub(crate) fn parse_color_attrs(e: &BytesStart<'_>) -> Option<ColorSpec> {
    let mut rgb: Option<String> = None;
    let mut indexed: Option<u32> = None;
    let mut theme: Option<u32> = None;
    let mut tint = 0.0f64;

    for attr in e.attributes().flatten() {
        let val = match attr.unescape_value() {
            Ok(v) => v,
            Err(_) => continue,
        };
        match attr.key.as_ref() {
            b"rgb" => rgb = Some(val.into_owned()),
            b"indexed" => indexed = val.parse().ok(),
            b"theme" => theme = val.parse().ok(),
            b"tint" => tint = val.parse().unwrap_or(0.0),
            _ => {}
        }
    }

    if let Some(argb) = rgb {
        Some(ColorSpec::Rgb(argb))
    } else if let Some(index) = indexed {
        Some(ColorSpec::Indexed(index))
    } else {
        theme.map(|index| ColorSpec::Theme { index, tint })
    }
}

/// Write a color element; a zero tint is the identity and is omitted.
pub(crate) fn write_color_element(tag: &str, color: &ColorSpec) -> String {
    match color {
        ColorSpec::Rgb(argb) => format!("<{tag} rgb=\"{}\"/>", escape_attr(argb)),
        ColorSpec::Indexed(index) => format!("<{tag} indexed=\"{index}\"/>"),
        ColorSpec::Theme { index, tint } => {
            if *tint == 0.0 {
                format!("<{tag} theme=\"{index}\"/>")
            } else {
                format!("<{tag} theme=\"{index}\" tint=\"{tint}\"/>")
            }
        }
    }
}

pub(crate) fn underline_to_str(u: Underline) -> &'static str {
    match u {
        Underline::None => "none",
        Underline::Single => "single",
        Underline::Double => "double",
        Underline::SingleAccounting => "singleAccounting",
        Underline::DoubleAccounting => "doubleAccounting",
    }
}

pub(crate) fn str_to_underline(s: &str) -> Option<Underline> {
    match s {
        "none" => Some(Underline::None),
        "single" => Some(Underline::Single),
        "double" => Some(Underline::Double),
        "singleAccounting" => Some(Underline::SingleAccounting),
        "doubleAccounting" => Some(Underline::DoubleAccounting),
        _ => None,
    }
}

pub(crate) fn vert_align_to_str(v: RunVerticalAlign) -> &'static str {
    match v {
        RunVerticalAlign::Baseline => "baseline",
        RunVerticalAlign::Superscript => "superscript",
        RunVerticalAlign::Subscript => "subscript",
    }
}

pub(crate) fn str_to_vert_align(s: &str) -> Option<RunVerticalAlign> {
    match s {
        "baseline" => Some(RunVerticalAlign::Baseline),
        "superscript" => Some(RunVerticalAlign::Superscript),
        "subscript" => Some(RunVerticalAlign::Subscript),
        _ => None,
    }
}

pub(crate) fn scheme_to_str(s: FontScheme) -> &'static str {
    match s {
        FontScheme::None => "none",
        FontScheme::Major => "major",
        FontScheme::Minor => "minor",
    }
}

pub(crate) fn str_to_scheme(s: &str) -> Option<FontScheme> {
    match s {
        "none" => Some(FontScheme::None),
        "major" => Some(FontScheme::Major),
        "minor" => Some(FontScheme::Minor),
        _ => None,
    }
}
