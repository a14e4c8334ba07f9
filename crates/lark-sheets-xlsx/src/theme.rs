//! Theme part (theme1.xml) read helper
//!
//! Only the color scheme is of interest here: it supplies the palette that
//! theme color references in the style sheet index into.

use std::io::{BufReader, Read};

use quick_xml::events::Event;
use quick_xml::reader::Reader;

use crate::error::XlsxResult;
use lark_sheets_core::style::Theme;

/// Read a theme color lookup from a drawing theme part.
///
/// Scheme colors are collected in declaration order; each slot contributes
/// either a `sysClr` (via its `lastClr` attribute) or an `srgbClr` (via
/// `val`). Theme parts carry a namespace prefix, so elements are matched by
/// local name.
pub fn read_theme_xml<R: Read>(reader: R) -> XlsxResult<Theme> {
    let mut xml_reader = Reader::from_reader(BufReader::new(reader));
    xml_reader.trim_text(true);

    let mut buf = Vec::new();
    let mut colors: Vec<String> = Vec::new();
    let mut in_clr_scheme = false;

    loop {
        match xml_reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                match e.local_name().as_ref() {
                    b"clrScheme" => in_clr_scheme = true,
                    b"sysClr" if in_clr_scheme => {
                        for attr in e.attributes().flatten() {
                            if attr.key.local_name().as_ref() == b"lastClr" {
                                if let Ok(v) = attr.unescape_value() {
                                    colors.push(v.into_owned());
                                }
                            }
                        }
                    }
                    b"srgbClr" if in_clr_scheme => {
                        for attr in e.attributes().flatten() {
                            if attr.key.local_name().as_ref() == b"val" {
                                if let Ok(v) = attr.unescape_value() {
                                    colors.push(v.into_owned());
                                }
                            }
                        }
                    }
                    _ => {}
                }
            }
            Ok(Event::End(e)) => {
                if e.local_name().as_ref() == b"clrScheme" {
                    in_clr_scheme = false;
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.into()),
            _ => {}
        }
        buf.clear();
    }

    Ok(Theme::new(colors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const THEME: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" name="Office Theme">
  <a:themeElements>
    <a:clrScheme name="Office">
      <a:dk1><a:sysClr val="windowText" lastClr="000000"/></a:dk1>
      <a:lt1><a:sysClr val="window" lastClr="FFFFFF"/></a:lt1>
      <a:dk2><a:srgbClr val="1F497D"/></a:dk2>
      <a:lt2><a:srgbClr val="EEECE1"/></a:lt2>
      <a:accent1><a:srgbClr val="4F81BD"/></a:accent1>
      <a:accent2><a:srgbClr val="C0504D"/></a:accent2>
    </a:clrScheme>
    <a:fontScheme name="Office">
      <a:majorFont><a:latin typeface="Cambria"/></a:majorFont>
    </a:fontScheme>
  </a:themeElements>
</a:theme>"#;

    #[test]
    fn test_read_theme_colors_in_declaration_order() {
        let theme = read_theme_xml(THEME.as_bytes()).unwrap();
        assert_eq!(theme.len(), 6);
        assert_eq!(theme.color(0), Some("000000"));
        assert_eq!(theme.color(1), Some("FFFFFF"));
        assert_eq!(theme.color(2), Some("1F497D"));
        assert_eq!(theme.color(4), Some("4F81BD"));
        assert_eq!(theme.color(6), None);
    }

    #[test]
    fn test_colors_outside_scheme_are_ignored() {
        let xml = r#"<a:theme xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main">
            <a:themeElements>
              <a:clrScheme name="x"><a:dk1><a:srgbClr val="111111"/></a:dk1></a:clrScheme>
              <a:other><a:srgbClr val="222222"/></a:other>
            </a:themeElements>
        </a:theme>"#;
        let theme = read_theme_xml(xml.as_bytes()).unwrap();
        assert_eq!(theme.len(), 1);
        assert_eq!(theme.color(0), Some("111111"));
    }

    #[test]
    fn test_resolves_tinted_reference() {
        let theme = read_theme_xml(THEME.as_bytes()).unwrap();
        assert_eq!(theme.argb(4, 0.0), "FF4F81BD");
        assert_eq!(theme.argb(0, 1.0), "FFFFFFFF");
    }
}
