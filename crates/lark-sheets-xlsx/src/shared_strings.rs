//! Shared-string table (sharedStrings.xml) read/write helpers

use std::io::{BufReader, Read};

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::codec::{
    parse_bool_prop, parse_color_attrs, scheme_to_str, str_to_scheme, str_to_underline,
    str_to_vert_align, underline_to_str, vert_align_to_str, write_color_element,
    write_text_element,
};
use crate::error::XlsxResult;
use lark_sheets_core::rich_text::{RunProperties, TextRun};
use lark_sheets_core::shared_strings::{SharedStringEntry, SharedStrings};

// === Reading ===

/// Apply one rPr child element to the run properties being built.
fn apply_run_property(props: &mut RunProperties, e: &BytesStart<'_>) -> XlsxResult<()> {
    let val = |e: &BytesStart<'_>| -> Option<String> {
        e.attributes()
            .flatten()
            .find(|a| a.key.as_ref() == b"val")
            .and_then(|a| a.unescape_value().ok())
            .map(|v| v.into_owned())
    };

    match e.name().as_ref() {
        b"rFont" => props.font = val(e),
        b"charset" => props.charset = val(e).and_then(|v| v.parse().ok()),
        b"family" => props.family = val(e).and_then(|v| v.parse().ok()),
        b"b" => props.bold = parse_bool_prop(e)?.into(),
        b"i" => props.italic = parse_bool_prop(e)?.into(),
        b"strike" => props.strike = parse_bool_prop(e)?.into(),
        b"outline" => props.outline = parse_bool_prop(e)?.into(),
        b"shadow" => props.shadow = parse_bool_prop(e)?.into(),
        b"condense" => props.condense = parse_bool_prop(e)?.into(),
        b"extend" => props.extend = parse_bool_prop(e)?.into(),
        b"color" => props.color = parse_color_attrs(e),
        b"sz" => props.size = val(e).and_then(|v| v.parse().ok()),
        // A bare u element means a single underline.
        b"u" => props.underline = Some(val(e).as_deref().and_then(str_to_underline).unwrap_or_default()),
        b"vertAlign" => props.vert_align = val(e).as_deref().and_then(str_to_vert_align),
        b"scheme" => props.scheme = val(e).as_deref().and_then(str_to_scheme),
        _ => {}
    }
    Ok(())
}

/// Read a shared-string table from sharedStrings.xml.
///
/// Text content is taken verbatim; whitespace is significant inside text
/// elements, so nothing is trimmed. The `count` attribute is recorded as
/// the table's reference count but otherwise trusted blindly, and entries
/// are appended as-is to keep the file's string ids valid.
pub fn read_shared_strings_xml<R: Read>(reader: R) -> XlsxResult<SharedStrings> {
    let mut xml_reader = Reader::from_reader(BufReader::new(reader));

    let mut buf = Vec::new();
    let mut sst = SharedStrings::new();
    let mut declared_unique: Option<usize> = None;

    let mut plain: Option<String> = None;
    let mut runs: Vec<TextRun> = Vec::new();
    let mut in_r = false;
    let mut run_props: Option<RunProperties> = None;
    let mut in_rpr = false;
    let mut run_text = String::new();
    let mut in_t = false;
    let mut text = String::new();

    loop {
        match xml_reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"sst" => {
                    for attr in e.attributes().flatten() {
                        let val = match attr.unescape_value() {
                            Ok(v) => v,
                            Err(_) => continue,
                        };
                        match attr.key.as_ref() {
                            b"count" => {
                                if let Ok(count) = val.parse() {
                                    sst.set_references(count);
                                }
                            }
                            b"uniqueCount" => declared_unique = val.parse().ok(),
                            _ => {}
                        }
                    }
                }
                b"si" => {
                    plain = None;
                    runs.clear();
                }
                b"r" => {
                    in_r = true;
                    run_props = None;
                    run_text.clear();
                }
                b"rPr" => {
                    in_rpr = true;
                    run_props = Some(RunProperties::new());
                }
                b"t" => {
                    in_t = true;
                    text.clear();
                }
                _ => {
                    if in_rpr {
                        if let Some(props) = run_props.as_mut() {
                            apply_run_property(props, &e)?;
                        }
                    }
                }
            },

            Ok(Event::Empty(e)) => match e.name().as_ref() {
                // A self-closed entry still occupies an index.
                b"si" => {
                    sst.push_entry(SharedStringEntry::Plain(String::new()));
                }
                b"t" => {
                    if in_r {
                        run_text.clear();
                    } else {
                        plain = Some(String::new());
                    }
                }
                b"rPr" => {
                    run_props = Some(RunProperties::new());
                }
                _ => {
                    if in_rpr {
                        if let Some(props) = run_props.as_mut() {
                            apply_run_property(props, &e)?;
                        }
                    }
                }
            },

            Ok(Event::Text(e)) => {
                if in_t {
                    text.push_str(&e.unescape()?);
                }
            }

            Ok(Event::End(e)) => match e.name().as_ref() {
                b"t" => {
                    in_t = false;
                    if in_r {
                        run_text = std::mem::take(&mut text);
                    } else {
                        plain = Some(std::mem::take(&mut text));
                    }
                }
                b"rPr" => {
                    in_rpr = false;
                }
                b"r" => {
                    in_r = false;
                    runs.push(TextRun {
                        text: std::mem::take(&mut run_text),
                        properties: run_props.take(),
                    });
                }
                b"si" => {
                    if runs.is_empty() {
                        sst.push_entry(SharedStringEntry::Plain(plain.take().unwrap_or_default()));
                    } else {
                        sst.push_entry(SharedStringEntry::Rich(std::mem::take(&mut runs)));
                    }
                }
                _ => {}
            },

            Ok(Event::Eof) => break,
            Err(e) => return Err(e.into()),
            _ => {}
        }
        buf.clear();
    }

    // Headers are informational; a producer that miscounts still loads.
    if let Some(unique) = declared_unique {
        if unique != sst.len() {
            log::warn!(
                "sharedStrings uniqueCount {} does not match {} entries",
                unique,
                sst.len()
            );
        }
    }

    Ok(sst)
}

// === Writing ===

fn write_bool_marker(xml: &mut String, tag: &str, value: lark_sheets_core::BoolProperty) {
    if value.get() {
        xml.push('<');
        xml.push_str(tag);
        xml.push_str("/>");
    }
}

fn write_run_properties(props: &RunProperties) -> String {
    let mut xml = String::from("<rPr>");
    if let Some(font) = &props.font {
        xml.push_str(&format!(
            "<rFont val=\"{}\"/>",
            crate::codec::escape_attr(font)
        ));
    }
    if let Some(charset) = props.charset {
        xml.push_str(&format!("<charset val=\"{charset}\"/>"));
    }
    if let Some(family) = props.family {
        xml.push_str(&format!("<family val=\"{family}\"/>"));
    }
    write_bool_marker(&mut xml, "b", props.bold);
    write_bool_marker(&mut xml, "i", props.italic);
    write_bool_marker(&mut xml, "strike", props.strike);
    write_bool_marker(&mut xml, "outline", props.outline);
    write_bool_marker(&mut xml, "shadow", props.shadow);
    write_bool_marker(&mut xml, "condense", props.condense);
    write_bool_marker(&mut xml, "extend", props.extend);
    if let Some(color) = &props.color {
        xml.push_str(&write_color_element("color", color));
    }
    if let Some(size) = props.size {
        xml.push_str(&format!("<sz val=\"{size}\"/>"));
    }
    if let Some(underline) = props.underline {
        xml.push_str(&format!("<u val=\"{}\"/>", underline_to_str(underline)));
    }
    if let Some(vert_align) = props.vert_align {
        xml.push_str(&format!(
            "<vertAlign val=\"{}\"/>",
            vert_align_to_str(vert_align)
        ));
    }
    if let Some(scheme) = props.scheme {
        xml.push_str(&format!("<scheme val=\"{}\"/>", scheme_to_str(scheme)));
    }
    xml.push_str("</rPr>");
    xml
}

fn write_entry(entry: &SharedStringEntry) -> String {
    let mut xml = String::from("<si>");
    match entry {
        SharedStringEntry::Plain(text) => {
            xml.push_str(&write_text_element("t", text));
        }
        SharedStringEntry::Rich(runs) => {
            for run in runs {
                xml.push_str("<r>");
                if let Some(props) = &run.properties {
                    xml.push_str(&write_run_properties(props));
                }
                xml.push_str(&write_text_element("t", &run.text));
                xml.push_str("</r>");
            }
        }
    }
    xml.push_str("</si>");
    xml
}

/// Serialize a shared-string table to sharedStrings.xml.
///
/// `count` reports the tracked reference count and `uniqueCount` the number
/// of entries; both are recomputed here rather than echoed from any input.
pub fn write_shared_strings_xml(sst: &SharedStrings) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
"#,
    );
    xml.push_str(&format!(
        "<sst xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\" count=\"{}\" uniqueCount=\"{}\">",
        sst.references(),
        sst.len()
    ));
    for entry in sst.iter() {
        xml.push_str(&write_entry(entry));
    }
    xml.push_str("</sst>");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use lark_sheets_core::rich_text::{BoolProperty, FontScheme, RunVerticalAlign};
    use lark_sheets_core::style::{ColorSpec, Underline};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    const FIXTURE: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
        <sst xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"
             count="5"
             uniqueCount="5">
          <si>
            <t>Foo</t>
          </si>
          <si>
            <t>Bar</t>
          </si>
          <si>
            <t xml:space="preserve">Baz </t>
          </si>
          <si>
            <t>Quuk</t>
          </si>
          <si>
            <r>
                <t>Normal</t>
            </r>
            <r>
                <rPr>
                </rPr>
                <t>Normal2</t>
            </r>
            <r>
                <rPr>
                    <b val="true"/>
                    <i val="false"/>
                    <strike/>
                    <condense val="1"/>
                    <extend val="0"/>
                </rPr>
                <t>Bools</t>
            </r>
            <r>
                <rPr>
                    <sz val="13.5"/><color theme="1"/><rFont val="FontZ"/><family val="2"/><charset val="128"/><scheme val="minor"/>
                </rPr>
                <t>Font Spec</t>
            </r>
            <r>
                <rPr>
                    <u val="single"/>
                    <vertAlign val="superscript"/>
                </rPr>
                <t>Misc</t>
            </r>
          </si>
        </sst>"#;

    #[test]
    fn test_read_shared_strings() {
        let sst = read_shared_strings_xml(FIXTURE.as_bytes()).unwrap();
        assert_eq!(sst.references(), 5);
        assert_eq!(sst.len(), 5);

        assert_eq!(
            sst.get(0),
            Some(&SharedStringEntry::Plain("Foo".to_string()))
        );
        assert_eq!(
            sst.get(1),
            Some(&SharedStringEntry::Plain("Bar".to_string()))
        );
        assert_eq!(
            sst.get(2),
            Some(&SharedStringEntry::Plain("Baz ".to_string()))
        );
        assert_eq!(
            sst.get(3),
            Some(&SharedStringEntry::Plain("Quuk".to_string()))
        );

        let runs = match sst.get(4) {
            Some(SharedStringEntry::Rich(runs)) => runs,
            other => panic!("expected rich entry, got {other:?}"),
        };
        assert_eq!(runs.len(), 5);

        assert_eq!(runs[0], TextRun::plain("Normal"));

        // An empty rPr is still a present rPr.
        assert_eq!(runs[1].text, "Normal2");
        assert_eq!(runs[1].properties, Some(RunProperties::new()));

        assert_eq!(runs[2].text, "Bools");
        let props = runs[2].properties.as_ref().unwrap();
        assert_eq!(props.bold, BoolProperty::TRUE);
        assert_eq!(props.italic, BoolProperty::FALSE);
        assert_eq!(props.strike, BoolProperty::TRUE);
        assert_eq!(props.condense, BoolProperty::TRUE);
        assert_eq!(props.extend, BoolProperty::FALSE);
        assert_eq!(props.outline, BoolProperty::FALSE);
        assert_eq!(props.shadow, BoolProperty::FALSE);

        assert_eq!(runs[3].text, "Font Spec");
        let props = runs[3].properties.as_ref().unwrap();
        assert_eq!(props.size, Some(13.5));
        assert_eq!(props.color, Some(ColorSpec::theme(1)));
        assert_eq!(props.font.as_deref(), Some("FontZ"));
        assert_eq!(props.family, Some(2));
        assert_eq!(props.charset, Some(128));
        assert_eq!(props.scheme, Some(FontScheme::Minor));

        assert_eq!(runs[4].text, "Misc");
        let props = runs[4].properties.as_ref().unwrap();
        assert_eq!(props.underline, Some(Underline::Single));
        assert_eq!(props.vert_align, Some(RunVerticalAlign::Superscript));
    }

    #[test]
    fn test_self_closed_entry_keeps_its_index() {
        let xml = r#"<sst count="3" uniqueCount="3"><si><t>a</t></si><si/><si><t>c</t></si></sst>"#;
        let sst = read_shared_strings_xml(xml.as_bytes()).unwrap();

        assert_eq!(sst.len(), 3);
        assert_eq!(sst.text(0).as_deref(), Some("a"));
        assert_eq!(sst.text(1).as_deref(), Some(""));
        assert_eq!(sst.text(2).as_deref(), Some("c"));
    }

    #[test]
    fn test_read_rejects_invalid_boolean_literal() {
        let xml = r#"<sst count="1" uniqueCount="1"><si><r><rPr><b val="yes"/></rPr><t>x</t></r></si></sst>"#;
        let err = read_shared_strings_xml(xml.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            crate::error::XlsxError::InvalidBooleanLiteral(v) if v == "yes"
        ));
    }

    #[test]
    fn test_write_entry_shapes() {
        let plain = |s: &str| SharedStringEntry::Plain(s.to_string());
        assert_eq!(write_entry(&plain("")), "<si><t></t></si>");
        assert_eq!(write_entry(&plain("a b c")), "<si><t>a b c</t></si>");
        assert_eq!(
            write_entry(&plain(" abc")),
            "<si><t xml:space=\"preserve\"> abc</t></si>"
        );
        assert_eq!(
            write_entry(&plain("abc\n")),
            "<si><t xml:space=\"preserve\">abc\n</t></si>"
        );

        let rich = |props: RunProperties| {
            SharedStringEntry::Rich(vec![TextRun::formatted("a", props)])
        };

        let mut props = RunProperties::new();
        props.font = Some("Times New Roman".to_string());
        assert_eq!(
            write_entry(&rich(props)),
            "<si><r><rPr><rFont val=\"Times New Roman\"/></rPr><t>a</t></r></si>"
        );

        let mut props = RunProperties::new();
        props.bold = BoolProperty::TRUE;
        assert_eq!(
            write_entry(&rich(props)),
            "<si><r><rPr><b/></rPr><t>a</t></r></si>"
        );

        // A false marker is the same as no marker on the wire.
        let mut props = RunProperties::new();
        props.italic = BoolProperty::FALSE;
        assert_eq!(
            write_entry(&rich(props)),
            "<si><r><rPr></rPr><t>a</t></r></si>"
        );

        let mut props = RunProperties::new();
        props.color = Some(ColorSpec::theme_tint(5, 0.1));
        assert_eq!(
            write_entry(&rich(props)),
            "<si><r><rPr><color theme=\"5\" tint=\"0.1\"/></rPr><t>a</t></r></si>"
        );

        let mut props = RunProperties::new();
        props.size = Some(12.5);
        props.underline = Some(Underline::Single);
        props.vert_align = Some(RunVerticalAlign::Superscript);
        props.scheme = Some(FontScheme::Major);
        assert_eq!(
            write_entry(&rich(props)),
            "<si><r><rPr><sz val=\"12.5\"/><u val=\"single\"/><vertAlign val=\"superscript\"/><scheme val=\"major\"/></rPr><t>a</t></r></si>"
        );
    }

    #[test]
    fn test_counts_reflect_references_and_entries() {
        let mut sst = SharedStrings::new();
        sst.add("Foo");
        sst.add("Bar");
        sst.add("Foo");

        let xml = write_shared_strings_xml(&sst);
        assert!(xml.contains("count=\"3\" uniqueCount=\"2\""));

        let decoded = read_shared_strings_xml(xml.as_bytes()).unwrap();
        assert_eq!(decoded.references(), 3);
        assert_eq!(decoded.len(), 2);
    }

    #[test]
    fn test_round_trip_rich_text() {
        let mut props = RunProperties::new();
        props.bold = BoolProperty::TRUE;
        props.size = Some(13.5);
        props.color = Some(ColorSpec::rgb("FF123456"));
        props.scheme = Some(FontScheme::Minor);

        let mut sst = SharedStrings::new();
        sst.add("plain ");
        sst.add_rich(vec![
            TextRun::plain("Hello "),
            TextRun::formatted("world", props),
        ]);

        let xml = write_shared_strings_xml(&sst);
        let decoded = read_shared_strings_xml(xml.as_bytes()).unwrap();

        assert_eq!(decoded.len(), sst.len());
        for (a, b) in sst.iter().zip(decoded.iter()) {
            assert_eq!(a, b);
        }
    }

    proptest! {
        #[test]
        fn prop_plain_text_round_trips(text in "[ -~\\t\\r\\n]*") {
            let mut sst = SharedStrings::new();
            sst.add(text.clone());

            let xml = write_shared_strings_xml(&sst);
            let decoded = read_shared_strings_xml(xml.as_bytes()).unwrap();
            let roundtripped = decoded.text(0);
            prop_assert_eq!(roundtripped.as_deref(), Some(text.as_str()));
        }
    }
}
