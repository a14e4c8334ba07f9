//! Style sheet (styles.xml) read/write helpers

use std::io::{BufReader, Read};

use quick_xml::events::{BytesStart, Event};
use quick_xml::reader::Reader;

use crate::codec::{
    escape_attr, parse_bool_prop, parse_color_attrs, str_to_underline, underline_to_str,
    write_color_element,
};
use crate::error::XlsxResult;
use lark_sheets_core::style::{
    Alignment, Border, BorderLineStyle, BorderSide, CellFormat, ColorSpec, Fill, Font,
    HorizontalAlignment, NamedStyle, NumFmt, PatternType, StyleSheet, Underline,
    VerticalAlignment,
};

// === Writing ===

fn pattern_type_to_str(p: PatternType) -> &'static str {
    match p {
        PatternType::None => "none",
        PatternType::Solid => "solid",
        PatternType::MediumGray => "mediumGray",
        PatternType::DarkGray => "darkGray",
        PatternType::LightGray => "lightGray",
        PatternType::DarkHorizontal => "darkHorizontal",
        PatternType::DarkVertical => "darkVertical",
        PatternType::DarkDown => "darkDown",
        PatternType::DarkUp => "darkUp",
        PatternType::DarkGrid => "darkGrid",
        PatternType::DarkTrellis => "darkTrellis",
        PatternType::LightHorizontal => "lightHorizontal",
        PatternType::LightVertical => "lightVertical",
        PatternType::LightDown => "lightDown",
        PatternType::LightUp => "lightUp",
        PatternType::LightGrid => "lightGrid",
        PatternType::LightTrellis => "lightTrellis",
        PatternType::Gray125 => "gray125",
        PatternType::Gray0625 => "gray0625",
    }
}

fn str_to_pattern_type(s: &str) -> Option<PatternType> {
    match s {
        "none" => Some(PatternType::None),
        "solid" => Some(PatternType::Solid),
        "mediumGray" => Some(PatternType::MediumGray),
        "darkGray" => Some(PatternType::DarkGray),
        "lightGray" => Some(PatternType::LightGray),
        "darkHorizontal" => Some(PatternType::DarkHorizontal),
        "darkVertical" => Some(PatternType::DarkVertical),
        "darkDown" => Some(PatternType::DarkDown),
        "darkUp" => Some(PatternType::DarkUp),
        "darkGrid" => Some(PatternType::DarkGrid),
        "darkTrellis" => Some(PatternType::DarkTrellis),
        "lightHorizontal" => Some(PatternType::LightHorizontal),
        "lightVertical" => Some(PatternType::LightVertical),
        "lightDown" => Some(PatternType::LightDown),
        "lightUp" => Some(PatternType::LightUp),
        "lightGrid" => Some(PatternType::LightGrid),
        "lightTrellis" => Some(PatternType::LightTrellis),
        "gray125" => Some(PatternType::Gray125),
        "gray0625" => Some(PatternType::Gray0625),
        _ => None,
    }
}

fn border_style_to_str(s: BorderLineStyle) -> &'static str {
    match s {
        BorderLineStyle::Thin => "thin",
        BorderLineStyle::Medium => "medium",
        BorderLineStyle::Thick => "thick",
        BorderLineStyle::Dashed => "dashed",
        BorderLineStyle::Dotted => "dotted",
        BorderLineStyle::Double => "double",
        BorderLineStyle::Hair => "hair",
        BorderLineStyle::MediumDashed => "mediumDashed",
        BorderLineStyle::DashDot => "dashDot",
        BorderLineStyle::MediumDashDot => "mediumDashDot",
        BorderLineStyle::DashDotDot => "dashDotDot",
        BorderLineStyle::MediumDashDotDot => "mediumDashDotDot",
        BorderLineStyle::SlantDashDot => "slantDashDot",
    }
}

fn str_to_border_style(s: &str) -> Option<BorderLineStyle> {
    match s {
        "thin" => Some(BorderLineStyle::Thin),
        "medium" => Some(BorderLineStyle::Medium),
        "thick" => Some(BorderLineStyle::Thick),
        "dashed" => Some(BorderLineStyle::Dashed),
        "dotted" => Some(BorderLineStyle::Dotted),
        "double" => Some(BorderLineStyle::Double),
        "hair" => Some(BorderLineStyle::Hair),
        "mediumDashed" => Some(BorderLineStyle::MediumDashed),
        "dashDot" => Some(BorderLineStyle::DashDot),
        "mediumDashDot" => Some(BorderLineStyle::MediumDashDot),
        "dashDotDot" => Some(BorderLineStyle::DashDotDot),
        "mediumDashDotDot" => Some(BorderLineStyle::MediumDashDotDot),
        "slantDashDot" => Some(BorderLineStyle::SlantDashDot),
        _ => None,
    }
}

fn horiz_to_str(h: HorizontalAlignment) -> &'static str {
    match h {
        HorizontalAlignment::General => "general",
        HorizontalAlignment::Left => "left",
        HorizontalAlignment::Center => "center",
        HorizontalAlignment::Right => "right",
        HorizontalAlignment::Fill => "fill",
        HorizontalAlignment::Justify => "justify",
        HorizontalAlignment::CenterContinuous => "centerContinuous",
        HorizontalAlignment::Distributed => "distributed",
    }
}

fn str_to_horizontal(s: &str) -> Option<HorizontalAlignment> {
    match s {
        "general" => Some(HorizontalAlignment::General),
        "left" => Some(HorizontalAlignment::Left),
        "center" => Some(HorizontalAlignment::Center),
        "right" => Some(HorizontalAlignment::Right),
        "fill" => Some(HorizontalAlignment::Fill),
        "justify" => Some(HorizontalAlignment::Justify),
        "centerContinuous" => Some(HorizontalAlignment::CenterContinuous),
        "distributed" => Some(HorizontalAlignment::Distributed),
        _ => None,
    }
}

fn vert_to_str(v: VerticalAlignment) -> &'static str {
    match v {
        VerticalAlignment::Top => "top",
        VerticalAlignment::Center => "center",
        VerticalAlignment::Bottom => "bottom",
        VerticalAlignment::Justify => "justify",
        VerticalAlignment::Distributed => "distributed",
    }
}

fn str_to_vertical(s: &str) -> Option<VerticalAlignment> {
    match s {
        "top" => Some(VerticalAlignment::Top),
        "center" => Some(VerticalAlignment::Center),
        "bottom" => Some(VerticalAlignment::Bottom),
        "justify" => Some(VerticalAlignment::Justify),
        "distributed" => Some(VerticalAlignment::Distributed),
        _ => None,
    }
}

fn write_font(font: &Font) -> String {
    let mut s = String::from("<font>");
    if let Some(size) = font.size {
        s.push_str(&format!("<sz val=\"{size}\"/>"));
    }
    if let Some(name) = &font.name {
        s.push_str(&format!("<name val=\"{}\"/>", escape_attr(name)));
    }
    if let Some(family) = font.family {
        s.push_str(&format!("<family val=\"{family}\"/>"));
    }
    if let Some(charset) = font.charset {
        s.push_str(&format!("<charset val=\"{charset}\"/>"));
    }
    if let Some(color) = &font.color {
        s.push_str(&write_color_element("color", color));
    }
    // Presence of a marker element round-trips even when its value is false.
    match font.bold {
        Some(b) if b.get() => s.push_str("<b/>"),
        Some(_) => s.push_str("<b val=\"0\"/>"),
        None => {}
    }
    match font.italic {
        Some(i) if i.get() => s.push_str("<i/>"),
        Some(_) => s.push_str("<i val=\"0\"/>"),
        None => {}
    }
    match font.underline {
        Some(Underline::Single) => s.push_str("<u/>"),
        Some(u) => s.push_str(&format!("<u val=\"{}\"/>", underline_to_str(u))),
        None => {}
    }
    match font.strike {
        Some(st) if st.get() => s.push_str("<strike/>"),
        Some(_) => s.push_str("<strike val=\"0\"/>"),
        None => {}
    }
    s.push_str("</font>");
    s
}

fn write_fill(fill: &Fill) -> String {
    let mut s = String::from("<fill><patternFill");
    if let Some(pattern) = fill.pattern_type {
        s.push_str(&format!(" patternType=\"{}\"", pattern_type_to_str(pattern)));
    }
    if fill.fg_color.is_none() && fill.bg_color.is_none() {
        s.push_str("/></fill>");
        return s;
    }
    s.push('>');
    if let Some(fg) = &fill.fg_color {
        s.push_str(&write_color_element("fgColor", fg));
    }
    if let Some(bg) = &fill.bg_color {
        s.push_str(&write_color_element("bgColor", bg));
    }
    s.push_str("</patternFill></fill>");
    s
}

fn write_border_side(tag: &str, side: &BorderSide) -> String {
    // Sideless placeholders are still written; the consuming application
    // expects all four elements.
    match side.style {
        None => format!("<{tag}/>"),
        Some(style) => {
            let mut s = format!("<{tag} style=\"{}\">", border_style_to_str(style));
            if let Some(color) = &side.color {
                s.push_str(&write_color_element("color", color));
            }
            s.push_str(&format!("</{tag}>"));
            s
        }
    }
}

fn write_border(border: &Border) -> String {
    let mut s = String::from("<border>");
    s.push_str(&write_border_side("left", &border.left));
    s.push_str(&write_border_side("right", &border.right));
    s.push_str(&write_border_side("top", &border.top));
    s.push_str(&write_border_side("bottom", &border.bottom));
    s.push_str("</border>");
    s
}

fn write_alignment(a: &Alignment) -> String {
    let flag = |b: bool| u8::from(b);
    format!(
        "<alignment horizontal=\"{}\" indent=\"{}\" shrinkToFit=\"{}\" textRotation=\"{}\" vertical=\"{}\" wrapText=\"{}\"/>",
        horiz_to_str(a.horizontal),
        a.indent,
        flag(a.shrink_to_fit),
        a.text_rotation,
        vert_to_str(a.vertical),
        flag(a.wrap_text)
    )
}

fn write_xf(xf: &CellFormat) -> String {
    let flag = |b: bool| u8::from(b);
    let mut s = format!(
        "<xf applyAlignment=\"{}\" applyBorder=\"{}\" applyFont=\"{}\" applyFill=\"{}\" applyNumberFormat=\"{}\" applyProtection=\"{}\" borderId=\"{}\" fillId=\"{}\" fontId=\"{}\" numFmtId=\"{}\"",
        flag(xf.apply_alignment),
        flag(xf.apply_border),
        flag(xf.apply_font),
        flag(xf.apply_fill),
        flag(xf.apply_number_format),
        flag(xf.apply_protection),
        xf.border_id,
        xf.fill_id,
        xf.font_id,
        xf.num_fmt_id
    );
    if let Some(xf_id) = xf.xf_id {
        s.push_str(&format!(" xfId=\"{xf_id}\""));
    }
    s.push('>');
    s.push_str(&write_alignment(&xf.alignment));
    s.push_str("</xf>");
    s
}

fn write_cell_style(style: &NamedStyle) -> String {
    let mut s = String::from("<cellStyle");
    if let Some(builtin_id) = style.builtin_id {
        s.push_str(&format!(" builtInId=\"{builtin_id}\""));
    }
    s.push_str(&format!(
        " name=\"{}\" xfId=\"{}\"></cellStyle>",
        escape_attr(&style.name),
        style.xf_id
    ));
    s
}

/// Serialize a style sheet to styles.xml.
///
/// Empty sections are omitted entirely, and named styles whose format
/// record reference does not resolve are dropped (with a warning) rather
/// than emitted dangling.
pub fn write_styles_xml(sheet: &StyleSheet) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#,
    );

    let num_fmts = sheet.num_fmts();
    if !num_fmts.is_empty() {
        xml.push_str(&format!("<numFmts count=\"{}\">", num_fmts.len()));
        for num_fmt in num_fmts {
            xml.push_str(&format!(
                "<numFmt numFmtId=\"{}\" formatCode=\"{}\"/>",
                num_fmt.id,
                escape_attr(&num_fmt.code)
            ));
        }
        xml.push_str("</numFmts>");
    }

    if !sheet.fonts().is_empty() {
        xml.push_str(&format!("<fonts count=\"{}\">", sheet.fonts().len()));
        for font in sheet.fonts() {
            xml.push_str(&write_font(font));
        }
        xml.push_str("</fonts>");
    }

    if !sheet.fills().is_empty() {
        xml.push_str(&format!("<fills count=\"{}\">", sheet.fills().len()));
        for fill in sheet.fills() {
            xml.push_str(&write_fill(fill));
        }
        xml.push_str("</fills>");
    }

    if !sheet.borders().is_empty() {
        xml.push_str(&format!("<borders count=\"{}\">", sheet.borders().len()));
        for border in sheet.borders() {
            xml.push_str(&write_border(border));
        }
        xml.push_str("</borders>");
    }

    if !sheet.named_format_records().is_empty() {
        xml.push_str(&format!(
            "<cellStyleXfs count=\"{}\">",
            sheet.named_format_records().len()
        ));
        for xf in sheet.named_format_records() {
            xml.push_str(&write_xf(xf));
        }
        xml.push_str("</cellStyleXfs>");
    }

    if !sheet.cell_formats().is_empty() {
        xml.push_str(&format!(
            "<cellXfs count=\"{}\">",
            sheet.cell_formats().len()
        ));
        for xf in sheet.cell_formats() {
            xml.push_str(&write_xf(xf));
        }
        xml.push_str("</cellXfs>");
    }

    let record_count = sheet.named_format_records().len();
    let valid_styles: Vec<&NamedStyle> = sheet
        .named_styles()
        .iter()
        .filter(|style| {
            let ok = (style.xf_id as usize) < record_count;
            if !ok {
                log::warn!(
                    "dropping named style {:?}: xfId {} does not resolve (record count {})",
                    style.name,
                    style.xf_id,
                    record_count
                );
            }
            ok
        })
        .collect();
    if !valid_styles.is_empty() {
        xml.push_str(&format!("<cellStyles count=\"{}\">", valid_styles.len()));
        for style in valid_styles {
            xml.push_str(&write_cell_style(style));
        }
        xml.push_str("</cellStyles>");
    }

    if !sheet.indexed_colors.is_empty() {
        xml.push_str("<colors><indexedColors>");
        for argb in sheet.indexed_colors.entries() {
            xml.push_str(&format!("<rgbColor rgb=\"{}\"/>", escape_attr(argb)));
        }
        xml.push_str("</indexedColors></colors>");
    }

    xml.push_str("</styleSheet>");
    xml
}

// === Reading ===

fn attr_val(e: &BytesStart<'_>, key: &[u8]) -> Option<String> {
    e.attributes()
        .flatten()
        .find(|a| a.key.as_ref() == key)
        .and_then(|a| a.unescape_value().ok())
        .map(|v| v.into_owned())
}

fn parse_flag(v: &str) -> bool {
    v == "1" || v == "true"
}

fn parse_xf(e: &BytesStart<'_>) -> CellFormat {
    let mut xf = CellFormat::default();
    for attr in e.attributes().flatten() {
        let val = match attr.unescape_value() {
            Ok(v) => v,
            Err(_) => continue,
        };
        match attr.key.as_ref() {
            b"numFmtId" => xf.num_fmt_id = val.parse().unwrap_or(0),
            b"fontId" => xf.font_id = val.parse().unwrap_or(0),
            b"fillId" => xf.fill_id = val.parse().unwrap_or(0),
            b"borderId" => xf.border_id = val.parse().unwrap_or(0),
            b"xfId" => xf.xf_id = val.parse().ok(),
            b"applyNumberFormat" => xf.apply_number_format = parse_flag(&val),
            b"applyFont" => xf.apply_font = parse_flag(&val),
            b"applyFill" => xf.apply_fill = parse_flag(&val),
            b"applyBorder" => xf.apply_border = parse_flag(&val),
            b"applyAlignment" => xf.apply_alignment = parse_flag(&val),
            b"applyProtection" => xf.apply_protection = parse_flag(&val),
            _ => {}
        }
    }
    xf
}

fn parse_alignment(e: &BytesStart<'_>) -> Alignment {
    let mut align = Alignment::default();
    for attr in e.attributes().flatten() {
        let val = match attr.unescape_value() {
            Ok(v) => v,
            Err(_) => continue,
        };
        match attr.key.as_ref() {
            b"horizontal" => {
                if let Some(h) = str_to_horizontal(&val) {
                    align.horizontal = h;
                }
            }
            b"vertical" => {
                if let Some(v) = str_to_vertical(&val) {
                    align.vertical = v;
                }
            }
            b"indent" => align.indent = val.parse().unwrap_or(0),
            b"shrinkToFit" => align.shrink_to_fit = parse_flag(&val),
            b"textRotation" => align.text_rotation = val.parse().unwrap_or(0),
            b"wrapText" => align.wrap_text = parse_flag(&val),
            _ => {}
        }
    }
    align
}

fn parse_cell_style(e: &BytesStart<'_>) -> NamedStyle {
    let mut style = NamedStyle::default();
    for attr in e.attributes().flatten() {
        let val = match attr.unescape_value() {
            Ok(v) => v,
            Err(_) => continue,
        };
        match attr.key.as_ref() {
            b"name" => style.name = val.into_owned(),
            b"xfId" => style.xf_id = val.parse().unwrap_or(0),
            b"builtInId" | b"builtinId" => style.builtin_id = val.parse().ok(),
            _ => {}
        }
    }
    style
}

/// Read a style sheet from styles.xml.
///
/// Unknown enumeration literals (pattern types, border styles, alignments)
/// decode leniently to an unset value; boolean marker elements are strict
/// and reject anything outside the schema's lexical space.
pub fn read_styles_xml<R: Read>(reader: R) -> XlsxResult<StyleSheet> {
    let mut xml_reader = Reader::from_reader(BufReader::new(reader));
    xml_reader.trim_text(true);

    let mut buf = Vec::new();
    let mut sheet = StyleSheet::new();

    let mut current_font: Option<Font> = None;
    let mut in_fill = false;
    let mut current_fill = Fill::new();
    let mut current_border: Option<Border> = None;
    let mut current_side: Option<&'static str> = None;

    let mut in_cell_xfs = false;
    let mut in_cell_style_xfs = false;
    let mut current_xf: Option<CellFormat> = None;

    let mut in_indexed_colors = false;

    // Handles elements that can arrive either self-closed or as start tags.
    let handle_element = |e: &BytesStart<'_>,
                              sheet: &mut StyleSheet,
                              current_font: &mut Option<Font>,
                              in_fill: bool,
                              current_fill: &mut Fill,
                              current_border: &mut Option<Border>,
                              current_side: &Option<&'static str>,
                              current_xf: &mut Option<CellFormat>,
                              in_indexed_colors: bool|
     -> XlsxResult<()> {
        match e.name().as_ref() {
            b"numFmt" => {
                let id = attr_val(e, b"numFmtId").and_then(|v| v.parse().ok());
                let code = attr_val(e, b"formatCode");
                if let (Some(id), Some(code)) = (id, code) {
                    sheet.add_num_fmt(NumFmt::new(id, code));
                }
            }
            b"patternFill" if in_fill => {
                current_fill.pattern_type = attr_val(e, b"patternType")
                    .as_deref()
                    .and_then(str_to_pattern_type);
            }
            b"fgColor" if in_fill => current_fill.fg_color = parse_color_attrs(e),
            b"bgColor" if in_fill => current_fill.bg_color = parse_color_attrs(e),
            b"sz" => {
                if let Some(font) = current_font.as_mut() {
                    font.size = attr_val(e, b"val").and_then(|v| v.parse().ok());
                }
            }
            b"name" => {
                if let Some(font) = current_font.as_mut() {
                    font.name = attr_val(e, b"val");
                }
            }
            b"family" => {
                if let Some(font) = current_font.as_mut() {
                    font.family = attr_val(e, b"val").and_then(|v| v.parse().ok());
                }
            }
            b"charset" => {
                if let Some(font) = current_font.as_mut() {
                    font.charset = attr_val(e, b"val").and_then(|v| v.parse().ok());
                }
            }
            b"b" => {
                if let Some(font) = current_font.as_mut() {
                    font.bold = Some(parse_bool_prop(e)?.into());
                }
            }
            b"i" => {
                if let Some(font) = current_font.as_mut() {
                    font.italic = Some(parse_bool_prop(e)?.into());
                }
            }
            b"strike" => {
                if let Some(font) = current_font.as_mut() {
                    font.strike = Some(parse_bool_prop(e)?.into());
                }
            }
            b"u" => {
                if let Some(font) = current_font.as_mut() {
                    font.underline = Some(
                        attr_val(e, b"val")
                            .as_deref()
                            .and_then(str_to_underline)
                            .unwrap_or_default(),
                    );
                }
            }
            b"color" => {
                let color = parse_color_attrs(e);
                if let (Some(border), Some(side)) = (current_border.as_mut(), current_side) {
                    set_border_side_color(border, side, color);
                } else if let Some(font) = current_font.as_mut() {
                    font.color = color;
                }
            }
            b"alignment" => {
                if let Some(xf) = current_xf.as_mut() {
                    xf.alignment = parse_alignment(e);
                }
            }
            b"cellStyle" => {
                sheet.push_named_style(parse_cell_style(e));
            }
            b"rgbColor" if in_indexed_colors => {
                if let Some(rgb) = attr_val(e, b"rgb") {
                    sheet.indexed_colors.push(rgb);
                }
            }
            _ => {}
        }
        Ok(())
    };

    loop {
        match xml_reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"cellXfs" => in_cell_xfs = true,
                b"cellStyleXfs" => in_cell_style_xfs = true,
                b"indexedColors" => in_indexed_colors = true,
                b"font" => current_font = Some(Font::new()),
                b"fill" => {
                    in_fill = true;
                    current_fill = Fill::new();
                }
                b"border" => current_border = Some(Border::new()),
                b"left" | b"right" | b"top" | b"bottom" => {
                    if let Some(border) = current_border.as_mut() {
                        let side = side_name(&e);
                        current_side = Some(side);
                        set_border_side_style(
                            border,
                            side,
                            attr_val(&e, b"style").as_deref().and_then(str_to_border_style),
                        );
                    }
                }
                b"xf" if in_cell_xfs || in_cell_style_xfs => {
                    current_xf = Some(parse_xf(&e));
                }
                _ => handle_element(
                    &e,
                    &mut sheet,
                    &mut current_font,
                    in_fill,
                    &mut current_fill,
                    &mut current_border,
                    &current_side,
                    &mut current_xf,
                    in_indexed_colors,
                )?,
            },

            Ok(Event::Empty(e)) => match e.name().as_ref() {
                b"font" => {
                    sheet.push_font(Font::new());
                }
                b"fill" => {
                    sheet.push_fill(Fill::new());
                }
                b"border" => {
                    sheet.push_border(Border::new());
                }
                b"left" | b"right" | b"top" | b"bottom" => {
                    if let Some(border) = current_border.as_mut() {
                        set_border_side_style(
                            border,
                            side_name(&e),
                            attr_val(&e, b"style").as_deref().and_then(str_to_border_style),
                        );
                    }
                }
                b"xf" if in_cell_xfs || in_cell_style_xfs => {
                    let xf = parse_xf(&e);
                    if in_cell_xfs {
                        sheet.push_cell_format(xf);
                    } else {
                        sheet.push_named_format_record(xf);
                    }
                }
                _ => handle_element(
                    &e,
                    &mut sheet,
                    &mut current_font,
                    in_fill,
                    &mut current_fill,
                    &mut current_border,
                    &current_side,
                    &mut current_xf,
                    in_indexed_colors,
                )?,
            },

            Ok(Event::End(e)) => match e.name().as_ref() {
                b"cellXfs" => in_cell_xfs = false,
                b"cellStyleXfs" => in_cell_style_xfs = false,
                b"indexedColors" => in_indexed_colors = false,
                b"font" => {
                    if let Some(font) = current_font.take() {
                        sheet.push_font(font);
                    }
                }
                b"fill" => {
                    if in_fill {
                        in_fill = false;
                        sheet.push_fill(std::mem::take(&mut current_fill));
                    }
                }
                b"border" => {
                    if let Some(border) = current_border.take() {
                        sheet.push_border(border);
                    }
                }
                b"left" | b"right" | b"top" | b"bottom" => current_side = None,
                b"xf" => {
                    if let Some(xf) = current_xf.take() {
                        if in_cell_xfs {
                            sheet.push_cell_format(xf);
                        } else if in_cell_style_xfs {
                            sheet.push_named_format_record(xf);
                        }
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

    Ok(sheet)
}

fn side_name(e: &BytesStart<'_>) -> &'static str {
    match e.name().as_ref() {
        b"left" => "left",
        b"right" => "right",
        b"top" => "top",
        _ => "bottom",
    }
}

fn side_mut<'a>(border: &'a mut Border, side: &str) -> &'a mut BorderSide {
    match side {
        "left" => &mut border.left,
        "right" => &mut border.right,
        "top" => &mut border.top,
        _ => &mut border.bottom,
    }
}

fn set_border_side_style(border: &mut Border, side: &str, style: Option<BorderLineStyle>) {
    side_mut(border, side).style = style;
}

fn set_border_side_color(border: &mut Border, side: &str, color: Option<ColorSpec>) {
    side_mut(border, side).color = color;
}
