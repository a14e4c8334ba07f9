//! The style sheet registry: fragment lists, interning, and the two-level
//! style cascade.

use std::hash::{Hash, Hasher};

use ahash::AHashMap;

use super::number_format::{
    builtin_num_fmt_code, builtin_num_fmt_id, NumFmt, FIRST_CUSTOM_NUM_FMT_ID,
};
use super::{Alignment, Border, ColorSpec, Fill, Font, IndexedColors, Theme};
use crate::error::{Error, Result};
use crate::style::color::DEFAULT_INDEXED_COLOR;

/// A cell format record ("xf").
///
/// References fragments by id and carries one apply flag per formatting
/// dimension. `xf_id`, when set, points at a named-style format record in
/// the style sheet's named-format list and must resolve to an existing
/// record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CellFormat {
    pub num_fmt_id: u32,
    pub font_id: u32,
    pub fill_id: u32,
    pub border_id: u32,
    /// Named-style format record reference; `None` when the attribute was
    /// absent
    pub xf_id: Option<u32>,
    pub apply_number_format: bool,
    pub apply_font: bool,
    pub apply_fill: bool,
    pub apply_border: bool,
    pub apply_alignment: bool,
    pub apply_protection: bool,
    pub alignment: Alignment,
}

/// A named style ("cellStyle"): a human-readable name bound to a
/// named-style format record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NamedStyle {
    pub name: String,
    /// Built-in style id, when this names one of the host application's
    /// predefined styles
    pub builtin_id: Option<u32>,
    /// Index into the named-style format record list
    pub xf_id: u32,
}

/// The effective formatting of one cell format id after cascading the
/// optional named-style layer under the direct cell record.
///
/// Derived, never persisted; unresolved groups stay `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedStyle {
    pub font: Option<Font>,
    pub fill: Option<Fill>,
    pub border: Option<Border>,
    pub number_format: Option<NumFmt>,
    pub alignment: Option<Alignment>,
    pub apply_number_format: bool,
    pub apply_font: bool,
    pub apply_fill: bool,
    pub apply_border: bool,
    pub apply_alignment: bool,
    pub apply_protection: bool,
    /// The cell record's named-style reference, unchanged
    pub named_style: Option<u32>,
}

/// The style registry owning all fragment lists.
///
/// Each list position doubles as that fragment's 0-based id; ids are
/// assigned in insertion order and never reused. Interning keeps the lists
/// deduplicated: some consumers treat non-identical-but-equal fragments as
/// distinct styles, so duplicates are a correctness problem, not just bloat.
#[derive(Debug, Default)]
pub struct StyleSheet {
    num_fmts: Vec<NumFmt>,
    fonts: Vec<Font>,
    fills: Vec<Fill>,
    borders: Vec<Border>,
    /// Named-style format records (the base layer of the cascade)
    named_format_records: Vec<CellFormat>,
    /// Direct cell format records
    cell_formats: Vec<CellFormat>,
    named_styles: Vec<NamedStyle>,
    /// Indexed-color override palette from the `colors` block
    pub indexed_colors: IndexedColors,
    /// Theme color lookup, when the package carries a theme part
    pub theme: Option<Theme>,

    // Interning side-indexes: structural hash -> first id with that hash.
    custom_num_fmt_ids: AHashMap<String, u32>,
    font_index: AHashMap<u64, u32>,
    fill_index: AHashMap<u64, u32>,
    border_index: AHashMap<u64, u32>,
    named_format_index: AHashMap<u64, u32>,
    cell_format_index: AHashMap<u64, u32>,
}

fn fragment_key<T: Hash>(value: &T) -> u64 {
    let mut hasher = ahash::AHasher::default();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Get-or-insert into an id-ordered fragment list.
///
/// The hash index is a fast path only; structural equality decides reuse,
/// so a hash collision falls back to appending a new entry.
fn intern<T: Hash + PartialEq>(items: &mut Vec<T>, index: &mut AHashMap<u64, u32>, value: T) -> u32 {
    let key = fragment_key(&value);
    if let Some(&id) = index.get(&key) {
        if items[id as usize] == value {
            return id;
        }
    }
    push_fragment(items, index, value)
}

/// Unconditional append (decode path); registers the hash key if vacant so
/// later interning can find the entry.
fn push_fragment<T: Hash>(items: &mut Vec<T>, index: &mut AHashMap<u64, u32>, value: T) -> u32 {
    let key = fragment_key(&value);
    let id = items.len() as u32;
    index.entry(key).or_insert(id);
    items.push(value);
    id
}

impl StyleSheet {
    /// Create an empty style sheet
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty style sheet bound to a theme lookup
    pub fn with_theme(theme: Theme) -> Self {
        StyleSheet {
            theme: Some(theme),
            ..Self::default()
        }
    }

    // === Fragment lists ===

    pub fn fonts(&self) -> &[Font] {
        &self.fonts
    }

    pub fn fills(&self) -> &[Fill] {
        &self.fills
    }

    pub fn borders(&self) -> &[Border] {
        &self.borders
    }

    pub fn num_fmts(&self) -> &[NumFmt] {
        &self.num_fmts
    }

    pub fn named_format_records(&self) -> &[CellFormat] {
        &self.named_format_records
    }

    pub fn cell_formats(&self) -> &[CellFormat] {
        &self.cell_formats
    }

    pub fn named_styles(&self) -> &[NamedStyle] {
        &self.named_styles
    }

    pub fn font(&self, id: u32) -> Option<&Font> {
        self.fonts.get(id as usize)
    }

    pub fn fill(&self, id: u32) -> Option<&Fill> {
        self.fills.get(id as usize)
    }

    pub fn border(&self, id: u32) -> Option<&Border> {
        self.borders.get(id as usize)
    }

    pub fn cell_format(&self, id: u32) -> Option<&CellFormat> {
        self.cell_formats.get(id as usize)
    }

    // === Interning ===

    /// Get-or-insert a font, returning its id
    pub fn intern_font(&mut self, font: Font) -> u32 {
        intern(&mut self.fonts, &mut self.font_index, font)
    }

    /// Get-or-insert a fill, returning its id
    pub fn intern_fill(&mut self, fill: Fill) -> u32 {
        intern(&mut self.fills, &mut self.fill_index, fill)
    }

    /// Get-or-insert a border, returning its id
    pub fn intern_border(&mut self, border: Border) -> u32 {
        intern(&mut self.borders, &mut self.border_index, border)
    }

    /// Get-or-insert a cell format record, returning its id
    pub fn intern_cell_format(&mut self, xf: CellFormat) -> u32 {
        intern(&mut self.cell_formats, &mut self.cell_format_index, xf)
    }

    /// Get-or-insert a named-style format record, returning its id
    pub fn intern_named_format_record(&mut self, xf: CellFormat) -> u32 {
        intern(
            &mut self.named_format_records,
            &mut self.named_format_index,
            xf,
        )
    }

    // === Decode-path appends (preserve source order and duplicates) ===

    pub fn push_font(&mut self, font: Font) -> u32 {
        push_fragment(&mut self.fonts, &mut self.font_index, font)
    }

    pub fn push_fill(&mut self, fill: Fill) -> u32 {
        push_fragment(&mut self.fills, &mut self.fill_index, fill)
    }

    pub fn push_border(&mut self, border: Border) -> u32 {
        push_fragment(&mut self.borders, &mut self.border_index, border)
    }

    pub fn push_cell_format(&mut self, xf: CellFormat) -> u32 {
        push_fragment(&mut self.cell_formats, &mut self.cell_format_index, xf)
    }

    pub fn push_named_format_record(&mut self, xf: CellFormat) -> u32 {
        push_fragment(
            &mut self.named_format_records,
            &mut self.named_format_index,
            xf,
        )
    }

    pub fn push_named_style(&mut self, style: NamedStyle) -> u32 {
        let id = self.named_styles.len() as u32;
        self.named_styles.push(style);
        id
    }

    // === Number format registry ===

    /// Map a format code to an id.
    ///
    /// Built-in codes win; otherwise an existing custom entry is reused;
    /// otherwise a new custom entry is allocated at
    /// `max(164, last_custom + 1)`.
    pub fn number_format_id(&mut self, code: &str) -> u32 {
        if let Some(id) = builtin_num_fmt_id(code) {
            return id;
        }
        if let Some(&id) = self.custom_num_fmt_ids.get(code) {
            return id;
        }
        let id = self
            .num_fmts
            .iter()
            .map(|n| n.id + 1)
            .max()
            .unwrap_or(0)
            .max(FIRST_CUSTOM_NUM_FMT_ID);
        self.add_num_fmt(NumFmt::new(id, code));
        id
    }

    /// Insertion primitive for custom number formats.
    ///
    /// Ids below 164 are built-in and never stored; an id that is already
    /// present is left untouched. Callers allocating ids directly must keep
    /// them ≥164 and increasing, or later allocations from
    /// [`Self::number_format_id`] could collide.
    pub fn add_num_fmt(&mut self, num_fmt: NumFmt) {
        if num_fmt.id < FIRST_CUSTOM_NUM_FMT_ID {
            return;
        }
        if self.num_fmts.iter().any(|n| n.id == num_fmt.id) {
            return;
        }
        self.custom_num_fmt_ids
            .insert(num_fmt.code.clone(), num_fmt.id);
        self.num_fmts.push(num_fmt);
    }

    /// The format entry for an id: custom entries first, then the built-in
    /// table, then "general" for anything unknown.
    pub fn num_fmt_for_id(&self, id: u32) -> NumFmt {
        if let Some(n) = self.num_fmts.iter().find(|n| n.id == id) {
            return n.clone();
        }
        match builtin_num_fmt_code(id) {
            Some(code) => NumFmt::new(id, code),
            None => NumFmt::new(id, "general"),
        }
    }

    // === Color resolution ===

    /// Resolve any color spec to an 8-hex-digit ARGB string.
    pub fn argb_value(&self, color: &ColorSpec) -> String {
        match color {
            ColorSpec::Rgb(argb) => argb.clone(),
            ColorSpec::Indexed(index) => self.indexed_colors.argb(*index).to_string(),
            ColorSpec::Theme { index, tint } => match &self.theme {
                Some(theme) => theme.argb(*index, *tint),
                None => {
                    log::warn!("theme color {index} referenced but no theme is loaded");
                    DEFAULT_INDEXED_COLOR.to_string()
                }
            },
        }
    }

    // === Cascade resolution ===

    /// Resolve a cell format id to its effective style.
    ///
    /// The named-style format record referenced by the cell record's xfId,
    /// when present, forms the base layer: each apply flag is the OR of
    /// both layers, and each value comes from the cell record when its own
    /// flag is set, else from the base record when the base's flag is set.
    /// Cascades are exactly two levels deep; named styles do not chain.
    pub fn resolve(&self, cell_format_id: u32) -> Result<ResolvedStyle> {
        let cell = self
            .cell_formats
            .get(cell_format_id as usize)
            .ok_or(Error::FormatIndexOutOfRange(
                cell_format_id,
                self.cell_formats.len(),
            ))?;

        let base = match cell.xf_id {
            Some(xf_id) => Some(
                self.named_format_records
                    .get(xf_id as usize)
                    .ok_or(Error::DanglingNamedStyle(
                        xf_id,
                        self.named_format_records.len(),
                    ))?,
            ),
            None => None,
        };

        // Dangling fragment ids inside a chosen record resolve leniently to
        // an unresolved group; a sloppy producer must not abort the load.
        let pick = |cell_flag: bool, base_flag: bool, cell_id: u32, base_id: u32| -> Option<u32> {
            if cell_flag {
                Some(cell_id)
            } else if base_flag {
                Some(base_id)
            } else {
                None
            }
        };

        let base_flags = base.map(|b| {
            (
                b.apply_number_format,
                b.apply_font,
                b.apply_fill,
                b.apply_border,
                b.apply_alignment,
                b.apply_protection,
            )
        });
        let (b_num, b_font, b_fill, b_border, b_align, b_prot) =
            base_flags.unwrap_or((false, false, false, false, false, false));

        let font = pick(cell.apply_font, b_font, cell.font_id, base.map_or(0, |b| b.font_id))
            .and_then(|id| self.fonts.get(id as usize).cloned());
        let fill = pick(cell.apply_fill, b_fill, cell.fill_id, base.map_or(0, |b| b.fill_id))
            .and_then(|id| self.fills.get(id as usize).cloned());
        let border = pick(
            cell.apply_border,
            b_border,
            cell.border_id,
            base.map_or(0, |b| b.border_id),
        )
        .and_then(|id| self.borders.get(id as usize).cloned());
        let number_format = pick(
            cell.apply_number_format,
            b_num,
            cell.num_fmt_id,
            base.map_or(0, |b| b.num_fmt_id),
        )
        .map(|id| self.num_fmt_for_id(id));
        let alignment = if cell.apply_alignment {
            Some(cell.alignment)
        } else if b_align {
            base.map(|b| b.alignment)
        } else {
            None
        };

        Ok(ResolvedStyle {
            font,
            fill,
            border,
            number_format,
            alignment,
            apply_number_format: cell.apply_number_format || b_num,
            apply_font: cell.apply_font || b_font,
            apply_fill: cell.apply_fill || b_fill,
            apply_border: cell.apply_border || b_border,
            apply_alignment: cell.apply_alignment || b_align,
            apply_protection: cell.apply_protection || b_prot,
            named_style: cell.xf_id,
        })
    }
}

/// Read-through memo for [`StyleSheet::resolve`].
///
/// Resolution is idempotent, so the first computed result per id is kept for
/// the lifetime of the cache. Appending to the style sheet after caching is
/// fine: ids are stable, so existing entries never go stale.
#[derive(Debug, Default)]
pub struct ResolvedStyleCache {
    cache: AHashMap<u32, ResolvedStyle>,
}

impl ResolvedStyleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `cell_format_id`, computing at most once per id.
    pub fn get_or_resolve(
        &mut self,
        sheet: &StyleSheet,
        cell_format_id: u32,
    ) -> Result<&ResolvedStyle> {
        use std::collections::hash_map::Entry;
        match self.cache.entry(cell_format_id) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => Ok(entry.insert(sheet.resolve(cell_format_id)?)),
        }
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{BorderLineStyle, PatternType};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_intern_font_is_idempotent() {
        let mut sheet = StyleSheet::new();

        let font = Font::new().with_size(10.0).with_name("Andale Mono");
        let id1 = sheet.intern_font(font.clone());
        let id2 = sheet.intern_font(font.clone());

        assert_eq!(id1, id2);
        assert_eq!(sheet.fonts().len(), 1);

        let id3 = sheet.intern_font(font.with_bold());
        assert_ne!(id1, id3);
        assert_eq!(sheet.fonts().len(), 2);
    }

    #[test]
    fn test_intern_distinguishes_unset_from_explicit() {
        let mut sheet = StyleSheet::new();

        let plain = Font::new().with_size(11.0);
        let mut explicit = plain.clone();
        explicit.bold = Some(crate::rich_text::BoolProperty::FALSE);

        let id1 = sheet.intern_font(plain);
        let id2 = sheet.intern_font(explicit);
        assert_ne!(id1, id2);
        assert_eq!(sheet.fonts().len(), 2);
    }

    #[test]
    fn test_intern_fill_and_border() {
        let mut sheet = StyleSheet::new();

        let fill = Fill::solid(ColorSpec::rgb("FFFFFF00"));
        assert_eq!(sheet.intern_fill(fill.clone()), 0);
        assert_eq!(sheet.intern_fill(fill), 0);
        assert_eq!(
            sheet.intern_fill(Fill::pattern(
                PatternType::Gray125,
                ColorSpec::rgb("FF000000"),
                ColorSpec::rgb("FFFFFFFF"),
            )),
            1
        );

        let border = Border::outline(BorderLineStyle::Thin);
        assert_eq!(sheet.intern_border(border.clone()), 0);
        assert_eq!(sheet.intern_border(border), 0);
        assert_eq!(sheet.borders().len(), 1);
    }

    #[test]
    fn test_intern_cell_format_includes_xf_id_presence() {
        let mut sheet = StyleSheet::new();

        let xf = CellFormat {
            apply_font: true,
            ..CellFormat::default()
        };
        let with_ref = CellFormat {
            xf_id: Some(0),
            ..xf.clone()
        };

        let id1 = sheet.intern_cell_format(xf.clone());
        let id2 = sheet.intern_cell_format(with_ref);
        let id3 = sheet.intern_cell_format(xf);
        assert_ne!(id1, id2);
        assert_eq!(id1, id3);
        assert_eq!(sheet.cell_formats().len(), 2);
    }

    #[test]
    fn test_number_format_registry() {
        let mut sheet = StyleSheet::new();

        assert_eq!(sheet.number_format_id("0"), 1);
        assert_eq!(sheet.number_format_id("0.00e+00"), 11);
        assert_eq!(sheet.number_format_id("mm-dd-yy"), 14);
        assert_eq!(sheet.num_fmts().len(), 0);

        assert_eq!(sheet.number_format_id("hh:mm:ss"), 164);
        assert_eq!(sheet.number_format_id("yyyy/mm/dd"), 165);
        assert_eq!(sheet.num_fmts().len(), 2);

        // Re-requesting returns the existing ids without growth.
        assert_eq!(sheet.number_format_id("hh:mm:ss"), 164);
        assert_eq!(sheet.number_format_id("yyyy/mm/dd"), 165);
        assert_eq!(sheet.num_fmts().len(), 2);
    }

    #[test]
    fn test_add_num_fmt_ignores_builtin_range_and_duplicates() {
        let mut sheet = StyleSheet::new();

        sheet.add_num_fmt(NumFmt::new(1, "0"));
        assert_eq!(sheet.num_fmts().len(), 0);
        sheet.add_num_fmt(NumFmt::new(14, "mm-dd-yy"));
        assert_eq!(sheet.num_fmts().len(), 0);
        sheet.add_num_fmt(NumFmt::new(164, "hh:mm:ss"));
        assert_eq!(sheet.num_fmts().len(), 1);
        sheet.add_num_fmt(NumFmt::new(165, "yyyy/mm/dd"));
        assert_eq!(sheet.num_fmts().len(), 2);
        sheet.add_num_fmt(NumFmt::new(165, "yyyy/mm/dd"));
        assert_eq!(sheet.num_fmts().len(), 2);
    }

    #[test]
    fn test_resolve_out_of_range() {
        let sheet = StyleSheet::new();
        assert_eq!(
            sheet.resolve(0),
            Err(Error::FormatIndexOutOfRange(0, 0))
        );
    }

    #[test]
    fn test_resolve_dangling_named_style() {
        let mut sheet = StyleSheet::new();
        sheet.push_cell_format(CellFormat {
            xf_id: Some(3),
            ..CellFormat::default()
        });
        assert_eq!(sheet.resolve(0), Err(Error::DanglingNamedStyle(3, 0)));
    }

    #[test]
    fn test_resolve_without_named_style() {
        let mut sheet = StyleSheet::new();
        let font_id = sheet.intern_font(Font::new().with_bold());
        sheet.push_cell_format(CellFormat {
            font_id,
            apply_font: true,
            ..CellFormat::default()
        });

        let resolved = sheet.resolve(0).unwrap();
        assert_eq!(resolved.named_style, None);
        assert!(resolved.apply_font);
        assert_eq!(resolved.font, Some(Font::new().with_bold()));
        assert_eq!(resolved.fill, None);
        assert_eq!(resolved.border, None);
    }

    #[test]
    fn test_resolve_or_combines_apply_flags() {
        let mut sheet = StyleSheet::new();

        let border_id = sheet.intern_border(Border::outline(BorderLineStyle::Thin));
        let font_id = sheet.intern_font(Font::new().with_italic());

        // Base record applies a border; the cell record applies a font.
        sheet.push_named_format_record(CellFormat {
            border_id,
            apply_border: true,
            apply_font: false,
            ..CellFormat::default()
        });
        sheet.push_cell_format(CellFormat {
            font_id,
            xf_id: Some(0),
            apply_border: false,
            apply_font: true,
            ..CellFormat::default()
        });

        let resolved = sheet.resolve(0).unwrap();
        assert!(resolved.apply_border);
        assert!(resolved.apply_font);
        assert_eq!(resolved.named_style, Some(0));
        assert_eq!(resolved.border, Some(Border::outline(BorderLineStyle::Thin)));
        assert_eq!(resolved.font, Some(Font::new().with_italic()));
    }

    #[test]
    fn test_resolve_cell_record_wins_when_both_apply() {
        let mut sheet = StyleSheet::new();

        let base_font = sheet.intern_font(Font::new().with_name("Arial"));
        let cell_font = sheet.intern_font(Font::new().with_name("Calibri"));

        sheet.push_named_format_record(CellFormat {
            font_id: base_font,
            apply_font: true,
            ..CellFormat::default()
        });
        sheet.push_cell_format(CellFormat {
            font_id: cell_font,
            xf_id: Some(0),
            apply_font: true,
            ..CellFormat::default()
        });

        let resolved = sheet.resolve(0).unwrap();
        assert_eq!(resolved.font, Some(Font::new().with_name("Calibri")));
    }

    #[test]
    fn test_resolve_number_format_group() {
        let mut sheet = StyleSheet::new();
        let id = sheet.number_format_id("yyyy/mm/dd");
        sheet.push_cell_format(CellFormat {
            num_fmt_id: id,
            apply_number_format: true,
            ..CellFormat::default()
        });

        let resolved = sheet.resolve(0).unwrap();
        assert_eq!(resolved.number_format, Some(NumFmt::new(164, "yyyy/mm/dd")));
    }

    #[test]
    fn test_resolve_is_idempotent_and_cacheable() {
        let mut sheet = StyleSheet::new();
        let font_id = sheet.intern_font(Font::new().with_bold());
        sheet.push_cell_format(CellFormat {
            font_id,
            apply_font: true,
            ..CellFormat::default()
        });

        assert_eq!(sheet.resolve(0).unwrap(), sheet.resolve(0).unwrap());

        let mut cache = ResolvedStyleCache::new();
        let first = cache.get_or_resolve(&sheet, 0).unwrap().clone();
        assert_eq!(cache.len(), 1);
        let second = cache.get_or_resolve(&sheet, 0).unwrap().clone();
        assert_eq!(cache.len(), 1);
        assert_eq!(first, second);
    }

    #[test]
    fn test_argb_value_dispatch() {
        let mut sheet = StyleSheet::with_theme(Theme::new(vec![
            "FFFFFF".to_string(),
            "4F81BD".to_string(),
        ]));
        sheet.indexed_colors = IndexedColors::new(vec!["00FF00FF".to_string()]);

        assert_eq!(sheet.argb_value(&ColorSpec::rgb("0000FFFF")), "0000FFFF");
        assert_eq!(sheet.argb_value(&ColorSpec::indexed(1)), "00FF00FF");
        assert_eq!(sheet.argb_value(&ColorSpec::indexed(9)), "FF000000");
        assert_eq!(sheet.argb_value(&ColorSpec::theme(1)), "FF4F81BD");
    }

    #[test]
    fn test_argb_value_without_theme_falls_back() {
        let sheet = StyleSheet::new();
        assert_eq!(sheet.argb_value(&ColorSpec::theme(4)), "FF000000");
    }
}
