//! Number format records and the built-in OOXML format table

/// A number format entry: a numeric id paired with its format code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumFmt {
    /// Format id; built-in ids are < 164, custom ids start at 164
    pub id: u32,
    /// The human-readable format code, e.g. `"0.00"` or `"mm-dd-yy"`
    pub code: String,
}

impl NumFmt {
    pub fn new<S: Into<String>>(id: u32, code: S) -> Self {
        NumFmt {
            id,
            code: code.into(),
        }
    }
}

/// First id available for custom number formats; everything below is
/// reserved for built-ins.
pub const FIRST_CUSTOM_NUM_FMT_ID: u32 = 164;

/// Built-in OOXML number formats, keyed by the codes the host application
/// recognizes. Codes are matched exactly, in the lowercase spelling the host
/// uses in its built-in table.
pub const BUILT_IN_NUM_FMTS: &[(u32, &str)] = &[
    (0, "general"),
    (1, "0"),
    (2, "0.00"),
    (3, "#,##0"),
    (4, "#,##0.00"),
    (9, "0%"),
    (10, "0.00%"),
    (11, "0.00e+00"),
    (12, "# ?/?"),
    (13, "# ??/??"),
    (14, "mm-dd-yy"),
    (15, "d-mmm-yy"),
    (16, "d-mmm"),
    (17, "mmm-yy"),
    (18, "h:mm am/pm"),
    (19, "h:mm:ss am/pm"),
    (20, "h:mm"),
    (21, "h:mm:ss"),
    (22, "m/d/yy h:mm"),
    (37, "#,##0 ;(#,##0)"),
    (38, "#,##0 ;[red](#,##0)"),
    (39, "#,##0.00;(#,##0.00)"),
    (40, "#,##0.00;[red](#,##0.00)"),
    (45, "mm:ss"),
    (46, "[h]:mm:ss"),
    (47, "mmss.0"),
    (48, "##0.0e+0"),
    (49, "@"),
];

/// Look up a format code in the built-in table (exact string match)
pub fn builtin_num_fmt_id(code: &str) -> Option<u32> {
    BUILT_IN_NUM_FMTS
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(id, _)| *id)
}

/// Look up the format code for a built-in id
pub fn builtin_num_fmt_code(id: u32) -> Option<&'static str> {
    BUILT_IN_NUM_FMTS
        .iter()
        .find(|(i, _)| *i == id)
        .map(|(_, c)| *c)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_lookup() {
        assert_eq!(builtin_num_fmt_id("0"), Some(1));
        assert_eq!(builtin_num_fmt_id("0.00e+00"), Some(11));
        assert_eq!(builtin_num_fmt_id("mm-dd-yy"), Some(14));
        assert_eq!(builtin_num_fmt_id("hh:mm:ss"), None);
    }

    #[test]
    fn test_builtin_reverse_lookup() {
        assert_eq!(builtin_num_fmt_code(14), Some("mm-dd-yy"));
        assert_eq!(builtin_num_fmt_code(163), None);
    }
}
