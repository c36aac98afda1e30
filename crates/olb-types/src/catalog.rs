use crate::error::TypeError;
use crate::text_font::TextFont;

/// The library's lookup tables, read from the file header before any
/// record is decoded.
///
/// Records reference these tables by index instead of storing text or
/// font definitions inline. The tables are read once and then borrowed
/// read-only by the decode context; an index outside a table is a fatal
/// semantic defect, because it means either the index was misread or the
/// table was not decoded completely.
///
/// Indexing conventions differ per table and are part of the recovered
/// wire contract:
///
/// ```text
/// ┌─────────┬──────────┬─────────────────────────────┐
/// │ Table   │ Indexing │ Referenced by               │
/// ├─────────┼──────────┼─────────────────────────────┤
/// │ strings │ 1-based  │ display property name_idx   │
/// │ fonts   │ 0-based  │ display property font_idx   │
/// └─────────┴──────────┴─────────────────────────────┘
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalogs {
    pub strings: Vec<String>,
    pub fonts: Vec<TextFont>,
}

impl Catalogs {
    /// Resolve a 1-based string table index.
    ///
    /// # Errors
    ///
    /// [`TypeError::IndexOutOfRange`] for index 0 or past the table end.
    pub fn string_at(&self, index: u32) -> Result<&str, TypeError> {
        let out_of_range = || TypeError::IndexOutOfRange {
            table: "string table",
            index: index as usize,
            len: self.strings.len(),
        };
        let slot = index.checked_sub(1).ok_or_else(out_of_range)? as usize;
        self.strings
            .get(slot)
            .map(String::as_str)
            .ok_or_else(out_of_range)
    }

    /// Resolve a 0-based font table index.
    ///
    /// # Errors
    ///
    /// [`TypeError::IndexOutOfRange`] for an index past the table end.
    pub fn font_at(&self, index: usize) -> Result<&TextFont, TypeError> {
        self.fonts.get(index).ok_or(TypeError::IndexOutOfRange {
            table: "font table",
            index,
            len: self.fonts.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalogs() -> Catalogs {
        Catalogs {
            strings: vec!["Value".to_string(), "Reference".to_string()],
            fonts: vec![TextFont {
                height: 38,
                width: 23,
                escapement: 0,
                weight: 400,
                italic: 0,
                name: "Courier New".to_string(),
            }],
        }
    }

    #[test]
    fn string_lookup_is_one_based() {
        let catalogs = catalogs();
        assert_eq!(catalogs.string_at(1).unwrap(), "Value");
        assert_eq!(catalogs.string_at(2).unwrap(), "Reference");
    }

    #[test]
    fn string_index_zero_rejected() {
        let catalogs = catalogs();
        let result = catalogs.string_at(0);
        assert!(matches!(
            result,
            Err(TypeError::IndexOutOfRange {
                table: "string table",
                index: 0,
                len: 2
            })
        ));
    }

    #[test]
    fn string_index_past_end_rejected() {
        let catalogs = catalogs();
        let result = catalogs.string_at(3);
        assert!(matches!(
            result,
            Err(TypeError::IndexOutOfRange { index: 3, len: 2, .. })
        ));
    }

    #[test]
    fn font_lookup_is_zero_based() {
        let catalogs = catalogs();
        assert_eq!(catalogs.font_at(0).unwrap().name, "Courier New");
        assert!(matches!(
            catalogs.font_at(1),
            Err(TypeError::IndexOutOfRange {
                table: "font table",
                index: 1,
                len: 1
            })
        ));
    }
}
