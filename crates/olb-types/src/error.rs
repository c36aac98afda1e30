/// Semantic validation failures on decoded values.
///
/// These sit above the raw byte layer: the bytes read fine, but the value
/// they carry does not fit the library being decoded.
#[derive(Debug, thiserror::Error)]
pub enum TypeError {
    /// A decoded index pointed outside one of the library's catalog tables.
    ///
    /// Indicates either a misread field (the preceding bytes were
    /// interpreted under a wrong schema) or an incompletely decoded
    /// catalog — both invalidate the record carrying the index.
    #[error("{table} index {index} out of range (table holds {len} entries)")]
    IndexOutOfRange {
        table: &'static str,
        index: usize,
        len: usize,
    },
}
