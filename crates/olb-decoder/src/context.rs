use olb_types::Catalogs;
use olb_wire::Cursor;

/// Per-file decode state threaded through every record reader.
///
/// One context exists per file being decoded. The cursor is the single
/// piece of mutable state and is only ever touched from the active decode
/// call stack; the catalogs are the read-only lookup tables parsed from
/// the same file's header. The context is passed by mutable borrow into
/// each nested decode — never held in ambient or global state — so
/// decodes of unrelated files cannot interfere.
pub struct DecodeContext<'a> {
    pub cursor: Cursor<'a>,
    pub catalogs: &'a Catalogs,
}

impl<'a> DecodeContext<'a> {
    pub fn new(cursor: Cursor<'a>, catalogs: &'a Catalogs) -> Self {
        Self { cursor, catalogs }
    }
}
