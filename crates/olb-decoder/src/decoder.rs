use tracing::{debug, trace};

use olb_types::{Catalogs, Record};
use olb_wire::Cursor;

use crate::context::DecodeContext;
use crate::dispatch;
use crate::error::DecodeError;
use crate::readers;

/// Magic number: ASCII "OLB\0", the first four bytes of every library.
pub const OLB_MAGIC: [u8; 4] = [0x4F, 0x4C, 0x42, 0x00];

/// Sanity bound on catalog table counts. A count above this comes from a
/// corrupt or misread length field, not a real library.
const MAX_TABLE_LEN: usize = 1 << 20;

/// The result of decoding a library file.
///
/// This is the only success output: a fatal defect anywhere in the file
/// unwinds the whole decode and no partial tree is returned.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedLibrary {
    /// Format version from the header. Logged and carried, but not
    /// branched on — only one version has been observed.
    pub version: u16,

    /// The string and font tables read from the header.
    pub catalogs: Catalogs,

    /// Top-level records in file order. Nested records live inside their
    /// parents.
    pub records: Vec<Record>,
}

/// Synchronous library decoder — parses a complete in-memory buffer.
///
/// Decoding proceeds in three steps:
///
///   1. **Header**: assert the magic, read the format version, skip two
///      bytes whose meaning is still unknown.
///   2. **Catalogs**: read the string table and the font table. Records
///      reference both by index, so they must be complete before any
///      record is decoded.
///   3. **Records**: recursive-descent over preamble-framed records until
///      the buffer is exhausted. Every record decode runs the full
///      offset-accounting protocol (window open, reconciliation,
///      checkpoint, sanitize) in `dispatch::read_record`.
///
/// The decode is strictly single-threaded and depth-first; the buffer is
/// the only resource held, read-only, for the duration.
pub struct OlbDecoder;

impl OlbDecoder {
    /// Decode a complete library from a byte slice.
    ///
    /// # Errors
    ///
    /// Any [`DecodeError`]. Notably:
    /// - [`DecodeError::Wire`] for a bad magic, truncated reads, or a
    ///   failed literal assertion anywhere in the file;
    /// - [`DecodeError::UnknownRecordType`] for a preamble code outside
    ///   the recovered set;
    /// - [`DecodeError::Overrun`], [`DecodeError::CheckpointMismatch`]
    ///   and [`DecodeError::UnverifiedWindows`] when a record's byte
    ///   accounting does not match its declarations.
    pub fn decode(buf: &[u8]) -> Result<DecodedLibrary, DecodeError> {
        let mut cursor = Cursor::new(buf);

        cursor.expect_bytes(&OLB_MAGIC, "file magic")?;
        let version = cursor.read_u16()?;
        trace!("library format version {version:#06x}");
        cursor.skip(2, "library header: unidentified")?;

        let catalogs = Self::read_catalogs(&mut cursor)?;

        let mut records = Vec::new();
        let mut ctx = DecodeContext::new(cursor, &catalogs);
        while !ctx.cursor.at_end() {
            records.push(dispatch::read_record(&mut ctx)?);
        }
        debug!("decoded {} top-level record(s)", records.len());

        Ok(DecodedLibrary {
            version,
            catalogs,
            records,
        })
    }

    /// Read the string and font tables from the library header.
    fn read_catalogs(cursor: &mut Cursor<'_>) -> Result<Catalogs, DecodeError> {
        let string_count = cursor.read_u32()? as usize;
        Self::check_table_bound("string table", string_count)?;
        let mut strings = Vec::new();
        for _ in 0..string_count {
            strings.push(cursor.read_string_zero_term()?);
        }
        debug!("string table: {} entries", strings.len());

        let font_count = cursor.read_u32()? as usize;
        Self::check_table_bound("font table", font_count)?;
        let mut fonts = Vec::new();
        for _ in 0..font_count {
            fonts.push(readers::text_font::read(cursor)?);
        }
        debug!("font table: {} entries", fonts.len());

        Ok(Catalogs { strings, fonts })
    }

    fn check_table_bound(table: &'static str, len: usize) -> Result<(), DecodeError> {
        if len > MAX_TABLE_LEN {
            return Err(DecodeError::TableTooLarge {
                table,
                len,
                limit: MAX_TABLE_LEN,
            });
        }
        Ok(())
    }
}
