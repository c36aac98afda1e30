use tracing::trace;

use crate::cursor::Cursor;
use crate::error::WireError;

/// Byte distance from the start of a preamble to the start of the region
/// it announces. Every declared region begins exactly this many bytes
/// after its own preamble.
pub const PREAMBLE_STRIDE: usize = 9;

/// The fixed-width header preceding every declared region.
///
/// ```text
/// ┌────────┬─────────┬──────────────────────────────────────┐
/// │ Offset │ Size    │ Description                          │
/// ├────────┼─────────┼──────────────────────────────────────┤
/// │ +0     │ 1 byte  │ Record type code                     │
/// │ +1     │ 4 bytes │ Unidentified (traced, not validated) │
/// │ +5     │ 4 bytes │ Declared content size in bytes       │
/// └────────┴─────────┴──────────────────────────────────────┘
/// ```
///
/// The preamble is not retained after reading — it is consumed into a
/// dispatch decision and a byte-window obligation. The middle four bytes
/// vary between samples and have resisted identification so far; they are
/// logged at trace level so new samples can be correlated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Preamble {
    pub type_code: u8,
    pub unknown: u32,
    pub declared_size: u32,
}

impl Preamble {
    /// Read the 9-byte preamble at the cursor's current offset.
    ///
    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] if fewer than 9 bytes remain.
    pub fn read(cursor: &mut Cursor<'_>) -> Result<Self, WireError> {
        let offset = cursor.offset();
        let type_code = cursor.read_u8()?;
        let unknown = cursor.read_u32()?;
        let declared_size = cursor.read_u32()?;

        trace!(
            "preamble at {offset:#010x}: type {type_code:#04x}, \
             declared size {declared_size}, unidentified field {unknown:#010x}"
        );

        Ok(Self {
            type_code,
            unknown,
            declared_size,
        })
    }
}
