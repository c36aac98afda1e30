use olb_types::TypeError;
use olb_wire::WireError;

/// Errors that abort the decode of a library file.
///
/// The decoder's contract is all-or-nothing: any of these unwinds the
/// decode of the entire file, and no partial record tree is returned.
/// Recoverable conditions (a structure implementation shorter than its
/// declared region) are handled in place with a skip diagnostic and never
/// surface here.
///
/// Error hierarchy:
///
/// ```text
///   DecodeError
///   ├── CheckpointMismatch   ← cursor stopped at no declared boundary
///   ├── UnverifiedWindows    ← declared regions never checkpointed
///   ├── Overrun              ← structure read past its declared end
///   ├── UnknownRecordType    ← preamble code outside the recovered set
///   ├── UnexpectedRecord     ← nested record of the wrong kind
///   ├── UnknownBits          ← bits set where every sample has zeros
///   ├── TableTooLarge        ← catalog count past the sanity bound
///   ├── Type(TypeError)      ← catalog index out of range
///   └── Wire(WireError)      ← truncated read, literal mismatch
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The cursor stopped at an offset matching no open window while
    /// obligations exist — some decoder consumed the wrong number of
    /// bytes.
    #[error("checkpoint at {offset:#010x} matches no declared boundary")]
    CheckpointMismatch { offset: usize },

    /// One or more declared regions were never verified by a checkpoint
    /// before their owning structure finished.
    #[error(
        "structure finished with unverified declared regions: {}",
        describe_ranges(.ranges)
    )]
    UnverifiedWindows { ranges: Vec<(usize, usize)> },

    /// The structure consumed bytes past its furthest declared end.
    ///
    /// Overrun means an earlier field was misinterpreted and subsequent
    /// bytes were consumed under a wrong schema; continuing would corrupt
    /// the interpretation of the rest of the file.
    #[error(
        "structure read past its declared end: expected {expected:#010x}, ended at {actual:#010x} ({} byte(s) over)",
        .actual - .expected
    )]
    Overrun { expected: usize, actual: usize },

    /// A preamble carried a type code outside the recovered record set.
    #[error("unknown record type code {code:#04x} at offset {offset:#010x}")]
    UnknownRecordType { code: u8, offset: usize },

    /// A nested record decoded to a kind its parent cannot hold.
    #[error("expected a {expected} record at offset {offset:#010x}, found a {found}")]
    UnexpectedRecord {
        expected: &'static str,
        found: &'static str,
        offset: usize,
    },

    /// Bits were set in a field where every sample observed so far
    /// carries zeros. Their meaning is unknown, so the safe reading is
    /// "this file is not the format we derived the decoder from".
    #[error("unidentified bits set in {field} at offset {offset:#010x}: value {value:#06x}")]
    UnknownBits {
        field: &'static str,
        value: u16,
        offset: usize,
    },

    /// A catalog count exceeded the sanity bound.
    #[error("{table} count {len} exceeds the sanity bound of {limit}")]
    TableTooLarge {
        table: &'static str,
        len: usize,
        limit: usize,
    },

    /// A semantic validation failure from `olb-types` (catalog lookups).
    #[error(transparent)]
    Type(#[from] TypeError),

    /// A raw read failure from `olb-wire`.
    #[error(transparent)]
    Wire(#[from] WireError),
}

/// Formats unverified ranges as `0x…. -> 0x….` pairs for the
/// `UnverifiedWindows` message.
fn describe_ranges(ranges: &[(usize, usize)]) -> String {
    ranges
        .iter()
        .map(|(start, stop)| format!("{start:#010x} -> {stop:#010x}"))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unverified_windows_names_every_range() {
        let err = DecodeError::UnverifiedWindows {
            ranges: vec![(0x10, 0x30), (0x40, 0x48)],
        };
        let msg = err.to_string();
        assert!(msg.contains("0x00000010 -> 0x00000030"), "{msg}");
        assert!(msg.contains("0x00000040 -> 0x00000048"), "{msg}");
    }

    #[test]
    fn overrun_reports_magnitude() {
        let err = DecodeError::Overrun {
            expected: 200,
            actual: 210,
        };
        assert!(err.to_string().contains("10 byte(s) over"), "{err}");
    }
}
