/// Low-level read failures over the in-memory library buffer.
///
/// Every variant carries the absolute byte offset where the read went
/// wrong, so a defect can be located in a hex dump of the source file.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// Input ended before the requested number of bytes could be read.
    #[error("unexpected end of input at offset {offset:#010x}")]
    UnexpectedEof { offset: usize },

    /// A zero-terminated string ran to the end of the buffer without a
    /// terminator byte.
    #[error("unterminated string starting at offset {offset:#010x}")]
    UnterminatedString { offset: usize },

    /// A literal-byte assertion failed.
    ///
    /// Used for reverse-engineered constants whose meaning is not yet
    /// understood: either the format drifted or the recovered constant is
    /// wrong, and both invalidate everything read after this point.
    #[error(
        "literal assertion '{label}' failed at {offset:#010x}: expected {expected:02x?}, found {found:02x?}"
    )]
    LiteralMismatch {
        offset: usize,
        expected: Vec<u8>,
        found: Vec<u8>,
        label: String,
    },
}
