use tracing::debug;

use crate::error::WireError;

/// Forward-only reader over an in-memory library buffer.
///
/// The cursor owns the single piece of mutable decode state: the current
/// absolute offset. All reads are sequential; there is no seek-backwards
/// operation, because the decode is a strict recursive descent and every
/// region is visited exactly once.
///
/// All multi-byte integers in the container are little-endian.
pub struct Cursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Current absolute offset from the start of the buffer.
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Number of bytes left to read.
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// True once every byte of the buffer has been consumed.
    pub fn at_end(&self) -> bool {
        self.pos == self.buf.len()
    }

    /// Consume `n` bytes, returning them as a slice of the underlying buffer.
    ///
    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] if fewer than `n` bytes remain.
    pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], WireError> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.buf.len())
            .ok_or(WireError::UnexpectedEof { offset: self.pos })?;
        let bytes = &self.buf[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    pub fn read_u8(&mut self) -> Result<u8, WireError> {
        Ok(self.read_bytes(1)?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, WireError> {
        let b = self.read_bytes(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    pub fn read_u32(&mut self) -> Result<u32, WireError> {
        let b = self.read_bytes(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    pub fn read_i16(&mut self) -> Result<i16, WireError> {
        let b = self.read_bytes(2)?;
        Ok(i16::from_le_bytes([b[0], b[1]]))
    }

    pub fn read_i32(&mut self) -> Result<i32, WireError> {
        let b = self.read_bytes(4)?;
        Ok(i32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Read bytes up to and including a zero terminator, returning the
    /// content without the terminator. Non-UTF-8 bytes are replaced.
    ///
    /// # Errors
    ///
    /// [`WireError::UnterminatedString`] if the buffer ends before a
    /// terminator byte is found.
    pub fn read_string_zero_term(&mut self) -> Result<String, WireError> {
        let start = self.pos;
        let len = self.buf[start..]
            .iter()
            .position(|&b| b == 0)
            .ok_or(WireError::UnterminatedString { offset: start })?;
        let content = &self.buf[start..start + len];
        self.pos = start + len + 1;
        Ok(String::from_utf8_lossy(content).into_owned())
    }

    /// Read `expected.len()` bytes and fail fatally unless they match.
    ///
    /// This is the assertion primitive for reverse-engineered constants:
    /// bytes that are always the same in every observed sample but whose
    /// meaning is unknown. A mismatch means the format is no longer the
    /// one this decoder was derived from.
    ///
    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] if the buffer is too short, or
    /// [`WireError::LiteralMismatch`] naming the offset, both byte
    /// sequences, and `label`.
    pub fn expect_bytes(&mut self, expected: &[u8], label: &str) -> Result<(), WireError> {
        let offset = self.pos;
        let found = self.read_bytes(expected.len())?;
        if found != expected {
            return Err(WireError::LiteralMismatch {
                offset,
                expected: expected.to_vec(),
                found: found.to_vec(),
                label: label.to_string(),
            });
        }
        Ok(())
    }

    /// Advance over `count` bytes without interpreting them, emitting the
    /// skipped span as a diagnostic.
    ///
    /// Used both for fields whose meaning is genuinely unknown and for the
    /// catch-up skips of the offset-accounting protocol. The diagnostic is
    /// advisory; it never affects the success of the decode.
    ///
    /// # Errors
    ///
    /// [`WireError::UnexpectedEof`] if fewer than `count` bytes remain.
    pub fn skip(&mut self, count: usize, label: &str) -> Result<(), WireError> {
        let start = self.pos;
        let bytes = self.read_bytes(count)?;
        debug!(
            "{label}: skipped {count} byte(s) at {start:#010x}..{end:#010x}: {bytes:02x?}",
            end = start + count,
        );
        Ok(())
    }
}
