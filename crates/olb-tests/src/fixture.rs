//! Byte-level builder for synthetic library files.
//!
//! The production crates deliberately ship no encoder, so the tests
//! assemble wire bytes by hand. Everything here mirrors the recovered
//! layout: little-endian integers, zero-terminated strings, and the
//! 9-byte preamble in front of every declared region.

use olb_wire::PREAMBLE_STRIDE;

/// Magic bytes at the start of every fixture library.
pub const MAGIC: [u8; 4] = [0x4F, 0x4C, 0x42, 0x00];

/// A font table entry for fixtures.
#[derive(Clone, Debug)]
pub struct FixtureFont {
    pub name: &'static str,
    pub height: i32,
    pub width: i32,
    pub escapement: u16,
    pub weight: u16,
    pub italic: u16,
}

impl FixtureFont {
    /// The font every sample library seems to carry.
    pub fn courier() -> Self {
        Self {
            name: "Courier New",
            height: 38,
            width: 23,
            escapement: 0,
            weight: 400,
            italic: 0,
        }
    }
}

/// Builds a complete library buffer: header, catalog tables, records.
#[derive(Default)]
pub struct LibraryBuilder {
    strings: Vec<String>,
    fonts: Vec<FixtureFont>,
    records: Vec<u8>,
}

impl LibraryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_string(mut self, value: &str) -> Self {
        self.strings.push(value.to_string());
        self
    }

    pub fn with_font(mut self, font: FixtureFont) -> Self {
        self.fonts.push(font);
        self
    }

    /// Append a record whose declared size matches its body exactly.
    pub fn with_record(self, code: u8, body: &[u8]) -> Self {
        let declared = body.len() as u32;
        self.with_record_declared(code, declared, body)
    }

    /// Append a record with an explicit declared size, for fixtures where
    /// the declaration and the reader's appetite deliberately disagree.
    pub fn with_record_declared(mut self, code: u8, declared: u32, body: &[u8]) -> Self {
        push_preamble(&mut self.records, code, declared);
        self.records.extend_from_slice(body);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut buf = Vec::new();
        buf.extend_from_slice(&MAGIC);
        buf.extend_from_slice(&1u16.to_le_bytes()); // version
        buf.extend_from_slice(&[0x00, 0x00]); // unidentified pair

        buf.extend_from_slice(&(self.strings.len() as u32).to_le_bytes());
        for value in &self.strings {
            buf.extend_from_slice(value.as_bytes());
            buf.push(0x00);
        }

        buf.extend_from_slice(&(self.fonts.len() as u32).to_le_bytes());
        for font in &self.fonts {
            buf.extend_from_slice(&font.height.to_le_bytes());
            buf.extend_from_slice(&font.width.to_le_bytes());
            buf.extend_from_slice(&font.escapement.to_le_bytes());
            buf.extend_from_slice(&font.weight.to_le_bytes());
            buf.extend_from_slice(&font.italic.to_le_bytes());
            buf.extend_from_slice(font.name.as_bytes());
            buf.push(0x00);
        }

        buf.extend_from_slice(&self.records);
        buf
    }

    /// Byte offset where the record stream will start for the current
    /// header contents. Useful for asserting reported defect offsets.
    pub fn record_stream_offset(&self) -> usize {
        let string_bytes: usize = self.strings.iter().map(|s| s.len() + 1).sum();
        let font_bytes: usize = self.fonts.iter().map(|f| 14 + f.name.len() + 1).sum();
        4 + 2 + 2 + 4 + string_bytes + 4 + font_bytes
    }
}

/// Append a 9-byte preamble: type code, unidentified word, declared size.
pub fn push_preamble(buf: &mut Vec<u8>, code: u8, declared_size: u32) {
    buf.push(code);
    buf.extend_from_slice(&0u32.to_le_bytes());
    buf.extend_from_slice(&declared_size.to_le_bytes());
    debug_assert_eq!(PREAMBLE_STRIDE, 9);
}

/// A complete preamble-framed record: preamble + body, declared size
/// matching the body. Use to nest records inside another record's body.
pub fn framed_record(code: u8, body: &[u8]) -> Vec<u8> {
    let mut buf = Vec::new();
    push_preamble(&mut buf, code, body.len() as u32);
    buf.extend_from_slice(body);
    buf
}

/// Display property body (14 bytes).
pub fn display_prop_body(
    name_idx: u32,
    x: i16,
    y: i16,
    font_idx: u8,
    rotation: u8,
    color: u8,
) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&name_idx.to_le_bytes());
    buf.extend_from_slice(&x.to_le_bytes());
    buf.extend_from_slice(&y.to_le_bytes());
    let style = u16::from(font_idx) | (u16::from(rotation & 0b11) << 14);
    buf.extend_from_slice(&style.to_le_bytes());
    buf.push(color);
    buf.extend_from_slice(&[0x00, 0x00]); // visibility flags
    buf.push(0x00); // trailer literal
    buf
}

/// Port body: unidentified spans around a name and a counted run of
/// nested (already framed) records.
pub fn port_body(name: &str, nested: &[Vec<u8>]) -> Vec<u8> {
    let mut buf = vec![0u8; 8];
    buf.extend_from_slice(name.as_bytes());
    buf.push(0x00);
    buf.extend_from_slice(&[0u8; 20]);
    buf.extend_from_slice(&(nested.len() as u16).to_le_bytes());
    for record in nested {
        buf.extend_from_slice(record);
    }
    buf.extend_from_slice(&[0u8; 10]);
    buf
}

/// Graphic arc body (40 bytes) with fixed geometry and the given id.
pub fn arc_body(id: u32) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&id.to_le_bytes());
    buf.extend_from_slice(&10i16.to_le_bytes());
    buf.extend_from_slice(&(-20i16).to_le_bytes());
    for coord in [0i32, 0, 100, 100, 100, 50, 50, 100] {
        buf.extend_from_slice(&coord.to_le_bytes());
    }
    buf
}

/// Bitmap body with the given dimensions and payload.
pub fn bitmap_body(width: u32, height: u32, data: &[u8]) -> Vec<u8> {
    let mut buf = Vec::new();
    for coord in [0i32, 0, 0, 0, 64, 64] {
        buf.extend_from_slice(&coord.to_le_bytes());
    }
    buf.extend_from_slice(&width.to_le_bytes());
    buf.extend_from_slice(&height.to_le_bytes());
    buf.extend_from_slice(&(data.len() as u32).to_le_bytes());
    buf.extend_from_slice(data);
    buf
}

/// Part instance body. `nested_a`/`nested_b` are framed records; the
/// trailing declared segment carries `segment` as undeciphered content,
/// followed by two pad bytes so the segment's stop stays distinct from
/// the record's own declared end.
pub fn part_inst_body(
    package: &str,
    reference: &str,
    value: &str,
    nested_a: &[Vec<u8>],
    nested_b: &[Vec<u8>],
    segment: &[u8],
) -> Vec<u8> {
    let mut buf = vec![0u8; 8];
    buf.extend_from_slice(package.as_bytes());
    buf.push(0x00);
    buf.extend_from_slice(&1u32.to_le_bytes()); // library_id
    buf.extend_from_slice(&[0u8; 8]);
    buf.extend_from_slice(&100i16.to_le_bytes()); // x
    buf.extend_from_slice(&200i16.to_le_bytes()); // y
    buf.extend_from_slice(&4u16.to_le_bytes()); // color
    buf.extend_from_slice(&[0u8; 2]);
    buf.extend_from_slice(&(nested_a.len() as u16).to_le_bytes());
    for record in nested_a {
        buf.extend_from_slice(record);
    }
    buf.extend_from_slice(&[0u8; 1]);
    buf.extend_from_slice(reference.as_bytes());
    buf.push(0x00);
    buf.extend_from_slice(&[0u8; 14]);
    buf.extend_from_slice(&(nested_b.len() as u16).to_le_bytes());
    for record in nested_b {
        buf.extend_from_slice(record);
    }
    buf.extend_from_slice(value.as_bytes());
    buf.push(0x00);
    buf.extend_from_slice(&[0u8; 2]);
    push_preamble(&mut buf, 0x00, segment.len() as u32);
    buf.extend_from_slice(segment);
    buf.extend_from_slice(&[0u8; 2]); // pad inside the declared span
    buf
}
