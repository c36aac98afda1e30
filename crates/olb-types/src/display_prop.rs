use crate::enums::{Color, Rotation};

/// Positioned, styled property text attached to a symbol or part.
///
/// The property's name is not stored inline — the record carries a
/// 1-based index into the library's string table, resolved at decode
/// time. Both the raw index and the resolved text are kept so a
/// re-serializer or debugger can see exactly what was on the wire.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayProp {
    /// 1-based index into the string table.
    pub name_idx: u32,
    /// The string table entry `name_idx` resolves to.
    pub name: String,
    pub x: i16,
    pub y: i16,
    /// 0-based index into the font table.
    pub font_idx: u8,
    pub rotation: Rotation,
    pub color: Color,
}
