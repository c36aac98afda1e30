use olb_types::TextFont;
use olb_wire::{Cursor, WireError};

/// One font table entry. Fonts live in the library header, not in the
/// preamble-framed record stream, so this reads from the bare cursor.
pub(crate) fn read(cursor: &mut Cursor<'_>) -> Result<TextFont, WireError> {
    let height = cursor.read_i32()?;
    let width = cursor.read_i32()?;
    let escapement = cursor.read_u16()?;
    let weight = cursor.read_u16()?;
    let italic = cursor.read_u16()?;
    let name = cursor.read_string_zero_term()?;

    Ok(TextFont {
        height,
        width,
        escapement,
        weight,
        italic,
        name,
    })
}
