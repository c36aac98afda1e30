use tracing::trace;

use olb_types::{Color, DisplayProp, Rotation};

use crate::context::DecodeContext;
use crate::error::DecodeError;

/// Display property body.
///
/// ```text
/// ┌────────┬─────────┬─────────────────────────────────────────┐
/// │ +0     │ u32     │ name_idx (1-based into string table)    │
/// │ +4     │ i16     │ x                                       │
/// │ +6     │ i16     │ y                                       │
/// │ +8     │ u16     │ style word (see below)                  │
/// │ +10    │ u8      │ color                                   │
/// │ +11    │ 2 bytes │ visibility flags (meaning unconfirmed)  │
/// │ +13    │ 1 byte  │ always 0x00 in every sample             │
/// └────────┴─────────┴─────────────────────────────────────────┘
/// ```
///
/// Style word: bits 0-7 font index, bits 8-13 always clear so far (set
/// bits are fatal — the file is not what this decoder was derived from),
/// bits 14-15 rotation.
pub(crate) fn read(ctx: &mut DecodeContext<'_>) -> Result<DisplayProp, DecodeError> {
    let name_idx = ctx.cursor.read_u32()?;
    let name = ctx.catalogs.string_at(name_idx)?.to_string();
    trace!("display property name = {name}");

    let x = ctx.cursor.read_i16()?;
    let y = ctx.cursor.read_i16()?;

    let style_offset = ctx.cursor.offset();
    let style = ctx.cursor.read_u16()?;

    let font_idx = (style & 0x00FF) as u8;
    ctx.catalogs.font_at(usize::from(font_idx))?;

    if (style >> 8) & 0x3F != 0 {
        return Err(DecodeError::UnknownBits {
            field: "display property style word",
            value: style,
            offset: style_offset,
        });
    }

    let rotation = Rotation::from_wire((style >> 14) as u8);
    let color = Color::from_wire(u16::from(ctx.cursor.read_u8()?));

    // Two bytes that track the name/value visibility choice; the exact
    // encoding is not pinned down yet.
    ctx.cursor.skip(2, "display property: visibility flags")?;
    ctx.cursor.expect_bytes(&[0x00], "display property trailer")?;

    Ok(DisplayProp {
        name_idx,
        name,
        x,
        y,
        font_idx,
        rotation,
        color,
    })
}
