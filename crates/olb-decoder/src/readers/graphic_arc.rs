use olb_types::GraphicArc;

use crate::context::DecodeContext;
use crate::error::DecodeError;

/// Arc instance body: id, anchor point, bounding box, then the start and
/// end points on the inscribed ellipse. 40 bytes, fully understood.
pub(crate) fn read(ctx: &mut DecodeContext<'_>) -> Result<GraphicArc, DecodeError> {
    let id = ctx.cursor.read_u32()?;
    let x = ctx.cursor.read_i16()?;
    let y = ctx.cursor.read_i16()?;

    let x1 = ctx.cursor.read_i32()?;
    let y1 = ctx.cursor.read_i32()?;
    let x2 = ctx.cursor.read_i32()?;
    let y2 = ctx.cursor.read_i32()?;

    let start_x = ctx.cursor.read_i32()?;
    let start_y = ctx.cursor.read_i32()?;
    let end_x = ctx.cursor.read_i32()?;
    let end_y = ctx.cursor.read_i32()?;

    Ok(GraphicArc {
        id,
        x,
        y,
        x1,
        y1,
        x2,
        y2,
        start_x,
        start_y,
        end_x,
        end_y,
    })
}
