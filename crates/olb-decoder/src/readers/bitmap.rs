use tracing::trace;

use olb_types::Bitmap;

use crate::context::DecodeContext;
use crate::error::DecodeError;

/// Bitmap body: anchor, bounding box, pixel dimensions, then a
/// length-prefixed raw pixel payload. The payload is carried as-is;
/// turning it into an image file is out of scope.
pub(crate) fn read(ctx: &mut DecodeContext<'_>) -> Result<Bitmap, DecodeError> {
    let x = ctx.cursor.read_i32()?;
    let y = ctx.cursor.read_i32()?;

    let x1 = ctx.cursor.read_i32()?;
    let y1 = ctx.cursor.read_i32()?;
    let x2 = ctx.cursor.read_i32()?;
    let y2 = ctx.cursor.read_i32()?;

    let width = ctx.cursor.read_u32()?;
    let height = ctx.cursor.read_u32()?;

    let data_len = ctx.cursor.read_u32()? as usize;
    trace!("bitmap {width}x{height}, {data_len} payload byte(s)");
    let data = ctx.cursor.read_bytes(data_len)?.to_vec();

    Ok(Bitmap {
        x,
        y,
        x1,
        y1,
        x2,
        y2,
        width,
        height,
        data,
    })
}
