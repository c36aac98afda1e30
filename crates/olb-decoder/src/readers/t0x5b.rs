use olb_types::T0x5b;

use crate::context::DecodeContext;
use crate::error::DecodeError;
use crate::window::WindowTracker;

/// No field of type 0x5b has been identified yet. Skip whatever the
/// preamble declared and let the checkpoint prove the span was covered.
pub(crate) fn read(
    ctx: &mut DecodeContext<'_>,
    windows: &mut WindowTracker,
) -> Result<T0x5b, DecodeError> {
    windows.advance_to_next_window(&mut ctx.cursor)?;
    windows.checkpoint(ctx.cursor.offset())?;
    Ok(T0x5b)
}
