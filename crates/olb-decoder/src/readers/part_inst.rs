use tracing::trace;

use olb_types::{Color, PartInst};

use crate::context::DecodeContext;
use crate::dispatch;
use crate::error::DecodeError;
use crate::window::WindowTracker;

/// Part instance body.
///
/// The least-understood of the record layouts: two counted groups of
/// nested records whose roles are not fully identified, interleaved with
/// spans that are skipped outright, and a trailing declared segment whose
/// content has resisted interpretation. The segment's window is opened in
/// this record's own tracker, its span is skipped as unparsed content,
/// and the obligation is discharged by explicit removal once consumed.
pub(crate) fn read(
    ctx: &mut DecodeContext<'_>,
    windows: &mut WindowTracker,
) -> Result<PartInst, DecodeError> {
    ctx.cursor.skip(8, "part instance: unidentified leading block")?;

    let package_name = ctx.cursor.read_string_zero_term()?;
    trace!("part instance package = {package_name}");
    let library_id = ctx.cursor.read_u32()?;

    ctx.cursor.skip(8, "part instance: unidentified")?;

    let x = ctx.cursor.read_i16()?;
    let y = ctx.cursor.read_i16()?;
    let color = Color::from_wire(ctx.cursor.read_u16()?);

    ctx.cursor.skip(2, "part instance: unidentified")?;

    let prop_count = ctx.cursor.read_u16()?;
    let mut prop_records = Vec::new();
    for _ in 0..prop_count {
        prop_records.push(dispatch::read_record(ctx)?);
    }

    ctx.cursor.skip(1, "part instance: unidentified")?;

    let reference = ctx.cursor.read_string_zero_term()?;
    trace!("part instance reference = {reference}");

    ctx.cursor.skip(14, "part instance: unidentified")?;

    let pin_count = ctx.cursor.read_u16()?;
    let mut pin_records = Vec::new();
    for _ in 0..pin_count {
        pin_records.push(dispatch::read_record(ctx)?);
    }

    let value = ctx.cursor.read_string_zero_term()?;

    ctx.cursor.skip(2, "part instance: unidentified")?;

    // Trailing declared segment, content undeciphered. Skip its span and
    // drop the obligation rather than carrying it to reconciliation.
    let segment = dispatch::read_segment_preamble(ctx, windows)?;
    if segment.declared_size > 0 {
        windows.advance_to_next_window(&mut ctx.cursor)?;
    }
    if !windows.remove_by_stop(ctx.cursor.offset()) {
        return Err(DecodeError::CheckpointMismatch {
            offset: ctx.cursor.offset(),
        });
    }

    Ok(PartInst {
        package_name,
        library_id,
        x,
        y,
        color,
        prop_records,
        reference,
        pin_records,
        value,
    })
}
