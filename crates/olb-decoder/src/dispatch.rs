use tracing::debug;

use olb_types::{Record, RecordKind};
use olb_wire::Preamble;

use crate::context::DecodeContext;
use crate::error::DecodeError;
use crate::readers;
use crate::window::WindowTracker;

/// Read one complete record at the cursor's current offset.
///
/// This is the engine sequence every record goes through; the per-kind
/// readers only consume their own fields and are not required to land
/// exactly on the declared stop — reconciliation is handled here:
///
/// 1. Read the preamble and resolve its type code (unknown codes are
///    fatal: this decoder does not understand the file).
/// 2. Open the record's window in a tracker owned by this record alone.
/// 3. Dispatch to the kind's reader. Nested records recurse through this
///    function with trackers of their own.
/// 4. Reconcile the end of the structure, checkpoint the final offset,
///    and verify that no window was left unchecked.
///
/// # Errors
///
/// Any [`DecodeError`]; all of them abort the decode of the whole file.
pub fn read_record(ctx: &mut DecodeContext<'_>) -> Result<Record, DecodeError> {
    let preamble_offset = ctx.cursor.offset();
    let preamble = Preamble::read(&mut ctx.cursor)?;
    let kind = RecordKind::from_wire_id(preamble.type_code).ok_or(
        DecodeError::UnknownRecordType {
            code: preamble.type_code,
            offset: preamble_offset,
        },
    )?;
    debug!(
        "reading {} record at {preamble_offset:#010x}, {} declared byte(s)",
        kind.name(),
        preamble.declared_size
    );

    let mut windows = WindowTracker::new();
    windows.open(preamble_offset, preamble.declared_size as usize);

    let record = match kind {
        RecordKind::Port => Record::Port(readers::port::read(ctx)?),
        RecordKind::DisplayProp => Record::DisplayProp(readers::display_prop::read(ctx)?),
        RecordKind::PartInst => Record::PartInst(readers::part_inst::read(ctx, &mut windows)?),
        RecordKind::GraphicArc => Record::GraphicArc(readers::graphic_arc::read(ctx)?),
        RecordKind::Bitmap => Record::Bitmap(readers::bitmap::read(ctx)?),
        RecordKind::T0x5b => Record::T0x5b(readers::t0x5b::read(ctx, &mut windows)?),
    };

    windows.reconcile_end(&mut ctx.cursor)?;
    windows.checkpoint(ctx.cursor.offset())?;
    windows.sanitize()?;

    debug!(
        "finished {} record, cursor at {:#010x}",
        kind.name(),
        ctx.cursor.offset()
    );
    Ok(record)
}

/// Read a preamble announcing a trailing segment of the *current*
/// structure and open its window in the structure's own tracker.
///
/// Unlike [`read_record`], no dispatch happens: the segment's content
/// belongs to the enclosing record, which decides how (or whether) to
/// interpret it.
///
/// # Errors
///
/// A wire error if the preamble itself cannot be read.
pub fn read_segment_preamble(
    ctx: &mut DecodeContext<'_>,
    windows: &mut WindowTracker,
) -> Result<Preamble, DecodeError> {
    let offset = ctx.cursor.offset();
    let preamble = Preamble::read(&mut ctx.cursor)?;
    windows.open(offset, preamble.declared_size as usize);
    Ok(preamble)
}
