use tracing::trace;

use olb_types::{Port, Record, RecordKind};

use crate::context::DecodeContext;
use crate::dispatch;
use crate::error::DecodeError;

/// Port body: name, then a counted run of nested display property
/// records, padded front and back by spans not yet deciphered.
pub(crate) fn read(ctx: &mut DecodeContext<'_>) -> Result<Port, DecodeError> {
    ctx.cursor.skip(8, "port: unidentified leading block")?;

    let name = ctx.cursor.read_string_zero_term()?;
    trace!("port name = {name}");

    ctx.cursor.skip(20, "port: unidentified")?;

    let prop_count = ctx.cursor.read_u16()?;
    let mut display_props = Vec::new();
    for _ in 0..prop_count {
        let offset = ctx.cursor.offset();
        match dispatch::read_record(ctx)? {
            Record::DisplayProp(prop) => display_props.push(prop),
            other => {
                return Err(DecodeError::UnexpectedRecord {
                    expected: RecordKind::DisplayProp.name(),
                    found: other.kind().name(),
                    offset,
                });
            }
        }
    }

    ctx.cursor.skip(10, "port: unidentified trailer")?;

    Ok(Port {
        name,
        display_props,
    })
}
