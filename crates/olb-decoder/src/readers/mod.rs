//! Per-kind record readers.
//!
//! Each reader consumes its own fields from the decode context and leaves
//! the cursor at the logical end of what it understands. None of them is
//! required to consume exactly to the declared stop — catching up to the
//! declaration is the dispatch layer's job. Layouts here are recovered
//! from samples; the `skip` calls mark spans whose meaning is still
//! unknown.

pub(crate) mod bitmap;
pub(crate) mod display_prop;
pub(crate) mod graphic_arc;
pub(crate) mod part_inst;
pub(crate) mod port;
pub(crate) mod t0x5b;
pub(crate) mod text_font;
