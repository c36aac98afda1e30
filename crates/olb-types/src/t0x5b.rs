/// Record type 0x5b. Purpose not yet identified — every observed instance
/// carries only bytes the decoder skips, so there are no fields to hold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct T0x5b;
