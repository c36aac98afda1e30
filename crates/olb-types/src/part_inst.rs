use crate::enums::Color;
use crate::record::Record;

/// A placed part instance.
///
/// The two nested record groups are kept generic: their exact role is not
/// fully identified, though in every sample checked the first group
/// carries display properties. The trailing declared segment that follows
/// `value` on the wire is consumed during decode but not retained — its
/// content has not been deciphered.
#[derive(Clone, Debug, PartialEq)]
pub struct PartInst {
    pub package_name: String,
    pub library_id: u32,
    pub x: i16,
    pub y: i16,
    pub color: Color,
    /// First nested record group (display properties in observed samples).
    pub prop_records: Vec<Record>,
    pub reference: String,
    /// Second nested record group.
    pub pin_records: Vec<Record>,
    pub value: String,
}
