/// Record type codes observed in library samples.
///
/// ```text
/// ┌──────┬─────────────┬────────────────────────────────────┐
/// │ Wire │ Variant     │ Description                        │
/// ├──────┼─────────────┼────────────────────────────────────┤
/// │ 0x06 │ Port        │ Connection point with display props │
/// │ 0x07 │ DisplayProp │ Positioned, styled property text   │
/// │ 0x1F │ PartInst    │ Placed part instance               │
/// │ 0x28 │ GraphicArc  │ Arc primitive instance             │
/// │ 0x32 │ Bitmap      │ Embedded raster image              │
/// │ 0x5B │ T0x5b       │ Purpose not yet identified         │
/// └──────┴─────────────┴────────────────────────────────────┘
/// ```
///
/// This set is closed on purpose. The format is reverse-engineered: a type
/// code outside this table means the file is not one this decoder
/// understands, and pressing on would consume the region under a wrong
/// schema and desynchronize every read after it. Unknown codes are
/// therefore rejected at dispatch rather than preserved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    Port,
    DisplayProp,
    PartInst,
    GraphicArc,
    Bitmap,
    T0x5b,
}

impl RecordKind {
    /// Resolve a wire type code, or `None` for codes this decoder does not
    /// understand (the caller turns that into a fatal dispatch error).
    pub fn from_wire_id(id: u8) -> Option<Self> {
        match id {
            0x06 => Some(Self::Port),
            0x07 => Some(Self::DisplayProp),
            0x1F => Some(Self::PartInst),
            0x28 => Some(Self::GraphicArc),
            0x32 => Some(Self::Bitmap),
            0x5B => Some(Self::T0x5b),
            _ => None,
        }
    }

    /// The single-byte wire code for this kind.
    pub fn wire_id(self) -> u8 {
        match self {
            Self::Port => 0x06,
            Self::DisplayProp => 0x07,
            Self::PartInst => 0x1F,
            Self::GraphicArc => 0x28,
            Self::Bitmap => 0x32,
            Self::T0x5b => 0x5B,
        }
    }

    /// Stable display name, used in diagnostics and reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::Port => "port",
            Self::DisplayProp => "display property",
            Self::PartInst => "part instance",
            Self::GraphicArc => "graphic arc",
            Self::Bitmap => "bitmap",
            Self::T0x5b => "t0x5b",
        }
    }
}
