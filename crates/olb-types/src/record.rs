use crate::bitmap::Bitmap;
use crate::display_prop::DisplayProp;
use crate::graphic_arc::GraphicArc;
use crate::part_inst::PartInst;
use crate::port::Port;
use crate::record_kind::RecordKind;
use crate::t0x5b::T0x5b;
use crate::visitor::Visitor;

/// A decoded record — the closed union of all concrete record kinds.
///
/// Records form an ownership tree: children are held by value inside
/// their parent (no back-references, no sharing), and the whole tree is
/// dropped with the root. Consumers traverse it through [`Visitor`]
/// rather than by matching on this enum, so new export or render
/// behaviors can be added without touching the record definitions.
#[derive(Clone, Debug, PartialEq)]
pub enum Record {
    Port(Port),
    DisplayProp(DisplayProp),
    PartInst(PartInst),
    GraphicArc(GraphicArc),
    Bitmap(Bitmap),
    T0x5b(T0x5b),
}

impl Record {
    /// The kind tag this record was dispatched under.
    pub fn kind(&self) -> RecordKind {
        match self {
            Self::Port(_) => RecordKind::Port,
            Self::DisplayProp(_) => RecordKind::DisplayProp,
            Self::PartInst(_) => RecordKind::PartInst,
            Self::GraphicArc(_) => RecordKind::GraphicArc,
            Self::Bitmap(_) => RecordKind::Bitmap,
            Self::T0x5b(_) => RecordKind::T0x5b,
        }
    }

    /// Double dispatch into the visitor's operation for this concrete
    /// kind. Descending into nested records (a part instance's record
    /// groups, a port's display properties) is the visitor's choice —
    /// `accept` itself dispatches exactly once.
    pub fn accept(&self, visitor: &mut dyn Visitor) {
        match self {
            Self::Port(port) => visitor.visit_port(port),
            Self::DisplayProp(prop) => visitor.visit_display_prop(prop),
            Self::PartInst(part) => visitor.visit_part_inst(part),
            Self::GraphicArc(arc) => visitor.visit_graphic_arc(arc),
            Self::Bitmap(bitmap) => visitor.visit_bitmap(bitmap),
            Self::T0x5b(rec) => visitor.visit_t0x5b(rec),
        }
    }
}
