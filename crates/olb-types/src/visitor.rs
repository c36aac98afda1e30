use crate::bitmap::Bitmap;
use crate::display_prop::DisplayProp;
use crate::graphic_arc::GraphicArc;
use crate::part_inst::PartInst;
use crate::port::Port;
use crate::t0x5b::T0x5b;

/// Read-only traversal over the decoded record tree.
///
/// One operation per concrete record kind; [`Record::accept`] calls back
/// into the matching one (double dispatch). The set of kinds is closed,
/// so adding a record kind means extending this trait — in exchange,
/// every consumer is checked for exhaustiveness at compile time instead
/// of silently ignoring new kinds at run time.
///
/// All operations default to no-ops so a consumer interested in a single
/// kind implements exactly one method.
///
/// [`Record::accept`]: crate::record::Record::accept
pub trait Visitor {
    fn visit_port(&mut self, _port: &Port) {}

    fn visit_display_prop(&mut self, _prop: &DisplayProp) {}

    fn visit_part_inst(&mut self, _part: &PartInst) {}

    fn visit_graphic_arc(&mut self, _arc: &GraphicArc) {}

    fn visit_bitmap(&mut self, _bitmap: &Bitmap) {}

    fn visit_t0x5b(&mut self, _rec: &T0x5b) {}
}
