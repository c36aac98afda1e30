/// An arc primitive instance.
///
/// `(x1, y1)`-`(x2, y2)` is the bounding box; the start and end points
/// select the swept portion of the inscribed ellipse.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphicArc {
    pub id: u32,
    pub x: i16,
    pub y: i16,
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
    pub start_x: i32,
    pub start_y: i32,
    pub end_x: i32,
    pub end_y: i32,
}
