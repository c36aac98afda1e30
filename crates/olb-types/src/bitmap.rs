/// An embedded raster image.
///
/// `data` is the raw pixel payload as stored in the file. Converting it
/// to an image file is left to surrounding tooling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    pub x: i32,
    pub y: i32,
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}
