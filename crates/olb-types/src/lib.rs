#![warn(clippy::pedantic)]

pub mod bitmap;
pub mod catalog;
pub mod display_prop;
pub mod enums;
pub mod error;
pub mod graphic_arc;
pub mod part_inst;
pub mod port;
pub mod record;
pub mod record_kind;
pub mod t0x5b;
pub mod text_font;
pub mod visitor;

pub use bitmap::Bitmap;
pub use catalog::Catalogs;
pub use display_prop::DisplayProp;
pub use enums::{Color, Rotation};
pub use error::TypeError;
pub use graphic_arc::GraphicArc;
pub use part_inst::PartInst;
pub use port::Port;
pub use record::Record;
pub use record_kind::RecordKind;
pub use t0x5b::T0x5b;
pub use text_font::TextFont;
pub use visitor::Visitor;
