#![warn(clippy::pedantic)]

pub mod cursor;
pub mod error;
pub mod preamble;

pub use cursor::Cursor;
pub use error::WireError;
pub use preamble::{PREAMBLE_STRIDE, Preamble};
