#![warn(clippy::pedantic)]

pub mod context;
pub mod decoder;
pub mod dispatch;
pub mod error;
pub mod readers;
pub mod window;

pub use context::DecodeContext;
pub use decoder::{DecodedLibrary, OLB_MAGIC, OlbDecoder};
pub use error::DecodeError;
pub use window::{Window, WindowTracker};
