/// Configuration, types, and shared structures for vecscii.
///
/// This crate contains all shared types and configuration logic
/// used across the vecscii workspace. No I/O happens here.

pub mod caption;
pub mod config;
pub mod error;
pub mod frame;
pub mod ramp;

pub use caption::CaptionPlacement;
pub use config::{Justify, RenderConfig};
pub use error::CoreError;
pub use frame::{FrameBuffer, GlyphGrid};
pub use ramp::RampLut;
