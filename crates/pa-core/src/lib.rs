/// Configuration, types, and shared structures for photoascii.
///
/// This crate contains the rasters, the character mapper, the configuration
/// and the error type shared across the photoascii workspace.

pub mod charset;
pub mod config;
pub mod error;
pub mod frame;

pub use charset::CharacterMapper;
pub use config::RenderConfig;
pub use error::CoreError;
pub use frame::{GrayRaster, RgbRaster};
