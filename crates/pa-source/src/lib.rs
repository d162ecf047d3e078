/// Image sources for photoascii: decoding and downscaling.

pub mod image;
pub mod resize;
