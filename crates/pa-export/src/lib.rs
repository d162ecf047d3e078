/// Output encoders and writers for photoascii.

pub mod html;
pub mod writer;
