/// ASCII conversion engine for photoascii.
///
/// Converts RGB rasters to grayscale and grayscale rasters to character grids.
pub mod luminance;
pub mod text;
