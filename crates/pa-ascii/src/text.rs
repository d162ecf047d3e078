use pa_core::charset::CharacterMapper;
use pa_core::frame::GrayRaster;

/// Encode a grayscale raster as a plain-text character grid.
///
/// One line per row, characters in column order, rows separated by `\n`.
/// No trailing newline after the last row.
///
/// # Example
/// ```
/// use pa_core::charset::{CharacterMapper, CHARSET_COMPACT};
/// use pa_core::frame::GrayRaster;
/// use pa_ascii::text::encode_text;
///
/// let mapper = CharacterMapper::new(CHARSET_COMPACT).unwrap();
/// let gray = GrayRaster::from_raw(2, 2, vec![0, 255, 76, 29]).unwrap();
/// assert_eq!(encode_text(&gray, &mapper), " @\n-.");
/// ```
#[must_use]
pub fn encode_text(gray: &GrayRaster, mapper: &CharacterMapper) -> String {
    // Multibyte ramps (blocks) may need more; this covers ASCII exactly.
    let mut out = String::with_capacity(gray.data.len() + gray.height as usize);
    for (y, row) in gray.rows().enumerate() {
        if y > 0 {
            out.push('\n');
        }
        out.extend(row.iter().map(|&v| mapper.map(v)));
    }
    out
}
