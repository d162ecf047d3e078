use std::fmt::Write;

use pa_core::charset::CharacterMapper;
use pa_core::config::RenderConfig;
use pa_core::error::CoreError;
use pa_core::frame::{GrayRaster, RgbRaster};

/// Mise en page du document HTML.
///
/// # Example
/// ```
/// use pa_export::html::HtmlStyle;
/// let style = HtmlStyle::default();
/// assert_eq!(style.font_size_px, 8);
/// assert_eq!(style.background, "#000");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HtmlStyle {
    /// Taille du glyphe en pixels (font-size et line-height).
    pub font_size_px: u8,
    /// Fond de page CSS. Sombre pour garder les caractères clairs visibles.
    pub background: String,
}

impl Default for HtmlStyle {
    fn default() -> Self {
        Self::from(&RenderConfig::default())
    }
}

impl From<&RenderConfig> for HtmlStyle {
    fn from(config: &RenderConfig) -> Self {
        Self {
            font_size_px: config.font_size_px,
            background: config.background.clone(),
        }
    }
}

/// Encode every pixel as a colored span.
///
/// For each pixel in row-major order, emits
/// `<span style="color:rgb(r,g,b)">c</span>` where `c` is the ramp character
/// of the paired grayscale sample. A `\n` follows every completed row,
/// including the last one: the fragment holds exactly `height` line breaks.
///
/// # Errors
/// Returns [`CoreError::InvalidInput`] if the rasters differ in size.
///
/// # Example
/// ```
/// use pa_core::charset::{CharacterMapper, CHARSET_COMPACT};
/// use pa_core::frame::{GrayRaster, RgbRaster};
/// use pa_export::html::encode_fragment;
///
/// let mapper = CharacterMapper::new(CHARSET_COMPACT).unwrap();
/// let rgb = RgbRaster::from_raw(1, 1, vec![255, 0, 0]).unwrap();
/// let gray = GrayRaster::from_raw(1, 1, vec![76]).unwrap();
/// let html = encode_fragment(&rgb, &gray, &mapper).unwrap();
/// assert_eq!(html, "<span style=\"color:rgb(255,0,0)\">-</span>\n");
/// ```
pub fn encode_fragment(
    rgb: &RgbRaster,
    gray: &GrayRaster,
    mapper: &CharacterMapper,
) -> Result<String, CoreError> {
    if !gray.matches(rgb) {
        return Err(CoreError::InvalidInput(format!(
            "rasters de tailles différentes : RGB {}×{}, gris {}×{}",
            rgb.width, rgb.height, gray.width, gray.height
        )));
    }

    let width = rgb.width as usize;
    // ~40 bytes per span
    let mut out = String::with_capacity(gray.data.len() * 40 + rgb.height as usize);
    for (i, ((r, g, b), &v)) in rgb.pixels().zip(&gray.data).enumerate() {
        let _ = write!(out, "<span style=\"color:rgb({r},{g},{b})\">");
        push_escaped(&mut out, mapper.map(v));
        out.push_str("</span>");
        if (i + 1) % width == 0 {
            out.push('\n');
        }
    }
    Ok(out)
}

/// Wrap a fragment in a complete HTML page.
///
/// # Example
/// ```
/// use pa_export::html::{wrap_document, HtmlStyle};
/// let page = wrap_document("", "chat.png", &HtmlStyle::default());
/// assert!(page.starts_with("<!DOCTYPE html>"));
/// assert!(page.contains("<title>ASCII-Art: chat.png</title>"));
/// ```
#[must_use]
pub fn wrap_document(fragment: &str, title: &str, style: &HtmlStyle) -> String {
    let mut escaped_title = String::with_capacity(title.len());
    for c in title.chars() {
        push_escaped(&mut escaped_title, c);
    }
    let size = style.font_size_px;
    let background = &style.background;
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>ASCII-Art: {escaped_title}</title>
    <style>
        body {{ background:{background}; color:#fff; text-align:center; padding:20px; }}
        pre {{ display:inline-block; margin:0; text-align:left; font-family:monospace; font-size:{size}px; line-height:{size}px; letter-spacing:0; }}
    </style>
</head>
<body>
<pre>
{fragment}</pre>
</body>
</html>
"#
    )
}

/// Colored HTML document for a raster pair. See [`encode_fragment`].
///
/// # Errors
/// Returns [`CoreError::InvalidInput`] if the rasters differ in size.
pub fn encode_html(
    rgb: &RgbRaster,
    gray: &GrayRaster,
    mapper: &CharacterMapper,
    title: &str,
    style: &HtmlStyle,
) -> Result<String, CoreError> {
    let fragment = encode_fragment(rgb, gray, mapper)?;
    log::debug!("HTML : {} spans, {} octets", gray.data.len(), fragment.len());
    Ok(wrap_document(&fragment, title, style))
}

#[inline]
fn push_escaped(out: &mut String, c: char) {
    match c {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        _ => out.push(c),
    }
}
