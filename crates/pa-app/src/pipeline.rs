use anyhow::Result;
use pa_ascii::luminance::to_grayscale;
use pa_ascii::text::encode_text;
use pa_core::charset::CharacterMapper;
use pa_core::config::RenderConfig;
use pa_core::frame::RgbRaster;
use pa_export::html::{HtmlStyle, encode_html};
use pa_source::resize::Resizer;

/// Rendus en mémoire d'une image. Rien n'est écrit sur disque.
#[derive(Debug, Clone)]
pub struct Artifacts {
    /// Grille monochrome, lignes séparées par `\n`.
    pub text: String,
    /// Document HTML coloré complet.
    pub html: String,
    /// Largeur en caractères.
    pub width: u32,
    /// Hauteur en lignes.
    pub height: u32,
}

/// Resize → grayscale → text + HTML. Pure: no filesystem, no process.
///
/// # Errors
/// Returns [`pa_core::CoreError::InvalidInput`] for a degenerate source or an
/// unusable ramp.
pub fn render(source: &RgbRaster, config: &RenderConfig, title: &str) -> Result<Artifacts> {
    let mapper = CharacterMapper::new(&config.charset)?;

    let mut resizer = Resizer::new();
    let resized =
        resizer.resize_to_width(source, config.target_width, config.aspect_correction)?;
    let gray = to_grayscale(&resized);

    let text = encode_text(&gray, &mapper);
    let html = encode_html(&resized, &gray, &mapper, title, &HtmlStyle::from(config))?;

    log::debug!(
        "Rendu {}×{} → {}×{}",
        source.width,
        source.height,
        resized.width,
        resized.height
    );

    Ok(Artifacts {
        text,
        html,
        width: resized.width,
        height: resized.height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pa_core::error::CoreError;

    fn solid(width: u32, height: u32, rgb: [u8; 3]) -> RgbRaster {
        let data = (0..width * height).flat_map(|_| rgb).collect();
        RgbRaster::from_raw(width, height, data).unwrap()
    }

    fn fragment_of(html: &str) -> &str {
        let start = html.find("<pre>\n").map_or(0, |i| i + "<pre>\n".len());
        let end = html.find("</pre>").unwrap_or(html.len());
        &html[start..end]
    }

    #[test]
    fn four_pixel_scenario_without_resize() {
        let source = RgbRaster::from_raw(
            2,
            2,
            vec![0, 0, 0, 255, 255, 255, 255, 0, 0, 0, 0, 255],
        )
        .unwrap();
        let config = RenderConfig {
            target_width: 2,
            aspect_correction: 1.0,
            ..RenderConfig::default()
        };
        let out = render(&source, &config, "quad").unwrap();
        // luma [0, 255, 76, 29] → indices [0, 9, 3, 1]
        assert_eq!(out.text, " @\n-.");
        assert_eq!((out.width, out.height), (2, 2));
        let fragment = fragment_of(&out.html);
        assert!(fragment.contains("<span style=\"color:rgb(255,0,0)\">-</span>"));
        assert!(fragment.contains("<span style=\"color:rgb(0,0,255)\">.</span>"));
        assert!(fragment.contains("<span style=\"color:rgb(255,255,255)\">@</span>"));
    }

    #[test]
    fn single_white_pixel_at_width_ten() {
        let config = RenderConfig {
            target_width: 10,
            ..RenderConfig::default()
        };
        let out = render(&solid(1, 1, [255, 255, 255]), &config, "white").unwrap();
        // round(10 * 1 * 0.55) = 6
        let lines: Vec<&str> = out.text.split('\n').collect();
        assert_eq!(lines.len(), 6);
        assert!(lines.iter().all(|l| *l == "@@@@@@@@@@"));
    }

    #[test]
    fn wide_white_image_gives_one_line() {
        let config = RenderConfig {
            target_width: 10,
            ..RenderConfig::default()
        };
        // round(10 * 4/20 * 0.55) = round(1.1) = 1
        let out = render(&solid(20, 4, [255, 255, 255]), &config, "strip").unwrap();
        assert_eq!(out.text, "@@@@@@@@@@");
        assert_eq!(out.height, 1);
    }

    #[test]
    fn text_and_html_agree_on_dimensions() {
        let config = RenderConfig::default();
        let out = render(&solid(300, 200, [40, 90, 200]), &config, "blue").unwrap();
        // round(120 * 200/300 * 0.55) = 44
        assert_eq!((out.width, out.height), (120, 44));
        let lines: Vec<&str> = out.text.split('\n').collect();
        assert_eq!(lines.len(), 44);
        assert!(lines.iter().all(|l| l.chars().count() == 120));
        let fragment = fragment_of(&out.html);
        assert_eq!(fragment.matches("<span").count(), 120 * 44);
        assert_eq!(fragment.matches('\n').count(), 44);
    }

    #[test]
    fn title_lands_in_document() {
        let out = render(&solid(2, 2, [0, 0, 0]), &RenderConfig::default(), "chat.png").unwrap();
        assert!(out.html.contains("<title>ASCII-Art: chat.png</title>"));
    }

    #[test]
    fn degenerate_source_is_invalid_input() {
        let err = render(&RgbRaster::new(0, 4), &RenderConfig::default(), "x").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::InvalidInput(_))
        ));
    }

    #[test]
    fn empty_ramp_is_invalid_input() {
        let config = RenderConfig {
            charset: String::new(),
            ..RenderConfig::default()
        };
        let err = render(&solid(2, 2, [0, 0, 0]), &config, "x").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::InvalidInput(_))
        ));
    }
}
