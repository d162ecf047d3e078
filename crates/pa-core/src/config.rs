use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::charset::CHARSET_COMPACT;

/// Configuration complète d'un run.
///
/// Sérialisable en TOML. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use pa_core::config::RenderConfig;
/// let config = RenderConfig::default();
/// assert_eq!(config.target_width, 120);
/// assert_eq!(config.font_size_px, 8);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct RenderConfig {
    // === Conversion ===
    /// Largeur cible en caractères.
    pub target_width: u32,
    /// Correction d'aspect : un glyphe monospace est plus haut que large.
    pub aspect_correction: f32,
    /// Rampe du plus clair au plus dense.
    pub charset: String,

    // === Sortie ===
    /// Nom du fichier texte monochrome.
    pub text_file: String,
    /// Nom du document HTML coloré.
    pub html_file: String,
    /// Taille de glyphe HTML, en pixels (font-size et line-height).
    pub font_size_px: u8,
    /// Couleur de fond CSS de la page HTML.
    pub background: String,
    /// Nombre de caractères affichés dans l'aperçu console.
    pub preview_chars: usize,
    /// Ouvrir les fichiers produits dans l'application par défaut.
    pub open_outputs: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            target_width: 120,
            aspect_correction: 0.55,
            charset: CHARSET_COMPACT.into(),
            text_file: "ascii_art.txt".into(),
            html_file: "ascii_art_color.html".into(),
            font_size_px: 8,
            background: "#000".into(),
            preview_chars: 800,
            open_outputs: true,
        }
    }
}

impl RenderConfig {
    /// Clamp all numeric fields to their valid ranges.
    /// Called after TOML deserialization to prevent out-of-range values.
    pub fn clamp_all(&mut self) {
        self.target_width = self.target_width.clamp(1, 1000);
        self.aspect_correction = self.aspect_correction.clamp(0.1, 2.0);
        self.font_size_px = self.font_size_px.clamp(4, 32);
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    render: Option<RenderSection>,
    output: Option<OutputSection>,
}

/// Render section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct RenderSection {
    target_width: Option<u32>,
    aspect_correction: Option<f32>,
    charset: Option<String>,
}

/// Output section of the TOML config, all fields optional.
#[derive(Deserialize)]
struct OutputSection {
    text_file: Option<String>,
    html_file: Option<String>,
    font_size_px: Option<u8>,
    background: Option<String>,
    preview_chars: Option<usize>,
    open_outputs: Option<bool>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use pa_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<RenderConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    let config = parse_config(&content)
        .with_context(|| format!("Erreur de parsing TOML dans {}", path.display()))?;
    log::debug!("Config chargée depuis {}", path.display());
    Ok(config)
}

/// Parse TOML text and merge it over the defaults.
///
/// # Errors
/// Returns an error if the text is not valid TOML for this schema.
///
/// # Example
/// ```
/// use pa_core::config::parse_config;
/// let config = parse_config("[render]\ntarget_width = 80\n").unwrap();
/// assert_eq!(config.target_width, 80);
/// assert_eq!(config.html_file, "ascii_art_color.html");
/// ```
pub fn parse_config(content: &str) -> Result<RenderConfig> {
    let file: ConfigFile = toml::from_str(content)?;

    let mut config = RenderConfig::default();

    if let Some(r) = file.render {
        if let Some(v) = r.target_width {
            config.target_width = v;
        }
        if let Some(v) = r.aspect_correction {
            config.aspect_correction = v;
        }
        if let Some(v) = r.charset {
            config.charset = v;
        }
    }

    if let Some(o) = file.output {
        if let Some(v) = o.text_file {
            config.text_file = v;
        }
        if let Some(v) = o.html_file {
            config.html_file = v;
        }
        if let Some(v) = o.font_size_px {
            config.font_size_px = v;
        }
        if let Some(v) = o.background {
            config.background = v;
        }
        if let Some(v) = o.preview_chars {
            config.preview_chars = v;
        }
        if let Some(v) = o.open_outputs {
            config.open_outputs = v;
        }
    }

    config.clamp_all();
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn shipped_default_file_matches_defaults() {
        let config = parse_config(include_str!("../../../config/default.toml")).unwrap();
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn partial_sections_override_defaults() {
        let config = parse_config(
            r#"
            [render]
            charset = " #"

            [output]
            font_size_px = 10
            open_outputs = false
            "#,
        )
        .unwrap();
        assert_eq!(config.charset, " #");
        assert_eq!(config.font_size_px, 10);
        assert!(!config.open_outputs);
        assert_eq!(config.target_width, 120);
        assert!((config.aspect_correction - 0.55).abs() < f32::EPSILON);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = parse_config(
            "[render]\ntarget_width = 0\naspect_correction = 9.0\n[output]\nfont_size_px = 1\n",
        )
        .unwrap();
        assert_eq!(config.target_width, 1);
        assert!((config.aspect_correction - 2.0).abs() < f32::EPSILON);
        assert_eq!(config.font_size_px, 4);
    }

    #[test]
    fn wrong_type_is_an_error() {
        assert!(parse_config("[render]\ntarget_width = \"wide\"\n").is_err());
    }

    #[test]
    fn load_config_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photoascii.toml");
        std::fs::write(&path, "[output]\nhtml_file = \"out.html\"\n").unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.html_file, "out.html");
    }

    #[test]
    fn load_config_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(&dir.path().join("absent.toml")).is_err());
    }
}
