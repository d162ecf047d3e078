use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use pa_core::charset::{PRESETS, preset};
use pa_core::config::RenderConfig;
use pa_core::error::CoreError;

/// photoascii — convertit une photo en ASCII-art (texte + HTML couleur).
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Image source (PNG, JPEG, BMP, GIF). Demandée sur stdin si absente.
    pub image: Option<PathBuf>,

    /// Largeur de sortie en caractères. Défaut : 120 (ou la config).
    #[arg(short, long)]
    pub width: Option<u32>,

    /// Rampe de caractères : compact, standard, blocks, minimal.
    #[arg(long)]
    pub charset: Option<String>,

    /// Dossier de sortie des fichiers produits.
    #[arg(short, long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Ne pas ouvrir les fichiers produits.
    #[arg(long, default_value_t = false)]
    pub no_open: bool,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Apply CLI overrides on top of a loaded config.
    ///
    /// # Errors
    /// Returns [`CoreError::Config`] if `--charset` names no known preset.
    pub fn apply_overrides(&self, config: &mut RenderConfig) -> Result<()> {
        if let Some(width) = self.width {
            config.target_width = width;
        }
        if let Some(ref name) = self.charset {
            let Some(ramp) = preset(name) else {
                let known: Vec<&str> = PRESETS.iter().map(|(n, _)| *n).collect();
                return Err(CoreError::Config(format!(
                    "charset inconnu '{name}' (disponibles : {})",
                    known.join(", ")
                ))
                .into());
            };
            config.charset = ramp.into();
        }
        if self.no_open {
            config.open_outputs = false;
        }
        config.clamp_all();
        Ok(())
    }
}
