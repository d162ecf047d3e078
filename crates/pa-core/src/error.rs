use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors originating from the conversion pipeline.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Referenced input file does not exist.
    #[error("Fichier introuvable : {}", path.display())]
    InputNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// The image decoder could not interpret the file contents.
    #[error("Impossible d'ouvrir l'image {} : {reason}", path.display())]
    Decode {
        /// Path of the undecodable file.
        path: PathBuf,
        /// Underlying decoder message.
        reason: String,
    },

    /// Destination file cannot be created or written.
    #[error("Écriture impossible : {}", path.display())]
    Write {
        /// Destination path.
        path: PathBuf,
        /// I/O cause.
        #[source]
        source: io::Error,
    },

    /// Degenerate dimensions, bad ramp or mismatched rasters.
    #[error("Entrée invalide : {0}")]
    InvalidInput(String),

    /// Invalid configuration value or structure.
    #[error("Configuration invalide : {0}")]
    Config(String),
}
