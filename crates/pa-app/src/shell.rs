use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result};
use pa_core::config::RenderConfig;
use pa_export::writer::write_artifact;
use pa_source::image::load_image;

use crate::cli::Cli;
use crate::pipeline::render;

/// Fichiers produits par un run.
#[derive(Debug)]
pub struct RunReport {
    /// Chemin résolu du fichier texte.
    pub text_path: PathBuf,
    /// Chemin résolu du document HTML.
    pub html_path: PathBuf,
    /// Rendu monochrome complet.
    pub text: String,
    /// Largeur en caractères.
    pub width: u32,
    /// Hauteur en lignes.
    pub height: u32,
}

/// Nettoie un chemin collé ou glissé-déposé dans un terminal.
///
/// Retire les espaces et les guillemets (simples ou doubles) qui l'entourent.
#[must_use]
pub fn clean_input_path(raw: &str) -> PathBuf {
    let trimmed = raw.trim();
    let unquoted = trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .or_else(|| {
            trimmed
                .strip_prefix('\'')
                .and_then(|s| s.strip_suffix('\''))
        })
        .unwrap_or(trimmed);
    PathBuf::from(unquoted.trim())
}

/// Ask for an image path on `output`, read one line from `input`.
///
/// # Errors
/// Returns an error if reading fails or the line is blank.
pub fn prompt_for_path(input: &mut impl BufRead, output: &mut impl Write) -> Result<PathBuf> {
    write!(output, "Glissez une image ici et appuyez sur Entrée :\n> ")?;
    output.flush()?;
    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Lecture du chemin impossible")?;
    let path = clean_input_path(&line);
    if path.as_os_str().is_empty() {
        anyhow::bail!("Aucun chemin d'image fourni.");
    }
    Ok(path)
}

/// Longest prefix of `text` holding at most `max_chars` characters, and
/// whether anything was cut.
#[must_use]
pub fn preview(text: &str, max_chars: usize) -> (&str, bool) {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => (&text[..byte_idx], true),
        None => (text, false),
    }
}

/// Decode, render and write both artifacts into `out_dir`.
///
/// Nothing is written unless decoding and rendering both succeed.
///
/// # Errors
/// [`pa_core::CoreError::InputNotFound`], [`pa_core::CoreError::Decode`],
/// [`pa_core::CoreError::InvalidInput`] or [`pa_core::CoreError::Write`],
/// wrapped with context.
pub fn convert(image_path: &Path, out_dir: &Path, config: &RenderConfig) -> Result<RunReport> {
    let source = load_image(image_path)?;

    let title = image_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("image");
    log::info!("Conversion de {title} en {} colonnes", config.target_width);
    let artifacts = render(&source, config, title)?;

    let text_path = write_artifact(&artifacts.text, &out_dir.join(&config.text_file))
        .context("Échec d'écriture de la version monochrome")?;
    let html_path = write_artifact(&artifacts.html, &out_dir.join(&config.html_file))
        .context("Échec d'écriture de la version couleur")?;

    Ok(RunReport {
        text_path,
        html_path,
        text: artifacts.text,
        width: artifacts.width,
        height: artifacts.height,
    })
}

/// Ouvre un fichier dans l'application par défaut de l'OS.
///
/// Les échecs sont journalisés, jamais remontés.
pub fn open_in_default_app(path: &Path) {
    let mut command = if cfg!(target_os = "windows") {
        let mut c = Command::new("cmd");
        c.args(["/C", "start", ""]).arg(path);
        c
    } else if cfg!(target_os = "macos") {
        let mut c = Command::new("open");
        c.arg(path);
        c
    } else {
        let mut c = Command::new("xdg-open");
        c.arg(path);
        c
    };
    match command.spawn() {
        Ok(_) => log::info!("Ouverture de {}", path.display()),
        Err(e) => log::warn!("Impossible d'ouvrir {} : {e}", path.display()),
    }
}

/// Print the monochrome preview and the list of produced files.
///
/// # Errors
/// Returns an error if `out` cannot be written.
pub fn print_summary(
    report: &RunReport,
    config: &RenderConfig,
    out: &mut impl Write,
) -> Result<()> {
    let (head, truncated) = preview(&report.text, config.preview_chars);
    writeln!(out, "\nAPERÇU (monochrome) :\n")?;
    writeln!(out, "{head}")?;
    if truncated {
        writeln!(out, "...")?;
    }
    writeln!(out, "\nTerminé ! {}×{} caractères.", report.width, report.height)?;
    writeln!(out, "{}", "─".repeat(56))?;
    writeln!(out, "1. {}", report.text_path.display())?;
    writeln!(out, "   → ASCII-art monochrome, lisible dans tout éditeur de texte")?;
    writeln!(out, "2. {}", report.html_path.display())?;
    writeln!(out, "   → ASCII-art en couleur, à ouvrir dans un navigateur")?;
    writeln!(out, "{}", "─".repeat(56))?;
    Ok(())
}

/// Full run: path acquisition, conversion, summary, opening.
///
/// # Errors
/// Any error from [`prompt_for_path`], [`convert`] or stdout.
pub fn run(cli: &Cli, config: &RenderConfig) -> Result<()> {
    let image_path = match cli.image {
        Some(ref path) => path.clone(),
        None => prompt_for_path(&mut std::io::stdin().lock(), &mut std::io::stdout())?,
    };

    let report = convert(&image_path, &cli.out_dir, config)?;
    print_summary(&report, config, &mut std::io::stdout().lock())?;

    if config.open_outputs {
        open_in_default_app(&report.text_path);
        open_in_default_app(&report.html_path);
    }
    Ok(())
}
