use std::fs;
use std::path::{Path, PathBuf};

use pa_core::error::CoreError;

/// Write `payload` verbatim (UTF-8) to `path`, creating or truncating it.
///
/// Missing parent directories are created. Returns the resolved absolute
/// path of the written file. Nothing is retried: the first I/O failure is
/// returned, and a partially written file may remain.
///
/// # Errors
/// Returns [`CoreError::Write`] if the directory or file cannot be created
/// or written.
///
/// # Example
/// ```no_run
/// use pa_export::writer::write_artifact;
/// use std::path::Path;
/// let written = write_artifact("@@\n..", Path::new("ascii_art.txt")).unwrap();
/// println!("{}", written.display());
/// ```
pub fn write_artifact(payload: &str, path: &Path) -> Result<PathBuf, CoreError> {
    let write_err = |source| CoreError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, payload).map_err(write_err)?;

    let resolved = fs::canonicalize(path).map_err(write_err)?;
    log::info!("Écrit : {} ({} octets)", resolved.display(), payload.len());
    Ok(resolved)
}
