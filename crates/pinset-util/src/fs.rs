use std::path::{Path, PathBuf};

use crate::errors::PinsetError;

/// Walk up from `start` looking for a file named `filename`.
/// Returns the path to the directory containing the file, or `None`.
pub fn find_ancestor_with(start: &Path, filename: &str) -> Option<PathBuf> {
    let mut current = start;
    loop {
        let candidate = current.join(filename);
        if candidate.is_file() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

/// Read a manifest as UTF-8 text, mapping failures to [`PinsetError::Manifest`].
pub fn read_manifest_text(path: &Path) -> Result<String, PinsetError> {
    std::fs::read_to_string(path).map_err(|e| PinsetError::Manifest {
        message: format!("Failed to read {}: {e}", path.display()),
    })
}

/// Write `contents` to `path`, creating parent directories if needed.
pub fn write_file(path: &Path, contents: &str) -> Result<(), PinsetError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, contents)?;
    tracing::debug!("Wrote {}", path.display());
    Ok(())
}
