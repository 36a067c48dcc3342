use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ForgeError;

pub const EXPORT_FILE_NAME: &str = "README.md";
pub const EXPORT_CONTENT_TYPE: &str = "text/plain";

/// Where an export lands: a directory receives `README.md`, anything else is
/// taken as the exact file path.
pub fn resolve_target(target: &Path) -> PathBuf {
    if target.is_dir() {
        target.join(EXPORT_FILE_NAME)
    } else {
        target.to_path_buf()
    }
}

/// Writes the raw rendered document, byte for byte, and returns the path.
pub fn export(document: &str, target: &Path) -> Result<PathBuf, ForgeError> {
    let path = resolve_target(target);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(&path, document)?;
    tracing::info!(
        "Exported {} bytes ({}) to {:?}",
        document.len(),
        EXPORT_CONTENT_TYPE,
        path
    );
    Ok(path)
}
