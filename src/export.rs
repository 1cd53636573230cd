use std::path::{Path, PathBuf};

use crate::error::PaintResult;
use crate::raster::Raster;

/// Extension appended when the chosen path has no recognized one
pub const DEFAULT_EXTENSION: &str = "png";

/// Extensions the exporter can write
pub const SUPPORTED_EXTENSIONS: &[&str] = &[DEFAULT_EXTENSION];

/// Check if a path already ends in an extension we write
pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

/// Append `.png` unless the path already carries a supported extension.
///
/// The suffix is appended, not substituted: `notes.txt` becomes `notes.txt.png`.
pub fn normalize_path(path: &Path) -> PathBuf {
    if has_supported_extension(path) {
        return path.to_path_buf();
    }
    let mut name = path.as_os_str().to_owned();
    name.push(".");
    name.push(DEFAULT_EXTENSION);
    PathBuf::from(name)
}

/// Write the flattened raster to `path` (normalized first) and return the
/// path actually written.
pub fn export_png(raster: &Raster, path: &Path) -> PaintResult<PathBuf> {
    let target = normalize_path(path);
    raster.save_png(&target)?;
    log::info!(
        "Exported {}x{} canvas to {}",
        raster.width(),
        raster.height(),
        target.display()
    );
    Ok(target)
}
