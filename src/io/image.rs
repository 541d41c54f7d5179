//! PNG export of rendered boards

use crate::io::error::{BoardError, Result};
use crate::render::raster::RasterSurface;
use std::path::Path;

/// Save a rendered surface as a PNG image
///
/// Missing parent directories are created.
///
/// # Errors
///
/// Returns an error if:
/// - The surface has no pixels (it was never sized)
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_surface_as_png(surface: &RasterSurface, output_path: &Path) -> Result<()> {
    if surface.width() == 0 || surface.height() == 0 {
        return Err(BoardError::EmptyLayout);
    }

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| BoardError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    surface
        .image()
        .save_with_format(output_path, image::ImageFormat::Png)
        .map_err(|e| BoardError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
