//! PNG export for rendered canvases

use crate::io::error::{Result, TilingError, invalid_argument};
use crate::raster::Canvas;
use image::ImageFormat;
use std::path::Path;

/// Write a canvas to `output_path` as a PNG image
///
/// Missing parent directories are created. The file is always PNG encoded,
/// whatever its extension.
///
/// # Errors
///
/// Returns an error if:
/// - The canvas has zero width or height
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_canvas_as_png(canvas: &Canvas, output_path: &Path) -> Result<()> {
    if canvas.width() == 0 || canvas.height() == 0 {
        return Err(invalid_argument(
            "canvas",
            &format!("{}x{}", canvas.width(), canvas.height()),
            &"cannot encode an empty canvas as PNG",
        ));
    }

    if let Some(parent) = output_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent).map_err(|e| TilingError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    canvas
        .to_image()
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| TilingError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    tracing::debug!(
        path = %output_path.display(),
        width = canvas.width(),
        height = canvas.height(),
        "wrote png"
    );

    Ok(())
}
