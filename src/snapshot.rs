//! PNG export of the raster buffer, one image pixel per cell

use std::path::Path;
use image::RgbaImage;
use crate::rasterizer::RasterBuffer;

/// Default export file, written to the working directory
pub const SNAPSHOT_PATH: &str = "raster_snapshot.png";

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Buffer of {width}x{height} cells does not fit an image")]
    Size { width: usize, height: usize },
}

/// Copy the buffer into an RGBA image
pub fn to_image(buffer: &RasterBuffer) -> Result<RgbaImage, SnapshotError> {
    let size_error = || SnapshotError::Size {
        width: buffer.width(),
        height: buffer.height(),
    };
    let width = u32::try_from(buffer.width()).map_err(|_| size_error())?;
    let height = u32::try_from(buffer.height()).map_err(|_| size_error())?;

    RgbaImage::from_raw(width, height, buffer.to_rgba_bytes()).ok_or_else(size_error)
}

/// Write the buffer as a PNG
pub fn save_png<P: AsRef<Path>>(buffer: &RasterBuffer, path: P) -> Result<(), SnapshotError> {
    let path = path.as_ref();
    to_image(buffer)?.save(path)?;
    tracing::info!("wrote {}x{} snapshot to {}", buffer.width(), buffer.height(), path.display());
    Ok(())
}
