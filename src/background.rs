use std::path::Path;

use egui::ColorImage;

use crate::error::{BackgroundError, BackgroundResult};

/// Read and decode the image at `path` for use as the canvas background.
pub fn load_background(path: &Path) -> BackgroundResult<ColorImage> {
    log::info!("Loading background image from {}", path.display());
    let bytes = std::fs::read(path).map_err(|source| BackgroundError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    decode_background(&bytes)
}

/// Decode an in-memory image (any format the `image` crate knows) into RGBA pixels.
pub fn decode_background(bytes: &[u8]) -> BackgroundResult<ColorImage> {
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    if size[0] == 0 || size[1] == 0 {
        return Err(BackgroundError::Empty);
    }

    log::debug!("Decoded background image: {}x{}", size[0], size[1]);
    Ok(ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}
