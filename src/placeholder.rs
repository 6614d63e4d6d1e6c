//! Demo-mode fallback image: a deterministic gradient rendered when the
//! upstream model is unavailable, so failed generations still return a
//! displayable image.

use crate::error::{GenError, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use std::io::Cursor;

pub const PLACEHOLDER_WIDTH: u32 = 512;
pub const PLACEHOLDER_HEIGHT: u32 = 512;

#[allow(clippy::cast_possible_truncation)] // gradient coordinates fit in u8 after scaling
fn render() -> DynamicImage {
    let buffer = ImageBuffer::from_fn(PLACEHOLDER_WIDTH, PLACEHOLDER_HEIGHT, |x, y| {
        let r = (x * 255 / PLACEHOLDER_WIDTH) as u8;
        let g = (y * 255 / PLACEHOLDER_HEIGHT) as u8;
        let b = ((x + y) * 255 / (PLACEHOLDER_WIDTH + PLACEHOLDER_HEIGHT)) as u8;
        Rgb([r, g, b])
    });

    DynamicImage::ImageRgb8(buffer)
}

/// Encode the placeholder as a `data:image/png;base64,` URI.
pub fn placeholder_data_uri() -> Result<String> {
    let mut buffer = Cursor::new(Vec::new());
    render()
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| GenError::InternalError(format!("failed to encode placeholder: {}", e)))?;

    Ok(format!(
        "data:image/png;base64,{}",
        STANDARD.encode(buffer.get_ref())
    ))
}
