//! Writing rendered frames to disk.

use std::path::Path;

use image::{ImageBuffer, Rgba};

use crate::{OutputFormat, RenderError, RenderResult};

/// Saves RGBA pixel data to an image file.
///
/// # Arguments
/// * `path` - Output file path
/// * `data` - RGBA pixel data, 4 bytes per pixel, rows top to bottom
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `format` - Encoding; JPEG drops the alpha channel
///
/// # Errors
/// Returns an error if the buffer size is wrong or the file cannot be written.
pub fn save_image(
    path: &Path,
    data: &[u8],
    width: u32,
    height: u32,
    format: OutputFormat,
) -> RenderResult<()> {
    let expected = width as usize * height as usize * 4;
    if data.len() != expected {
        return Err(RenderError::InvalidImageData {
            expected,
            actual: data.len(),
        });
    }

    let img: ImageBuffer<Rgba<u8>, Vec<u8>> = ImageBuffer::from_raw(width, height, data.to_vec())
        .ok_or(RenderError::InvalidImageData {
            expected,
            actual: data.len(),
        })?;

    match format {
        OutputFormat::Png => {
            img.save_with_format(path, image::ImageFormat::Png)?;
        }
        OutputFormat::Jpeg => {
            // Convert to RGB for JPEG (no alpha)
            let rgb_img = image::DynamicImage::ImageRgba8(img).to_rgb8();
            rgb_img.save_with_format(path, image::ImageFormat::Jpeg)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_png_roundtrip_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        let data = vec![128u8; 4 * 3 * 2];
        save_image(&path, &data, 3, 2, OutputFormat::Png).unwrap();
        let img = image::open(&path).unwrap();
        assert_eq!((img.width(), img.height()), (3, 2));
    }

    #[test]
    fn test_save_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.jpg");
        let data = vec![200u8; 4 * 8 * 8];
        save_image(&path, &data, 8, 8, OutputFormat::Jpeg).unwrap();
        assert!(path.is_file());
    }

    #[test]
    fn test_wrong_buffer_size() {
        let dir = tempfile::tempdir().unwrap();
        let err = save_image(&dir.path().join("x.png"), &[0u8; 7], 2, 2, OutputFormat::Png)
            .unwrap_err();
        assert!(matches!(
            err,
            RenderError::InvalidImageData {
                expected: 16,
                actual: 7
            }
        ));
    }

    #[test]
    fn test_missing_directory_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("x.png");
        assert!(save_image(&path, &[0u8; 16], 2, 2, OutputFormat::Png).is_err());
    }
}
