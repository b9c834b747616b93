//! Raster image decoding and PNG encoding.

use std::io::Cursor;

use image::{ImageFormat, ImageReader};
use log::debug;
use tiny_skia::{IntSize, Pixmap};

use crate::error::{Result, ScribblerError};

const PNG_SIGNATURE: &[u8] = &[0x89, 0x50, 0x4E, 0x47];
const JPEG_SIGNATURE: &[u8] = &[0xFF, 0xD8, 0xFF];

/// Detects the image format from the leading bytes of `bytes`.
fn detect_format(bytes: &[u8]) -> Result<ImageFormat> {
    if bytes.starts_with(PNG_SIGNATURE) {
        Ok(ImageFormat::Png)
    } else if bytes.starts_with(JPEG_SIGNATURE) {
        Ok(ImageFormat::Jpeg)
    } else {
        Err(ScribblerError::Codec(
            "unsupported image format, expected PNG or JPEG".to_string(),
        ))
    }
}

/// Decodes PNG or JPEG bytes into a premultiplied pixmap.
///
/// # Errors
///
/// Returns [`ScribblerError::Codec`] if the format is not recognized or the
/// data is corrupt.
pub fn decode_image(bytes: &[u8]) -> Result<Pixmap> {
    let format = detect_format(bytes)?;
    let image = ImageReader::with_format(Cursor::new(bytes), format)
        .decode()
        .map_err(|err| ScribblerError::Codec(format!("cannot decode {format:?} image: {err}")))?
        .into_rgba8();

    let (width, height) = image.dimensions();
    debug!(format:? = format, width = width, height = height; "Decoded image");

    let size = IntSize::from_wh(width, height)
        .ok_or_else(|| ScribblerError::Codec(format!("image has no pixels ({width}x{height})")))?;

    let mut data = image.into_raw();
    for pixel in data.chunks_exact_mut(4) {
        let alpha = u16::from(pixel[3]);
        for channel in &mut pixel[..3] {
            *channel = ((u16::from(*channel) * alpha + 127) / 255) as u8;
        }
    }

    Pixmap::from_vec(data, size)
        .ok_or_else(|| ScribblerError::Codec("pixel buffer does not match image size".to_string()))
}

/// Encodes `pixmap` as PNG.
///
/// # Errors
///
/// Returns [`ScribblerError::Codec`] if encoding fails.
pub fn encode_png(pixmap: &Pixmap) -> Result<Vec<u8>> {
    pixmap
        .encode_png()
        .map_err(|err| ScribblerError::Codec(format!("cannot encode PNG: {err}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_png(width: u32, height: u32) -> Vec<u8> {
        let mut pixmap = Pixmap::new(width, height).unwrap();
        pixmap.fill(tiny_skia::Color::from_rgba8(10, 20, 30, 255));
        pixmap.encode_png().unwrap()
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(
            detect_format(&[0x89, 0x50, 0x4E, 0x47, 0x0D]).unwrap(),
            ImageFormat::Png
        );
        assert_eq!(
            detect_format(&[0xFF, 0xD8, 0xFF, 0xE0]).unwrap(),
            ImageFormat::Jpeg
        );
        assert!(matches!(
            detect_format(b"GIF89a"),
            Err(ScribblerError::Codec(_))
        ));
        assert!(detect_format(&[]).is_err());
    }

    #[test]
    fn test_png_roundtrip_keeps_size_and_color() {
        let pixmap = decode_image(&sample_png(7, 3)).unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (7, 3));

        let pixel = pixmap.pixel(2, 1).unwrap();
        assert_eq!(
            (pixel.red(), pixel.green(), pixel.blue(), pixel.alpha()),
            (10, 20, 30, 255)
        );

        let encoded = encode_png(&pixmap).unwrap();
        assert!(encoded.starts_with(PNG_SIGNATURE));
    }

    #[test]
    fn test_truncated_png_is_codec_error() {
        let mut bytes = sample_png(4, 4);
        bytes.truncate(12);
        assert!(matches!(decode_image(&bytes), Err(ScribblerError::Codec(_))));
    }

    #[test]
    fn test_decode_premultiplies_alpha() {
        let mut pixmap = Pixmap::new(1, 1).unwrap();
        pixmap.fill(tiny_skia::Color::from_rgba8(255, 0, 0, 128));
        let decoded = decode_image(&pixmap.encode_png().unwrap()).unwrap();

        let pixel = decoded.pixel(0, 0).unwrap();
        assert_eq!(pixel.alpha(), 128);
        assert_eq!(pixel.red(), 128);
    }
}
