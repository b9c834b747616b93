//! Integration tests for the decorate API
//!
//! These tests run complete decorate calls on in-memory images and check the
//! PNG output.

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};

use scribbler::{
    Assets, Scribbler, ScribblerError,
    color::{Color, ColorType, Direction},
    config::DecorateConfig,
    decorate,
};
use scribbler_core::layout::LayoutType;

fn encode(image: &RgbaImage, format: ImageFormat) -> Vec<u8> {
    let mut bytes = Cursor::new(Vec::new());
    match format {
        ImageFormat::Jpeg => image::DynamicImage::ImageRgba8(image.clone())
            .into_rgb8()
            .write_to(&mut bytes, format)
            .expect("Failed to encode JPEG"),
        _ => image.write_to(&mut bytes, format).expect("Failed to encode"),
    }
    bytes.into_inner()
}

fn screenshot(width: u32, height: u32) -> Vec<u8> {
    let image = RgbaImage::from_pixel(width, height, Rgba([30, 60, 200, 255]));
    encode(&image, ImageFormat::Png)
}

fn screenshot_only_config() -> DecorateConfig {
    let mut config = DecorateConfig::default();
    config
        .layout_mut()
        .set_layout_type(LayoutType::ScreenshotOnly);
    config
}

#[test]
fn test_screenshot_only_keeps_dimensions() {
    let input = screenshot(120, 260);
    let png = decorate(
        &Assets::new().with_screenshot(&input),
        &screenshot_only_config(),
    )
    .expect("Failed to decorate");

    let output = image::load_from_memory_with_format(&png, ImageFormat::Png)
        .expect("Output should be a PNG");
    assert_eq!((output.width(), output.height()), (120, 260));
}

#[test]
fn test_jpeg_screenshot_is_accepted() {
    let image = RgbaImage::from_pixel(64, 128, Rgba([200, 10, 10, 255]));
    let input = encode(&image, ImageFormat::Jpeg);

    let png = decorate(
        &Assets::new().with_screenshot(&input),
        &screenshot_only_config(),
    )
    .expect("Failed to decorate JPEG screenshot");

    let output = image::load_from_memory(&png).expect("Output should decode");
    assert_eq!((output.width(), output.height()), (64, 128));
}

#[test]
fn test_every_layout_renders() {
    let input = screenshot(200, 400);
    let background = encode(
        &RgbaImage::from_pixel(8, 8, Rgba([0, 200, 0, 255])),
        ImageFormat::Png,
    );

    for layout_type in LayoutType::ALL {
        let mut config = DecorateConfig::default();
        config.layout_mut().set_layout_type(layout_type);
        config
            .caption_mut()
            .set_caption_color(ColorType::LinearGradient {
                colors: vec![Color::RED, Color::BLACK],
                direction: Direction::ToRight,
            });

        let scribbler = Scribbler::new(config);
        let png = scribbler
            .decorate(
                &Assets::new()
                    .with_screenshot(&input)
                    .with_background_image(&background)
                    .with_caption("Plan your day"),
            )
            .unwrap_or_else(|err| panic!("{layout_type:?} failed: {err}"));

        let output = image::load_from_memory(&png).expect("Output should decode");
        assert_eq!((output.width(), output.height()), (200, 400));
    }
}

#[test]
fn test_missing_screenshot_is_error() {
    let result = decorate(&Assets::new().with_caption("Hello"), &DecorateConfig::default());
    assert!(matches!(
        result,
        Err(ScribblerError::MissingAsset("screenshot"))
    ));
}

#[test]
fn test_undecodable_screenshot_is_codec_error() {
    let result = decorate(
        &Assets::new().with_screenshot(b"definitely not an image"),
        &DecorateConfig::default(),
    );
    assert!(matches!(result, Err(ScribblerError::Codec(_))));
}

#[test]
fn test_undecodable_background_is_codec_error() {
    let input = screenshot(10, 10);
    let result = decorate(
        &Assets::new()
            .with_screenshot(&input)
            .with_background_image(&[0x89, 0x50, 0x4E, 0x47, 0x00]),
        &DecorateConfig::default(),
    );
    assert!(matches!(result, Err(ScribblerError::Codec(_))));
}
