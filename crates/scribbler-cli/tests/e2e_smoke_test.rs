use std::{fs, path::Path};

use image::{ImageFormat, Rgba, RgbaImage};
use tempfile::tempdir;

use scribbler::ScribblerError;
use scribbler_cli::{Args, StyleArgs, run};

fn write_png(path: &Path, width: u32, height: u32, color: [u8; 4]) {
    RgbaImage::from_pixel(width, height, Rgba(color))
        .save_with_format(path, ImageFormat::Png)
        .expect("Failed to write PNG");
}

fn args(screenshot: &Path, output: &Path) -> Args {
    Args {
        screenshot: screenshot.to_string_lossy().to_string(),
        output: output.to_string_lossy().to_string(),
        background_image: None,
        caption: None,
        config: None,
        log_level: "off".to_string(),
        style: StyleArgs::default(),
    }
}

#[test]
fn e2e_smoke_test_decorates_screenshot() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let screenshot = temp_dir.path().join("screenshot.png");
    let background = temp_dir.path().join("background.png");
    let config = temp_dir.path().join("style.json");
    let output = temp_dir.path().join("decorated.png");

    write_png(&screenshot, 180, 320, [20, 40, 220, 255]);
    write_png(&background, 16, 16, [240, 200, 0, 255]);
    fs::write(
        &config,
        r##"{
            "layout": { "layoutType": "caption-before-screenshot" },
            "caption": { "captionColor": "linear-gradient(to-bottom, #000000, #FF0000)" }
        }"##,
    )
    .expect("Failed to write config");

    let mut args = args(&screenshot, &output);
    args.background_image = Some(background.to_string_lossy().to_string());
    args.caption = Some("Plan your day".to_string());
    args.config = Some(config.to_string_lossy().to_string());
    args.style.screenshot_border_size = Some(2.0);

    run(&args).expect("Failed to run");

    let decorated = image::open(&output).expect("Output should be a PNG");
    assert_eq!((decorated.width(), decorated.height()), (180, 320));
}

#[test]
fn e2e_smoke_test_missing_screenshot_file() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let output = temp_dir.path().join("decorated.png");

    let result = run(&args(&temp_dir.path().join("missing.png"), &output));

    assert!(matches!(result, Err(ScribblerError::Io(_))));
    assert!(!output.exists());
}

#[test]
fn e2e_smoke_test_unreadable_screenshot() {
    let temp_dir = tempdir().expect("Failed to create temp directory");
    let screenshot = temp_dir.path().join("screenshot.png");
    let output = temp_dir.path().join("decorated.png");
    fs::write(&screenshot, b"not an image").expect("Failed to write file");

    let result = run(&args(&screenshot, &output));

    assert!(matches!(result, Err(ScribblerError::Codec(_))));
    assert!(!output.exists());
}
