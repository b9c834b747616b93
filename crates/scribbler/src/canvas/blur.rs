//! Approximate Gaussian blur of a coverage mask.
//!
//! Three successive box blurs along each axis converge to a Gaussian
//! closely enough for soft drop shadows.

use tiny_skia::Mask;

const PASSES: usize = 3;

/// Blurs `mask` in place so that a hard edge fades out over roughly
/// `blur` pixels.
pub(super) fn blur_mask(mask: &mut Mask, blur: f32) {
    let radius = (blur / 2.0).round();
    if radius < 1.0 {
        return;
    }
    let radius = radius as usize;

    let width = mask.width() as usize;
    let height = mask.height() as usize;
    let data = mask.data_mut();

    let mut line = Vec::with_capacity(width.max(height));
    let mut scratch = Vec::with_capacity(width.max(height));

    for row in 0..height {
        line.clear();
        line.extend_from_slice(&data[row * width..(row + 1) * width]);
        for _ in 0..PASSES {
            box_blur_line(&line, &mut scratch, radius);
            std::mem::swap(&mut line, &mut scratch);
        }
        data[row * width..(row + 1) * width].copy_from_slice(&line);
    }

    for column in 0..width {
        line.clear();
        line.extend((0..height).map(|row| data[row * width + column]));
        for _ in 0..PASSES {
            box_blur_line(&line, &mut scratch, radius);
            std::mem::swap(&mut line, &mut scratch);
        }
        for (row, value) in line.iter().enumerate() {
            data[row * width + column] = *value;
        }
    }
}

/// Averages every value with its `radius` neighbors on both sides, treating
/// samples outside the line as zero.
fn box_blur_line(input: &[u8], output: &mut Vec<u8>, radius: usize) {
    let len = input.len();
    let window = (2 * radius + 1) as u32;

    output.clear();
    output.reserve(len);

    // Running sum over input[i - radius ..= i + radius].
    let mut sum: u32 = input.iter().take(radius + 1).map(|v| u32::from(*v)).sum();
    for i in 0..len {
        output.push(((sum + window / 2) / window) as u8);

        if let Some(entering) = input.get(i + radius + 1) {
            sum += u32::from(*entering);
        }
        if i >= radius {
            sum -= u32::from(input[i - radius]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_blur_line_spreads_energy() {
        let input = [0, 0, 0, 255, 0, 0, 0];
        let mut output = Vec::new();
        box_blur_line(&input, &mut output, 1);
        assert_eq!(output, vec![0, 0, 85, 85, 85, 0, 0]);
    }

    #[test]
    fn test_box_blur_line_keeps_flat_interior() {
        let input = [200u8; 9];
        let mut output = Vec::new();
        box_blur_line(&input, &mut output, 2);
        assert_eq!(output[4], 200);
        // Edges fade because outside samples count as zero.
        assert!(output[0] < 200);
    }

    #[test]
    fn test_blur_mask_softens_edge() {
        let mut mask = Mask::new(20, 20).unwrap();
        for row in 0..20 {
            for column in 0..10 {
                mask.data_mut()[row * 20 + column] = 255;
            }
        }

        blur_mask(&mut mask, 4.0);

        let data = mask.data();
        let edge_inside = data[10 * 20 + 9];
        let edge_outside = data[10 * 20 + 10];
        assert!(edge_inside < 255);
        assert!(edge_outside > 0);
        assert!(edge_inside > edge_outside);
    }

    #[test]
    fn test_blur_mask_small_blur_is_noop() {
        let mut mask = Mask::new(4, 4).unwrap();
        mask.data_mut()[5] = 255;
        blur_mask(&mut mask, 0.5);
        assert_eq!(mask.data()[5], 255);
    }
}
