//! Certificate image rendering.
//!
//! Pure function from item fields to PNG bytes: an A4 canvas at 300 DPI,
//! white background, six bold black text lines at fixed coordinates. Output
//! is deterministic for identical inputs on the same rendering backend;
//! exact pixels are not stable across font engines, so tests assert
//! structure (dimensions, ink placement) rather than raw bytes.

use std::io::Cursor;

use ab_glyph::{Font, FontRef, PxScale, ScaleFont};
use image::{ImageFormat, Rgb, RgbImage};
use imageproc::drawing::draw_text_mut;
use thiserror::Error as ThisError;

use crate::db::models::ItemFields;

pub const CANVAS_WIDTH: u32 = 2480;
pub const CANVAS_HEIGHT: u32 = 3508;

const LEFT_MARGIN: i32 = 100;
// y coordinates are text baselines, as in canvas fillText
const FIRST_BASELINE_Y: i32 = 200;
const LINE_SPACING: i32 = 100;
const FONT_SIZE: f32 = 60.0;

static FONT_BYTES: &[u8] = include_bytes!("../assets/fonts/DejaVuSans-Bold.ttf");

#[derive(Debug, ThisError)]
pub enum RenderError {
    #[error("font error: {0}")]
    Font(#[from] ab_glyph::InvalidFont),

    #[error("PNG encode error: {0}")]
    Encode(#[from] image::ImageError),
}

/// Render the certificate for one item. Values are painted verbatim in the
/// fixed field order; overlength values overflow the canvas and that is
/// accepted, no wrapping or truncation.
pub fn render_certificate(fields: &ItemFields) -> Result<Vec<u8>, RenderError> {
    let font = FontRef::try_from_slice(FONT_BYTES)?;
    let scale = PxScale::from(FONT_SIZE);
    // draw_text_mut takes the glyph top, not the baseline
    let ascent = font.as_scaled(scale).ascent().ceil() as i32;

    let mut canvas = RgbImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, Rgb([255, 255, 255]));

    let lines = [
        format!("Name: {}", fields.name),
        format!("Age: {}", fields.age),
        format!("Salary: {}", fields.salary),
        format!("Gender: {}", fields.gender),
        format!("Profession: {}", fields.profession),
        format!("Jadagam: {}", fields.jadagam),
    ];
    for (i, line) in lines.iter().enumerate() {
        let baseline = FIRST_BASELINE_Y + i as i32 * LINE_SPACING;
        draw_text_mut(
            &mut canvas,
            Rgb([0, 0, 0]),
            LEFT_MARGIN,
            baseline - ascent,
            scale,
            &font,
            line,
        );
    }

    let mut buf = Cursor::new(Vec::new());
    canvas.write_to(&mut buf, ImageFormat::Png)?;
    Ok(buf.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_fields() -> ItemFields {
        ItemFields {
            name: "Asha".to_string(),
            age: 30,
            salary: 50000,
            gender: "F".to_string(),
            profession: "Engineer".to_string(),
            jadagam: "X".to_string(),
        }
    }

    fn band_has_ink(img: &image::RgbImage, y_top: i32) -> bool {
        let y_range = y_top as u32..(y_top as u32 + 80).min(CANVAS_HEIGHT);
        for y in y_range {
            for x in LEFT_MARGIN as u32..800 {
                if img.get_pixel(x, y).0 != [255, 255, 255] {
                    return true;
                }
            }
        }
        false
    }

    #[test]
    fn canvas_is_a4_at_300_dpi() {
        let png = render_certificate(&sample_fields()).unwrap();
        let img = image::load_from_memory(&png).unwrap().to_rgb8();
        assert_eq!(img.width(), CANVAS_WIDTH);
        assert_eq!(img.height(), CANVAS_HEIGHT);
    }

    #[test]
    fn background_is_white() {
        let png = render_certificate(&sample_fields()).unwrap();
        let img = image::load_from_memory(&png).unwrap().to_rgb8();
        for (x, y) in [(0, 0), (CANVAS_WIDTH - 1, 0), (0, CANVAS_HEIGHT - 1)] {
            assert_eq!(img.get_pixel(x, y).0, [255, 255, 255]);
        }
    }

    #[test]
    fn every_line_sits_on_its_baseline() {
        let png = render_certificate(&sample_fields()).unwrap();
        let img = image::load_from_memory(&png).unwrap().to_rgb8();
        for i in 0..6 {
            let baseline = FIRST_BASELINE_Y + i * LINE_SPACING;
            // ink belongs above the baseline, as with canvas fillText
            assert!(band_has_ink(&img, baseline - 80), "no ink above baseline {i}");
        }
        // nothing painted above the first line's ascent
        assert!(!band_has_ink(&img, 0));
    }

    #[test]
    fn output_is_deterministic_for_equal_inputs() {
        let fields = sample_fields();
        let a = render_certificate(&fields).unwrap();
        let b = render_certificate(&fields).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn overlength_values_render_without_error() {
        let mut fields = sample_fields();
        fields.profession = "x".repeat(500);
        let png = render_certificate(&fields).unwrap();
        assert!(!png.is_empty());
    }
}
