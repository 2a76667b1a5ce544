//! Minimal raster primitives for the diagnostic overlay.
//!
//! Everything clips against the frame, so callers can pass coordinates from
//! unvalidated detections. Text uses a built-in 5x7 bitmap font covering the
//! handful of characters the overlay emits; unknown characters render blank.

use crate::shared::frame::Frame;
use crate::shared::region::Region;

pub const GLYPH_W: usize = 5;
pub const GLYPH_H: usize = 7;

/// Horizontal advance per character, in glyph-space pixels.
const ADVANCE: usize = GLYPH_W + 1;

/// Set one pixel, silently dropping out-of-frame coordinates.
pub fn put_pixel(frame: &mut Frame, x: i32, y: i32, color: [u8; 3]) {
    if x < 0 || y < 0 || x >= frame.width() as i32 || y >= frame.height() as i32 {
        return;
    }
    let channels = frame.channels() as usize;
    let idx = frame.pixel_offset(x as u32, y as u32);
    let data = frame.data_mut();
    for (c, &v) in color.iter().enumerate().take(channels.min(3)) {
        data[idx + c] = v;
    }
}

/// Rectangle outline of the given stroke thickness, drawn inward.
pub fn rect_outline(frame: &mut Frame, region: Region, color: [u8; 3], thickness: i32) {
    for t in 0..thickness {
        let x0 = region.x + t;
        let y0 = region.y + t;
        let x1 = region.x + region.width - 1 - t;
        let y1 = region.y + region.height - 1 - t;
        if x0 > x1 || y0 > y1 {
            break;
        }
        for x in x0..=x1 {
            put_pixel(frame, x, y0, color);
            put_pixel(frame, x, y1, color);
        }
        for y in y0..=y1 {
            put_pixel(frame, x0, y, color);
            put_pixel(frame, x1, y, color);
        }
    }
}

/// Filled circle used for landmark markers.
pub fn filled_circle(frame: &mut Frame, cx: i32, cy: i32, radius: i32, color: [u8; 3]) {
    let r2 = radius * radius;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= r2 {
                put_pixel(frame, cx + dx, cy + dy, color);
            }
        }
    }
}

/// Draw text with its top-left corner at `(x, y)`, scaled up by `scale`.
pub fn text(frame: &mut Frame, x: i32, y: i32, s: &str, color: [u8; 3], scale: i32) {
    let scale = scale.max(1);
    for (i, ch) in s.chars().enumerate() {
        let rows = glyph(ch);
        let gx = x + (i * ADVANCE) as i32 * scale;
        for (row, bits) in rows.iter().enumerate() {
            for col in 0..GLYPH_W {
                if bits & (1 << (GLYPH_W - 1 - col)) != 0 {
                    for sy in 0..scale {
                        for sx in 0..scale {
                            put_pixel(
                                frame,
                                gx + col as i32 * scale + sx,
                                y + row as i32 * scale + sy,
                                color,
                            );
                        }
                    }
                }
            }
        }
    }
}

/// 5x7 glyph rows, one byte per row, low 5 bits used, MSB side is the left
/// column. Covers the overlay's character set; anything else is blank.
fn glyph(ch: char) -> [u8; GLYPH_H] {
    match ch {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'a' => [0b00000, 0b00000, 0b01110, 0b00001, 0b01111, 0b10001, 0b01111],
        'b' => [0b10000, 0b10000, 0b11110, 0b10001, 0b10001, 0b10001, 0b11110],
        'd' => [0b00001, 0b00001, 0b01111, 0b10001, 0b10001, 0b10001, 0b01111],
        'e' => [0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110],
        'i' => [0b00100, 0b00000, 0b01100, 0b00100, 0b00100, 0b00100, 0b01110],
        'k' => [0b10000, 0b10000, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010],
        'l' => [0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'm' => [0b00000, 0b00000, 0b11010, 0b10101, 0b10101, 0b10101, 0b10101],
        'o' => [0b00000, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110],
        'p' => [0b00000, 0b00000, 0b11110, 0b10001, 0b11110, 0b10000, 0b10000],
        'r' => [0b00000, 0b00000, 0b10110, 0b11001, 0b10000, 0b10000, 0b10000],
        's' => [0b00000, 0b00000, 0b01111, 0b10000, 0b01110, 0b00001, 0b11110],
        'u' => [0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b10011, 0b01101],
        'x' => [0b00000, 0b00000, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001],
        'z' => [0b00000, 0b00000, 0b11111, 0b00010, 0b00100, 0b01000, 0b11111],
        ':' => [0b00000, 0b00100, 0b00100, 0b00000, 0b00100, 0b00100, 0b00000],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        _ => [0; GLYPH_H],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(frame: &Frame, x: u32, y: u32) -> [u8; 3] {
        let idx = frame.pixel_offset(x, y);
        [frame.data()[idx], frame.data()[idx + 1], frame.data()[idx + 2]]
    }

    #[test]
    fn test_put_pixel_clips() {
        let mut frame = Frame::filled(10, 10, 3, 0);
        put_pixel(&mut frame, -1, 5, [255, 0, 0]);
        put_pixel(&mut frame, 5, 10, [255, 0, 0]);
        assert!(frame.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_rect_outline_draws_border_not_interior() {
        let mut frame = Frame::filled(20, 20, 3, 0);
        rect_outline(&mut frame, Region::new(5, 5, 10, 10), [0, 255, 0], 1);
        assert_eq!(pixel(&frame, 5, 5), [0, 255, 0]);
        assert_eq!(pixel(&frame, 14, 14), [0, 255, 0]);
        assert_eq!(pixel(&frame, 10, 5), [0, 255, 0]);
        assert_eq!(pixel(&frame, 10, 10), [0, 0, 0], "interior stays empty");
    }

    #[test]
    fn test_rect_outline_thickness() {
        let mut frame = Frame::filled(20, 20, 3, 0);
        rect_outline(&mut frame, Region::new(5, 5, 10, 10), [0, 255, 0], 2);
        assert_eq!(pixel(&frame, 6, 6), [0, 255, 0]);
        assert_eq!(pixel(&frame, 7, 7), [0, 0, 0]);
    }

    #[test]
    fn test_rect_outline_clips_offscreen_region() {
        let mut frame = Frame::filled(20, 20, 3, 0);
        // Region hangs off the top-left; drawing must not panic and must
        // set the visible part only.
        rect_outline(&mut frame, Region::new(-5, -5, 10, 10), [0, 255, 0], 1);
        assert_eq!(pixel(&frame, 4, 0), [0, 255, 0]);
        assert_eq!(pixel(&frame, 4, 4), [0, 255, 0]);
    }

    #[test]
    fn test_filled_circle() {
        let mut frame = Frame::filled(20, 20, 3, 0);
        filled_circle(&mut frame, 10, 10, 2, [255, 0, 255]);
        assert_eq!(pixel(&frame, 10, 10), [255, 0, 255]);
        assert_eq!(pixel(&frame, 12, 10), [255, 0, 255]);
        assert_eq!(pixel(&frame, 13, 10), [0, 0, 0]);
    }

    #[test]
    fn test_text_marks_pixels() {
        let mut frame = Frame::filled(100, 20, 3, 0);
        text(&mut frame, 2, 2, "Mode: blur", [0, 255, 0], 1);
        assert!(
            frame.data().iter().any(|&v| v == 255),
            "text must render at least one pixel"
        );
    }

    #[test]
    fn test_text_unknown_chars_render_blank() {
        let mut frame = Frame::filled(100, 20, 3, 0);
        text(&mut frame, 2, 2, "@@@", [0, 255, 0], 1);
        assert!(frame.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_text_scale_doubles_footprint() {
        let mut small = Frame::filled(100, 40, 3, 0);
        let mut big = Frame::filled(100, 40, 3, 0);
        text(&mut small, 0, 0, "1", [255, 255, 255], 1);
        text(&mut big, 0, 0, "1", [255, 255, 255], 2);
        let lit = |f: &Frame| f.data().iter().filter(|&&v| v > 0).count();
        assert_eq!(lit(&big), lit(&small) * 4);
    }
}
