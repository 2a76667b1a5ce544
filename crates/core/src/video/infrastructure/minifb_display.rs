use minifb::{Key, KeyRepeat, Window, WindowOptions};

use crate::shared::frame::Frame;
use crate::video::domain::display_sink::DisplaySink;

/// Shows frames in a minifb window and reports operator key presses.
///
/// The window is created lazily on the first presented frame, once the
/// stream dimensions are known. minifb wants 0RGB u32 pixels, so each
/// RGB24 frame is repacked into a reusable buffer before display.
pub struct MinifbDisplay {
    title: String,
    window: Option<Window>,
    buffer: Vec<u32>,
    closed: bool,
}

impl MinifbDisplay {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            window: None,
            buffer: Vec::new(),
            closed: false,
        }
    }

    fn ensure_window(&mut self, width: usize, height: usize) -> Result<(), minifb::Error> {
        if self.window.is_none() {
            let window = Window::new(&self.title, width, height, WindowOptions::default())?;
            log::info!("opened display window {width}x{height}");
            self.window = Some(window);
        }
        Ok(())
    }
}

impl DisplaySink for MinifbDisplay {
    fn present(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
        if self.closed {
            return Ok(());
        }

        let width = frame.width() as usize;
        let height = frame.height() as usize;
        self.ensure_window(width, height)?;

        self.buffer.clear();
        self.buffer.reserve(width * height);
        for px in frame.data().chunks_exact(frame.channels() as usize) {
            let (r, g, b) = (px[0] as u32, px[1] as u32, px[2] as u32);
            self.buffer.push((r << 16) | (g << 8) | b);
        }

        let window = self.window.as_mut().ok_or("display closed")?;
        window.update_with_buffer(&self.buffer, width, height)?;
        Ok(())
    }

    fn poll_key(&mut self) -> Option<char> {
        let window = self.window.as_mut()?;
        window
            .get_keys_pressed(KeyRepeat::No)
            .into_iter()
            .find_map(key_to_char)
    }

    fn is_open(&self) -> bool {
        if self.closed {
            return false;
        }
        // Before the first frame arrives there is no window yet; the
        // display counts as open until the operator closes it.
        self.window.as_ref().map_or(true, |w| w.is_open())
    }

    fn close(&mut self) {
        self.window = None;
        self.closed = true;
    }
}

fn key_to_char(key: Key) -> Option<char> {
    match key {
        Key::Key1 => Some('1'),
        Key::Key2 => Some('2'),
        Key::Key3 => Some('3'),
        Key::LeftBracket => Some('['),
        Key::RightBracket => Some(']'),
        Key::U => Some('u'),
        Key::Q => Some('q'),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping_covers_control_keys() {
        assert_eq!(key_to_char(Key::Key1), Some('1'));
        assert_eq!(key_to_char(Key::Key2), Some('2'));
        assert_eq!(key_to_char(Key::Key3), Some('3'));
        assert_eq!(key_to_char(Key::LeftBracket), Some('['));
        assert_eq!(key_to_char(Key::RightBracket), Some(']'));
        assert_eq!(key_to_char(Key::U), Some('u'));
        assert_eq!(key_to_char(Key::Q), Some('q'));
    }

    #[test]
    fn test_unmapped_keys_are_ignored() {
        assert_eq!(key_to_char(Key::A), None);
        assert_eq!(key_to_char(Key::Escape), None);
        assert_eq!(key_to_char(Key::Space), None);
    }

    #[test]
    fn test_display_is_open_before_first_frame() {
        let display = MinifbDisplay::new("test");
        assert!(display.is_open());
    }

    #[test]
    fn test_closed_display_reports_not_open() {
        let mut display = MinifbDisplay::new("test");
        display.close();
        display.close();
        assert!(!display.is_open());
    }
}
