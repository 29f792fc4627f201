//! Text display region
//!
//! One rectangular screen area presenting one formatted string. The
//! region keeps the last string written to it until overwritten, so a
//! skipped update simply leaves the previous text on screen.

use embedded_graphics::{
    geometry::Point,
    mono_font::{MonoFont, MonoTextStyle},
    pixelcolor::Rgb565,
    prelude::*,
    primitives::Rectangle,
    text::{Alignment, Text},
};

use super::format::TEXT_LEN;

pub struct TextRegion {
    frame: Rectangle,
    font: &'static MonoFont<'static>,
    color: Rgb565,
    buf: [u8; TEXT_LEN],
    len: usize,
}

impl TextRegion {
    pub fn new(frame: Rectangle, font: &'static MonoFont<'static>, color: Rgb565) -> Self {
        Self {
            frame,
            font,
            color,
            buf: [0; TEXT_LEN],
            len: 0,
        }
    }

    /// Replace the displayed string. Input beyond the region's 8-byte
    /// capacity is truncated at a character boundary.
    pub fn set_text(&mut self, s: &str) {
        let mut len = s.len().min(TEXT_LEN);
        while !s.is_char_boundary(len) {
            len -= 1;
        }
        self.buf[..len].copy_from_slice(&s.as_bytes()[..len]);
        self.len = len;
    }

    /// The last string written to this region.
    pub fn text(&self) -> &str {
        // `set_text` truncates on a character boundary.
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }

    pub fn set_frame(&mut self, frame: Rectangle) {
        self.frame = frame;
    }

    pub fn frame(&self) -> Rectangle {
        self.frame
    }

    pub fn set_font(&mut self, font: &'static MonoFont<'static>) {
        self.font = font;
    }

    pub fn font(&self) -> &'static MonoFont<'static> {
        self.font
    }

    /// Draw the current string centered in the frame. The region
    /// background stays transparent so the backdrop shows through.
    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let style = MonoTextStyle::new(self.font, self.color);
        let origin = Point::new(
            self.frame.top_left.x + self.frame.size.width as i32 / 2,
            self.frame.top_left.y + self.font.baseline as i32,
        );
        Text::with_alignment(self.text(), origin, style, Alignment::Center).draw(target)?;
        Ok(())
    }
}
