//! Watchface layout
//!
//! A static two-way branch on the clock style, not a layout engine. In
//! 24-hour style both regions sit 5 px lower and the time uses the
//! large numeric font; in 12-hour style the extra AM/PM suffix gets the
//! narrower bold font.

use embedded_graphics::{
    geometry::{Point, Size},
    mono_font::MonoFont,
    primitives::Rectangle,
};
use profont::{PROFONT_14_POINT, PROFONT_18_POINT, PROFONT_24_POINT};

use crate::system::settings::ClockStyle;

pub const SCREEN_WIDTH: u32 = 144;
pub const SCREEN_HEIGHT: u32 = 168;

/// Frames and fonts for the two text regions.
#[derive(Clone, Copy)]
pub struct Layout {
    pub time_frame: Rectangle,
    pub date_frame: Rectangle,
    pub time_font: &'static MonoFont<'static>,
    pub date_font: &'static MonoFont<'static>,
}

impl Layout {
    pub fn for_style(style: ClockStyle) -> Self {
        match style {
            ClockStyle::H12 => Self {
                time_frame: region_frame(65),
                date_frame: region_frame(95),
                time_font: &PROFONT_18_POINT,
                date_font: &PROFONT_14_POINT,
            },
            ClockStyle::H24 => Self {
                time_frame: region_frame(70),
                date_frame: region_frame(100),
                time_font: &PROFONT_24_POINT,
                date_font: &PROFONT_14_POINT,
            },
        }
    }
}

fn region_frame(y: i32) -> Rectangle {
    Rectangle::new(Point::new(0, y), Size::new(SCREEN_WIDTH, 50))
}
