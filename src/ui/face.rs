//! Watchface view controller
//!
//! Owns the two text regions and the optional background bitmap for
//! the lifetime of the view; the host drives it through the
//! [`WatchFace`] callbacks. All state lives in this struct, nothing is
//! process-global.

use embedded_graphics::{image::Image, pixelcolor::Rgb565, prelude::*};
use tinybmp::Bmp;

use super::{
    format::{DateText, FormatError, TimeText},
    layout::Layout,
    region::TextRegion,
    WatchFace,
};
use crate::system::{
    clock::Clock,
    settings::{ClockStyle, Settings},
    Unavailable,
};

const BACKGROUND_COLOR: Rgb565 = Rgb565::WHITE;
const TEXT_COLOR: Rgb565 = Rgb565::BLACK;

/// When a 12/24-hour preference change moves the layout.
///
/// The preference itself is re-read on every update and always drives
/// the string format. The historical behavior positions the regions
/// once at load time; `EveryTick` also moves them when the preference
/// changes while the face is on screen. Surfaced as configuration
/// because neither is obviously right for every host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LayoutPolicy {
    #[default]
    LoadOnly,
    EveryTick,
}

/// One update was skipped; the previous display is retained.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UpdateError {
    /// The clock or settings source produced no value.
    UnavailableInput,
    /// A calendar field was out of range.
    FormatError,
}

impl From<Unavailable> for UpdateError {
    fn from(_: Unavailable) -> Self {
        UpdateError::UnavailableInput
    }
}

impl From<FormatError> for UpdateError {
    fn from(_: FormatError) -> Self {
        UpdateError::FormatError
    }
}

/// The watchface: background image plus time and date text.
pub struct Watchface<C, S> {
    clock: C,
    settings: S,
    policy: LayoutPolicy,
    style: ClockStyle,
    layout: Layout,
    time_region: TextRegion,
    date_region: TextRegion,
    background_bytes: Option<&'static [u8]>,
    background: Option<Bmp<'static, Rgb565>>,
}

impl<C, S> Watchface<C, S>
where
    C: Clock,
    S: Settings,
{
    pub fn new(clock: C, settings: S) -> Self {
        let style = ClockStyle::H24;
        let layout = Layout::for_style(style);
        Self {
            clock,
            settings,
            policy: LayoutPolicy::default(),
            style,
            layout,
            time_region: TextRegion::new(layout.time_frame, layout.time_font, TEXT_COLOR),
            date_region: TextRegion::new(layout.date_frame, layout.date_font, TEXT_COLOR),
            background_bytes: None,
            background: None,
        }
    }

    pub fn with_layout_policy(mut self, policy: LayoutPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Use a BMP image as the backdrop. Decoded at load time; an
    /// undecodable image degrades to the plain background color.
    pub fn with_background(mut self, bmp_data: &'static [u8]) -> Self {
        self.background_bytes = Some(bmp_data);
        self
    }

    pub fn style(&self) -> ClockStyle {
        self.style
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn time_region(&self) -> &TextRegion {
        &self.time_region
    }

    pub fn date_region(&self) -> &TextRegion {
        &self.date_region
    }

    /// Run one display update: capture the time, format both strings,
    /// hand them to the regions. Skipped updates leave the previous
    /// strings in place.
    pub fn update(&mut self) -> Result<(), UpdateError> {
        match self.try_update() {
            Ok(()) => Ok(()),
            Err(err) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("update skipped, keeping previous display: {}", err);
                Err(err)
            }
        }
    }

    fn try_update(&mut self) -> Result<(), UpdateError> {
        let snapshot = self.clock.now()?;

        // The preference is read fresh on every update, never cached;
        // the policy only decides whether the layout moves with it
        // while the face is on screen.
        let style = self.settings.clock_style()?;
        if style != self.style {
            self.style = style;
            if self.policy == LayoutPolicy::EveryTick {
                self.apply_layout();
            }
        }

        // Format both strings before touching either region so a
        // failure never leaves the display half-written.
        let time = TimeText::format(&snapshot, self.style)?;
        let date = DateText::format(&snapshot)?;

        self.time_region.set_text(time.as_str());
        self.date_region.set_text(date.as_str());
        Ok(())
    }

    /// Render the face onto the host's draw target.
    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        target.clear(BACKGROUND_COLOR)?;
        if let Some(bmp) = &self.background {
            Image::new(bmp, Point::zero()).draw(target)?;
        }
        self.time_region.draw(target)?;
        self.date_region.draw(target)?;
        Ok(())
    }

    fn apply_layout(&mut self) {
        self.layout = Layout::for_style(self.style);
        self.time_region.set_frame(self.layout.time_frame);
        self.time_region.set_font(self.layout.time_font);
        self.date_region.set_frame(self.layout.date_frame);
        self.date_region.set_font(self.layout.date_font);
    }
}

impl<C, S> WatchFace for Watchface<C, S>
where
    C: Clock,
    S: Settings,
{
    fn on_load(&mut self) {
        match self.settings.clock_style() {
            Ok(style) => self.style = style,
            // Keep the built-in default style.
            Err(Unavailable) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("clock style unavailable, using {}", self.style);
            }
        }
        self.apply_layout();

        // Seed the regions so something sensible shows before the
        // first successful update.
        self.time_region.set_text(match self.style {
            ClockStyle::H24 => "  :  ",
            ClockStyle::H12 => "  :    ",
        });
        self.date_region.set_text("  /  /  ");

        self.background = self.background_bytes.and_then(|bytes| {
            match Bmp::from_slice(bytes) {
                Ok(bmp) => Some(bmp),
                Err(_) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("background image undecodable, using plain backdrop");
                    None
                }
            }
        });

        // Show the time from the start instead of waiting for the
        // first minute boundary.
        let _ = self.update();
    }

    fn on_unload(&mut self) {
        self.background = None;
    }

    fn on_tick(&mut self) {
        let _ = self.update();
    }
}
