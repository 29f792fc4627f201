//! Desktop host for the watchface.
//!
//! Plays the role the watch firmware would: it owns the window, feeds
//! the face the local wall clock and a 12/24-hour preference, and fires
//! the tick on every whole-minute boundary. Press space to toggle the
//! clock style (takes effect because the face runs with
//! `LayoutPolicy::EveryTick` here).

use std::{cell::Cell, convert::Infallible, rc::Rc, thread, time::Duration};

use chrono::{Local, Timelike};
use embedded_graphics::{pixelcolor::Rgb565, prelude::*};
use embedded_graphics_simulator::{
    sdl2::Keycode, OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window,
};
use minuteface::{
    system::{
        clock::{Clock, TimeSnapshot},
        settings::{ClockStyle, Settings},
        Unavailable,
    },
    ui::{LayoutPolicy, WatchFace, Watchface, SCREEN_HEIGHT, SCREEN_WIDTH},
};

const BACKGROUND_BMP: &[u8] = include_bytes!("../../assets/background.bmp");

struct LocalClock;

impl Clock for LocalClock {
    fn now(&self) -> Result<TimeSnapshot, Unavailable> {
        Ok(TimeSnapshot::from(Local::now().naive_local()))
    }
}

/// Stand-in for the device settings store, shared with the event loop
/// so a key press can flip the preference.
#[derive(Clone)]
struct SharedSettings(Rc<Cell<ClockStyle>>);

impl SharedSettings {
    fn toggle(&self) {
        self.0.set(match self.0.get() {
            ClockStyle::H12 => ClockStyle::H24,
            ClockStyle::H24 => ClockStyle::H12,
        });
    }
}

impl Settings for SharedSettings {
    fn clock_style(&self) -> Result<ClockStyle, Unavailable> {
        Ok(self.0.get())
    }
}

fn main() -> Result<(), Infallible> {
    let mut display =
        SimulatorDisplay::<Rgb565>::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    let mut window = Window::new("minuteface", &output_settings);

    let settings = SharedSettings(Rc::new(Cell::new(ClockStyle::H24)));
    let mut face = Watchface::new(LocalClock, settings.clone())
        .with_layout_policy(LayoutPolicy::EveryTick)
        .with_background(BACKGROUND_BMP);

    face.on_load();
    face.draw(&mut display)?;

    let mut last_minute = Local::now().minute();
    'running: loop {
        window.update(&display);

        for event in window.events() {
            match event {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::KeyDown {
                    keycode: Keycode::Space,
                    ..
                } => {
                    settings.toggle();
                    face.on_tick();
                    face.draw(&mut display)?;
                }
                _ => {}
            }
        }

        // Minute-boundary scheduler: redraw only when the wall-clock
        // minute changes.
        let minute = Local::now().minute();
        if minute != last_minute {
            last_minute = minute;
            face.on_tick();
            face.draw(&mut display)?;
        }

        thread::sleep(Duration::from_millis(50));
    }

    face.on_unload();
    Ok(())
}
