//! A minimal watchface: background image plus time and date text,
//! refreshed once per minute.
//!
//! The host platform owns the window, the screen, and the tick source.
//! It drives the face through the [`ui::WatchFace`] callbacks and hands
//! it a [`embedded_graphics::draw_target::DrawTarget`] to render into.
//! The face reads the wall clock and the 12/24-hour preference through
//! the traits in [`system`].

#![cfg_attr(not(test), no_std)]

pub mod system;
pub mod ui;
