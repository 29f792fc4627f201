//! UI definitions module

mod face;
mod format;
mod layout;
mod region;

pub use face::{LayoutPolicy, UpdateError, Watchface};
pub use format::{DateText, FormatError, TimeText};
pub use layout::{Layout, SCREEN_HEIGHT, SCREEN_WIDTH};
pub use region::TextRegion;

/// View lifecycle callbacks, invoked by the host run loop.
///
/// One callback is delivered at a time and each must run to completion
/// before the next is dispatched; implementations must not block.
pub trait WatchFace {
    /// Called once when the view becomes active.
    fn on_load(&mut self);

    /// Called when the view is torn down.
    fn on_unload(&mut self);

    /// Called on every whole-minute boundary.
    fn on_tick(&mut self);
}
