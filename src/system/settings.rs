//! Device settings interface

use super::Unavailable;

/// The user's 12/24-hour clock preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockStyle {
    /// 12-hour clock with AM/PM suffix
    H12,
    /// 24-hour clock
    H24,
}

/// Device settings source, provided by the host.
///
/// Queried synchronously on each update that needs it; the face does
/// not cache the value across updates.
pub trait Settings {
    fn clock_style(&self) -> Result<ClockStyle, Unavailable>;
}
