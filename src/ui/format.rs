//! Time and date text formatting
//!
//! Both strings are built in fixed 8-byte buffers with `format_no_std`;
//! nothing here allocates.

use core::fmt;

use crate::system::{clock::TimeSnapshot, settings::ClockStyle};

/// Capacity of one formatted string. `"11:59 PM"` and `"03/ 9/25"` both
/// fill it exactly.
pub const TEXT_LEN: usize = 8;

/// A calendar field was out of range for formatting.
///
/// Defensive only; a sane host clock never produces one. The previous
/// display is kept when it happens.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FormatError;

fn check_fields(t: &TimeSnapshot) -> Result<(), FormatError> {
    if t.hour > 23 || t.minute > 59 || !(1..=12).contains(&t.month) || !(1..=31).contains(&t.day) {
        return Err(FormatError);
    }
    Ok(())
}

/// Formatted time of day: `"HH:MM"` in 24-hour style, `"HH:MM AM"` or
/// `"HH:MM PM"` in 12-hour style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TimeText {
    buf: [u8; TEXT_LEN],
    len: usize,
}

impl TimeText {
    pub fn format(t: &TimeSnapshot, style: ClockStyle) -> Result<Self, FormatError> {
        check_fields(t)?;

        let mut buf = [0u8; TEXT_LEN];
        let len = match style {
            ClockStyle::H24 => {
                format_no_std::show(&mut buf, format_args!("{:02}:{:02}", t.hour, t.minute))
                    .map_err(|_| FormatError)?
                    .len()
            }
            ClockStyle::H12 => {
                // Hour 0 reads 12 AM, hour 12 reads 12 PM.
                let hour12 = match t.hour % 12 {
                    0 => 12,
                    h => h,
                };
                let suffix = if t.hour < 12 { "AM" } else { "PM" };
                format_no_std::show(
                    &mut buf,
                    format_args!("{:02}:{:02} {}", hour12, t.minute, suffix),
                )
                .map_err(|_| FormatError)?
                .len()
            }
        };
        Ok(Self { buf, len })
    }

    pub fn as_str(&self) -> &str {
        // Only ever holds the ASCII output of `format`.
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }
}

impl fmt::Display for TimeText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Formatted date: `"MM/DD/YY"` with a zero-padded month, two-digit
/// year, and a *space-padded* day-of-month (`"03/ 9/25"`), matching the
/// long-standing display format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateText {
    buf: [u8; TEXT_LEN],
    len: usize,
}

impl DateText {
    pub fn format(t: &TimeSnapshot) -> Result<Self, FormatError> {
        check_fields(t)?;

        let mut buf = [0u8; TEXT_LEN];
        let len = format_no_std::show(
            &mut buf,
            format_args!("{:02}/{:2}/{:02}", t.month, t.day, t.year.rem_euclid(100)),
        )
        .map_err(|_| FormatError)?
        .len();
        Ok(Self { buf, len })
    }

    pub fn as_str(&self) -> &str {
        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }
}

impl fmt::Display for DateText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u8, minute: u8) -> TimeSnapshot {
        TimeSnapshot {
            year: 2025,
            month: 3,
            day: 9,
            hour,
            minute,
        }
    }

    #[test]
    fn h24_is_zero_padded() {
        let text = TimeText::format(&at(7, 5), ClockStyle::H24).unwrap();
        assert_eq!(text.as_str(), "07:05");
    }

    #[test]
    fn h24_bounds() {
        assert_eq!(
            TimeText::format(&at(0, 0), ClockStyle::H24).unwrap().as_str(),
            "00:00"
        );
        assert_eq!(
            TimeText::format(&at(23, 59), ClockStyle::H24).unwrap().as_str(),
            "23:59"
        );
    }

    #[test]
    fn h12_midnight_is_12_am() {
        let text = TimeText::format(&at(0, 30), ClockStyle::H12).unwrap();
        assert_eq!(text.as_str(), "12:30 AM");
    }

    #[test]
    fn h12_noon_is_12_pm() {
        let text = TimeText::format(&at(12, 0), ClockStyle::H12).unwrap();
        assert_eq!(text.as_str(), "12:00 PM");
    }

    #[test]
    fn h12_afternoon_wraps_and_pads() {
        let text = TimeText::format(&at(13, 7), ClockStyle::H12).unwrap();
        assert_eq!(text.as_str(), "01:07 PM");
    }

    #[test]
    fn h12_last_minute_of_day() {
        let text = TimeText::format(&at(23, 59), ClockStyle::H12).unwrap();
        assert_eq!(text.as_str(), "11:59 PM");
    }

    #[test]
    fn date_day_is_space_padded() {
        let text = DateText::format(&at(12, 0)).unwrap();
        assert_eq!(text.as_str(), "03/ 9/25");
    }

    #[test]
    fn date_two_digit_day() {
        let t = TimeSnapshot {
            year: 2026,
            month: 11,
            day: 28,
            hour: 0,
            minute: 0,
        };
        assert_eq!(DateText::format(&t).unwrap().as_str(), "11/28/26");
    }

    #[test]
    fn date_ignores_clock_style() {
        // Same snapshot, both styles: the date never changes shape.
        let t = at(8, 15);
        let date = DateText::format(&t).unwrap();
        for style in [ClockStyle::H12, ClockStyle::H24] {
            let _ = TimeText::format(&t, style).unwrap();
            assert_eq!(DateText::format(&t).unwrap(), date);
        }
    }

    #[test]
    fn formatting_is_idempotent() {
        let t = at(19, 4);
        let a = TimeText::format(&t, ClockStyle::H12).unwrap();
        let b = TimeText::format(&t, ClockStyle::H12).unwrap();
        assert_eq!(a.as_str().as_bytes(), b.as_str().as_bytes());
    }

    #[test]
    fn out_of_range_fields_are_rejected() {
        let mut t = at(24, 0);
        assert_eq!(TimeText::format(&t, ClockStyle::H24), Err(FormatError));
        t = at(0, 60);
        assert_eq!(TimeText::format(&t, ClockStyle::H12), Err(FormatError));
        t = at(10, 0);
        t.month = 13;
        assert_eq!(DateText::format(&t), Err(FormatError));
        t.month = 0;
        assert_eq!(DateText::format(&t), Err(FormatError));
    }
}
