//! Wall clock → four digit slots and a date line.
//!
//! Hours and minutes are formatted as two-character decimal text first and
//! then decoded byte by byte, so anything that is not an ASCII digit simply
//! becomes [`Digit::Absent`] instead of an error.
//!
//! # Leading zero
//!
//! Stripping the hour's leading zero replaces the tens slot with
//! [`Digit::Absent`]. Its zero width collapses the gap on its own; the layout
//! does not special-case single-digit hours.

use core::fmt::Write;

use chrono::{Datelike, Timelike};
use heapless::String;

use crate::glyphs::Digit;
use crate::locale::Locale;

/// Capacity of the date line (weekday + day + month, with room for
/// multi-byte abbreviations such as "Mié").
pub const DATE_TEXT_LEN: usize = 16;

/// Rendered date line.
pub type DateText = String<DATE_TEXT_LEN>;

// =============================================================================
// Options
// =============================================================================

/// How the date line is assembled.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DateStyle {
    /// Locale tables and field order, unpadded day number.
    #[default]
    Localized,
    /// Day first whatever the locale, zero-padded day (`"Thu 07 Mar"`).
    PaddedDayFirst,
}

/// Inputs that shape one decomposition besides the time itself.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ClockOptions {
    /// Host preference: 24-hour (`%H`) or 12-hour (`%I`) clock.
    pub use_24h: bool,
    pub locale: Locale,
    pub strip_leading_hour_zero: bool,
    pub date_style: DateStyle,
}

impl Default for ClockOptions {
    fn default() -> Self {
        Self {
            use_24h: true,
            locale: Locale::En,
            strip_leading_hour_zero: false,
            date_style: DateStyle::Localized,
        }
    }
}

// =============================================================================
// Output
// =============================================================================

/// The four independently placed digit slots.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockDigits {
    pub hour_tens: Digit,
    pub hour_units: Digit,
    pub minute_tens: Digit,
    pub minute_units: Digit,
}

impl ClockDigits {
    /// "00:00", shown before the first tick.
    pub const MIDNIGHT: Self = Self {
        hour_tens: Digit::Value(0),
        hour_units: Digit::Value(0),
        minute_tens: Digit::Value(0),
        minute_units: Digit::Value(0),
    };

    /// Slots in display order: hour tens, hour units, minute tens, minute units.
    #[inline]
    pub const fn as_array(&self) -> [Digit; 4] { [self.hour_tens, self.hour_units, self.minute_tens, self.minute_units] }
}

/// Digits and date line for one render cycle.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ClockReading {
    pub digits: ClockDigits,
    pub date: DateText,
}

// =============================================================================
// Decomposition
// =============================================================================

/// Split a clock field into two slots via its `%02` text form.
fn split_field(value: u32) -> [Digit; 2] {
    let mut text: String<4> = String::new();
    let _ = write!(text, "{value:02}");
    let bytes = text.as_bytes();
    [
        bytes.first().map_or(Digit::Absent, |b| Digit::from_ascii(*b)),
        bytes.get(1).map_or(Digit::Absent, |b| Digit::from_ascii(*b)),
    ]
}

/// Hour and minute slots for a time of day.
pub fn decompose_time<T: Timelike>(
    now: &T,
    use_24h: bool,
    strip_leading_hour_zero: bool,
) -> ClockDigits {
    let hour = if use_24h { now.hour() } else { now.hour12().1 };
    let [mut hour_tens, hour_units] = split_field(hour);
    if strip_leading_hour_zero && hour_tens == Digit::Value(0) {
        hour_tens = Digit::Absent;
    }
    let [minute_tens, minute_units] = split_field(now.minute());

    ClockDigits {
        hour_tens,
        hour_units,
        minute_tens,
        minute_units,
    }
}

/// Date line for a calendar day.
pub fn format_date<T: Datelike>(
    today: &T,
    locale: Locale,
    style: DateStyle,
) -> DateText {
    let mut date = DateText::new();
    let weekday = today.weekday().num_days_from_sunday();
    let month0 = today.month0();
    let day = today.day();

    let _ = match style {
        DateStyle::PaddedDayFirst => write!(date, "{} {:02} {}", locale.weekday(weekday), day, locale.month(month0)),
        DateStyle::Localized if locale.month_before_day() => {
            write!(date, "{} {} {}", locale.weekday(weekday), locale.month(month0), day)
        }
        DateStyle::Localized => write!(date, "{} {} {}", locale.weekday(weekday), day, locale.month(month0)),
    };
    date
}

/// Full decomposition for one render cycle.
pub fn decompose<T: Timelike + Datelike>(
    now: &T,
    options: &ClockOptions,
) -> ClockReading {
    ClockReading {
        digits: decompose_time(now, options.use_24h, options.strip_leading_hour_zero),
        date: format_date(now, options.locale, options.date_style),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
