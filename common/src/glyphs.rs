//! Digit glyph metrics: widths and bitmap resource handles.
//!
//! Each face ships one glyph family in two weights. Both weights of a family
//! share the same per-digit widths (the bold and regular bitmaps are cut to
//! the same advance), so width only depends on the family and the digit.
//!
//! Lookups never fail: an [`Digit::Absent`] slot has zero width and maps to
//! [`GlyphId::BLANK`].

// =============================================================================
// Digit
// =============================================================================

/// One decimal digit slot of the clock, or nothing.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Digit {
    /// Suppressed or undefined slot (zero width, blank glyph).
    #[default]
    Absent,
    /// A value in `0..=9`.
    Value(u8),
}

impl Digit {
    /// All ten digits followed by [`Digit::Absent`].
    pub const ALL: [Self; 11] = [
        Self::Value(0),
        Self::Value(1),
        Self::Value(2),
        Self::Value(3),
        Self::Value(4),
        Self::Value(5),
        Self::Value(6),
        Self::Value(7),
        Self::Value(8),
        Self::Value(9),
        Self::Absent,
    ];

    /// Anything outside `0..=9` becomes [`Digit::Absent`].
    pub const fn new(value: i32) -> Self {
        if value >= 0 && value <= 9 { Self::Value(value as u8) } else { Self::Absent }
    }

    /// Decode an ASCII byte (`b'0'..=b'9'`).
    pub const fn from_ascii(byte: u8) -> Self {
        if byte.is_ascii_digit() { Self::Value(byte - b'0') } else { Self::Absent }
    }

    /// Character to render for this slot, if any.
    pub const fn as_char(self) -> Option<char> {
        match self {
            Self::Value(v) if v <= 9 => Some((b'0' + v) as char),
            _ => None,
        }
    }

    /// Table index, rejecting `Value`s that were built by hand out of range.
    #[inline]
    const fn index(self) -> Option<usize> {
        match self {
            Self::Value(v) if v <= 9 => Some(v as usize),
            _ => None,
        }
    }
}

// =============================================================================
// Glyph Style
// =============================================================================

/// Glyph weight, selectable independently for hours and minutes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GlyphStyle {
    #[default]
    Regular,
    Bold,
}

impl GlyphStyle {
    /// `true` → bold.
    #[inline]
    pub const fn from_bold(bold: bool) -> Self { if bold { Self::Bold } else { Self::Regular } }

    #[inline]
    pub const fn is_bold(self) -> bool { matches!(self, Self::Bold) }
}

// =============================================================================
// Glyph Resource Handles
// =============================================================================

/// Opaque bitmap resource handle passed to the host.
///
/// Layout of the id space: `0` blank, `1..=10` regular digits, `11..=20` bold
/// digits, `21` the disconnection warning.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GlyphId(u16);

const REGULAR_BASE: u16 = 1;
const BOLD_BASE: u16 = 11;

impl GlyphId {
    /// Transparent bitmap used for absent digits.
    pub const BLANK: Self = Self(0);

    /// Disconnection warning bitmap.
    pub const WARNING: Self = Self(21);

    /// Decode a digit handle back into its digit and weight.
    pub const fn digit(self) -> Option<(u8, GlyphStyle)> {
        match self.0 {
            n @ REGULAR_BASE..BOLD_BASE => Some(((n - REGULAR_BASE) as u8, GlyphStyle::Regular)),
            n @ BOLD_BASE..21 => Some(((n - BOLD_BASE) as u8, GlyphStyle::Bold)),
            _ => None,
        }
    }
}

/// Resource handle for a digit in the given weight.
pub const fn glyph_id_of(
    digit: Digit,
    style: GlyphStyle,
) -> GlyphId {
    match digit.index() {
        Some(idx) => match style {
            GlyphStyle::Regular => GlyphId(REGULAR_BASE + idx as u16),
            GlyphStyle::Bold => GlyphId(BOLD_BASE + idx as u16),
        },
        None => GlyphId::BLANK,
    }
}

// =============================================================================
// Glyph Families
// =============================================================================

/// Per-digit advance widths of one glyph family (both weights).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct GlyphFamily {
    widths: [u32; 10],
}

/// Widest digit of the compact family (`0`).
pub const COMPACT_MAX_WIDTH: u32 = 31;

/// Widest digit of the wide family (`0`).
pub const WIDE_MAX_WIDTH: u32 = 35;

impl GlyphFamily {
    /// Narrow digits used with reserved inter-group padding.
    pub const COMPACT: Self = Self {
        widths: [COMPACT_MAX_WIDTH, 11, 29, 26, 29, 28, 29, 29, 29, 29],
    };

    /// Larger digits that abut with no padding.
    pub const WIDE: Self = Self {
        widths: [WIDE_MAX_WIDTH, 15, 33, 30, 33, 32, 33, 33, 33, 33],
    };

    /// Advance width of a digit; zero for absent or out-of-range slots.
    #[inline]
    pub const fn width_of(
        &self,
        digit: Digit,
    ) -> u32 {
        match digit.index() {
            Some(idx) => self.widths[idx],
            None => 0,
        }
    }

    /// Widest digit in the family.
    pub const fn max_width(&self) -> u32 {
        let mut max = 0;
        let mut i = 0;
        while i < 10 {
            if self.widths[i] > max {
                max = self.widths[i];
            }
            i += 1;
        }
        max
    }
}

const _: () = assert!(GlyphFamily::COMPACT.max_width() == COMPACT_MAX_WIDTH);
const _: () = assert!(GlyphFamily::WIDE.max_width() == WIDE_MAX_WIDTH);

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_every_digit_has_width() {
        for family in [GlyphFamily::COMPACT, GlyphFamily::WIDE] {
            for d in 0..=9 {
                assert!(family.width_of(Digit::new(d)) > 0, "digit {d} has zero width");
            }
        }
    }

    #[test]
    fn test_absent_and_out_of_range_are_blank() {
        for raw in [-1, 10, 42, i32::MIN, i32::MAX] {
            let digit = Digit::new(raw);
            assert_eq!(digit, Digit::Absent);
            assert_eq!(GlyphFamily::COMPACT.width_of(digit), 0);
            assert_eq!(glyph_id_of(digit, GlyphStyle::Bold), GlyphId::BLANK);
        }
        // Hand-built out-of-range value must not index past the table
        assert_eq!(GlyphFamily::WIDE.width_of(Digit::Value(12)), 0);
        assert_eq!(glyph_id_of(Digit::Value(12), GlyphStyle::Regular), GlyphId::BLANK);
    }

    #[test]
    fn test_glyph_ids_distinct_per_digit_and_style() {
        let mut seen = HashSet::new();
        for d in 0..=9 {
            for style in [GlyphStyle::Regular, GlyphStyle::Bold] {
                let id = glyph_id_of(Digit::new(d), style);
                assert_ne!(id, GlyphId::BLANK);
                assert_ne!(id, GlyphId::WARNING);
                assert!(seen.insert(id), "duplicate glyph id for {d} {style:?}");
            }
        }
        assert_eq!(seen.len(), 20);
    }

    #[test]
    fn test_glyph_id_round_trips_to_digit() {
        let id = glyph_id_of(Digit::new(7), GlyphStyle::Bold);
        assert_eq!(id.digit(), Some((7, GlyphStyle::Bold)));
        let id = glyph_id_of(Digit::new(0), GlyphStyle::Regular);
        assert_eq!(id.digit(), Some((0, GlyphStyle::Regular)));
        assert_eq!(GlyphId::BLANK.digit(), None);
        assert_eq!(GlyphId::WARNING.digit(), None);
    }

    #[test]
    fn test_from_ascii() {
        assert_eq!(Digit::from_ascii(b'0'), Digit::Value(0));
        assert_eq!(Digit::from_ascii(b'9'), Digit::Value(9));
        assert_eq!(Digit::from_ascii(b' '), Digit::Absent);
        assert_eq!(Digit::from_ascii(b':'), Digit::Absent);
        assert_eq!(Digit::from_ascii(0), Digit::Absent);
    }

    #[test]
    fn test_known_widths() {
        assert_eq!(GlyphFamily::COMPACT.width_of(Digit::new(1)), 11);
        assert_eq!(GlyphFamily::COMPACT.width_of(Digit::new(3)), 26);
        assert_eq!(GlyphFamily::WIDE.width_of(Digit::new(1)), 15);
        assert_eq!(GlyphFamily::WIDE.width_of(Digit::new(5)), 32);
    }
}
