//! Horizontal digit layout and separator placement.
//!
//! The four digit bitmaps are centered as one block on the 144-wide canvas:
//!
//! ```text
//!  start
//!    |lead| h1 |hour| h2 |  group  | m1 |min| m2 |
//!                            ^ separator dots (inset into the group gap)
//! ```
//!
//! The block width used for centering is the sum of the four digit widths
//! plus the profile's *reserved* padding, not the exact sum of gaps. The
//! leftover pixel of an odd difference goes to the right.
//!
//! Separator dots come from a fixed preset table: the two regular presets are
//! 4x4 at the inset column, the two bold presets are 6x6 one unit further up
//! and left. Round presets only differ by their corner radius.

use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;

use crate::clock::ClockDigits;
use crate::config::{CANVAS_WIDTH, SEPARATOR_LOWER_Y, SEPARATOR_UPPER_Y};
use crate::glyphs::{Digit, GlyphFamily, GlyphId, GlyphStyle, glyph_id_of};

// =============================================================================
// Separator Style
// =============================================================================

/// Marker drawn between the hour and minute groups.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum SeparatorStyle {
    #[default]
    None = 0,
    Square = 1,
    Round = 2,
    SquareBold = 3,
    RoundBold = 4,
}

/// Size, corner radius and outward shift of one separator preset.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DotPreset {
    pub side: u32,
    pub corner_radius: u32,
    /// Shift up and to the left relative to the regular dot position.
    pub outset: i32,
}

impl SeparatorStyle {
    pub const ALL: [Self; 5] = [Self::None, Self::Square, Self::Round, Self::SquareBold, Self::RoundBold];

    /// Persisted index → style.
    pub const fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(Self::None),
            1 => Some(Self::Square),
            2 => Some(Self::Round),
            3 => Some(Self::SquareBold),
            4 => Some(Self::RoundBold),
            _ => None,
        }
    }

    #[inline]
    pub const fn index(self) -> i32 { self as i32 }

    /// Configuration message value → style. Unknown values are `None`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "none" => Some(Self::None),
            "square" => Some(Self::Square),
            "round" => Some(Self::Round),
            "squareb" => Some(Self::SquareBold),
            "roundb" => Some(Self::RoundBold),
            _ => None,
        }
    }

    /// Whether the layout reserves room for dots.
    #[inline]
    pub const fn is_visible(self) -> bool { !matches!(self, Self::None) }

    /// Dot geometry, or `None` for [`SeparatorStyle::None`].
    pub const fn preset(self) -> Option<DotPreset> {
        match self {
            Self::None => None,
            Self::Square => Some(DotPreset {
                side: 4,
                corner_radius: 0,
                outset: 0,
            }),
            Self::Round => Some(DotPreset {
                side: 4,
                corner_radius: 1,
                outset: 0,
            }),
            Self::SquareBold => Some(DotPreset {
                side: 6,
                corner_radius: 0,
                outset: 1,
            }),
            Self::RoundBold => Some(DotPreset {
                side: 6,
                corner_radius: 2,
                outset: 1,
            }),
        }
    }
}

// =============================================================================
// Spacing
// =============================================================================

/// Gaps between the digit bitmaps.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Gaps {
    /// Before the first hour digit.
    pub lead: i32,
    /// Between the two hour digits.
    pub hour: i32,
    /// Between the hour and minute groups.
    pub group: i32,
    /// Between the two minute digits.
    pub minute: i32,
}

impl Gaps {
    pub const NONE: Self = Self {
        lead: 0,
        hour: 0,
        group: 0,
        minute: 0,
    };

    #[inline]
    pub const fn total(&self) -> i32 { self.lead + self.hour + self.group + self.minute }
}

/// Padding and gap presets of a glyph family.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Spacing {
    /// Width added to the digit sum when centering the block.
    pub reserved: u32,
    /// Gaps when no separator is shown.
    pub plain: Gaps,
    /// Gaps when a separator reserves room between the groups.
    pub separated: Gaps,
}

/// Column of the separator dots, measured from the end of the hour group.
pub const SEPARATOR_INSET: i32 = 3;

impl Spacing {
    /// Compact family: 20 units reserved, wider group gap with a separator.
    pub const COMPACT: Self = Self {
        reserved: 20,
        plain: Gaps {
            lead: 2,
            hour: 4,
            group: 8,
            minute: 4,
        },
        separated: Gaps {
            lead: 1,
            hour: 4,
            group: 10,
            minute: 4,
        },
    };

    /// Wide family: digits abut.
    pub const WIDE: Self = Self {
        reserved: 0,
        plain: Gaps::NONE,
        separated: Gaps::NONE,
    };

    /// Gap set for a separator style.
    #[inline]
    pub const fn gaps(
        &self,
        separator: SeparatorStyle,
    ) -> Gaps {
        if separator.is_visible() { self.separated } else { self.plain }
    }
}

const _: () = assert!(Spacing::COMPACT.plain.total() <= Spacing::COMPACT.reserved as i32);
const _: () = assert!(Spacing::COMPACT.separated.total() <= Spacing::COMPACT.reserved as i32);
const _: () = assert!(SEPARATOR_INSET + 6 <= Spacing::COMPACT.separated.group);

// =============================================================================
// Layout Plan
// =============================================================================

/// One digit bitmap frame (canvas coordinates) and the glyph it shows.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DigitPlacement {
    pub frame: Rectangle,
    pub glyph: GlyphId,
}

/// One separator dot (canvas coordinates).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SeparatorDot {
    pub frame: Rectangle,
    pub corner_radius: u32,
}

/// Vertical span of a digit row.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RowSpan {
    pub y: i32,
    pub height: u32,
}

/// Everything the layout engine needs besides the digits themselves.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LayoutParams {
    pub family: GlyphFamily,
    pub spacing: Spacing,
    pub hour_row: RowSpan,
    pub minute_row: RowSpan,
    pub hour_style: GlyphStyle,
    pub minute_style: GlyphStyle,
    pub separator: SeparatorStyle,
}

/// Computed positions for one render. Discarded after drawing.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LayoutPlan {
    /// Hour tens, hour units, minute tens, minute units.
    pub digits: [DigitPlacement; 4],
    pub separators: Vec<SeparatorDot, 2>,
    /// Centered block width (digit sum plus reserved padding).
    pub total_width: u32,
    /// Left edge of the centered block.
    pub start_x: i32,
}

/// Centered block width for four digits.
pub fn total_width(
    family: &GlyphFamily,
    spacing: &Spacing,
    digits: &[Digit; 4],
) -> u32 {
    digits.iter().map(|d| family.width_of(*d)).sum::<u32>() + spacing.reserved
}

/// Left edge of a block of `total` width centered on the canvas (floor).
#[inline]
pub const fn centered_start(total: u32) -> i32 { (CANVAS_WIDTH as i32 - total as i32) / 2 }

/// Lay out the four digits and the separator dots.
pub fn plan(
    digits: &ClockDigits,
    params: &LayoutParams,
) -> LayoutPlan {
    let slots = digits.as_array();
    let family = &params.family;
    let total = total_width(family, &params.spacing, &slots);
    let start_x = centered_start(total);
    let gaps = params.spacing.gaps(params.separator);

    let widths = slots.map(|d| family.width_of(d));
    let offsets_before = [gaps.lead, gaps.hour, gaps.group, gaps.minute];
    let rows = [params.hour_row, params.hour_row, params.minute_row, params.minute_row];
    let styles = [params.hour_style, params.hour_style, params.minute_style, params.minute_style];

    let mut x = start_x;
    let mut placements = [DigitPlacement {
        frame: Rectangle::zero(),
        glyph: GlyphId::BLANK,
    }; 4];
    for i in 0..4 {
        if i > 0 {
            x += widths[i - 1] as i32;
        }
        x += offsets_before[i];
        placements[i] = DigitPlacement {
            frame: Rectangle::new(Point::new(x, rows[i].y), Size::new(widths[i], rows[i].height)),
            glyph: glyph_id_of(slots[i], styles[i]),
        };
    }

    let mut separators = Vec::new();
    if let Some(preset) = params.separator.preset() {
        // Fixed column after the hour group, independent of the gap preset's lead
        let column = start_x
            + 1
            + widths[0] as i32
            + params.spacing.separated.hour
            + widths[1] as i32
            + SEPARATOR_INSET
            - preset.outset;
        for y in [SEPARATOR_UPPER_Y, SEPARATOR_LOWER_Y] {
            let _ = separators.push(SeparatorDot {
                frame: Rectangle::new(Point::new(column, y - preset.outset), Size::new(preset.side, preset.side)),
                corner_radius: preset.corner_radius,
            });
        }
    }

    LayoutPlan {
        digits: placements,
        separators,
        total_width: total,
        start_x,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{HOUR_ROW_HEIGHT, HOUR_ROW_Y, WIDE_MINUTE_ROW_HEIGHT, WIDE_MINUTE_ROW_Y};

    const HOUR_ROW: RowSpan = RowSpan {
        y: HOUR_ROW_Y,
        height: HOUR_ROW_HEIGHT,
    };

    fn compact(separator: SeparatorStyle) -> LayoutParams {
        LayoutParams {
            family: GlyphFamily::COMPACT,
            spacing: Spacing::COMPACT,
            hour_row: HOUR_ROW,
            minute_row: HOUR_ROW,
            hour_style: GlyphStyle::Bold,
            minute_style: GlyphStyle::Regular,
            separator,
        }
    }

    fn wide() -> LayoutParams {
        LayoutParams {
            family: GlyphFamily::WIDE,
            spacing: Spacing::WIDE,
            hour_row: HOUR_ROW,
            minute_row: RowSpan {
                y: WIDE_MINUTE_ROW_Y,
                height: WIDE_MINUTE_ROW_HEIGHT,
            },
            hour_style: GlyphStyle::Bold,
            minute_style: GlyphStyle::Regular,
            separator: SeparatorStyle::None,
        }
    }

    fn clock(slots: [Digit; 4]) -> ClockDigits {
        ClockDigits {
            hour_tens: slots[0],
            hour_units: slots[1],
            minute_tens: slots[2],
            minute_units: slots[3],
        }
    }

    #[test]
    fn test_every_combination_fits_canvas() {
        let mut params_set = [compact(SeparatorStyle::None); 6];
        for (i, sep) in SeparatorStyle::ALL.iter().enumerate() {
            params_set[i] = compact(*sep);
        }
        params_set[5] = wide();

        for params in &params_set {
            for a in Digit::ALL {
                for b in Digit::ALL {
                    for c in Digit::ALL {
                        for d in Digit::ALL {
                            let plan = plan(&clock([a, b, c, d]), params);
                            assert!(plan.total_width <= CANVAS_WIDTH);
                            assert!(plan.start_x >= 0);
                            assert!(plan.start_x + plan.total_width as i32 <= CANVAS_WIDTH as i32);
                            let last = plan.digits[3].frame;
                            let right = last.top_left.x + last.size.width as i32;
                            assert!(right <= CANVAS_WIDTH as i32, "digits overflow at {a:?}{b:?}:{c:?}{d:?}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_widest_time_fills_canvas_exactly() {
        let zero = Digit::Value(0);
        let plan = plan(&clock([zero; 4]), &compact(SeparatorStyle::None));
        assert_eq!(plan.total_width, 144, "4 x 31 + 20");
        assert_eq!(plan.start_x, 0);
    }

    #[test]
    fn test_positions_without_separator() {
        // 12:34 → widths 11, 29, 26, 29; total 95 + 20 = 115; start 14
        let plan = plan(&clock([Digit::new(1), Digit::new(2), Digit::new(3), Digit::new(4)]), &compact(SeparatorStyle::None));
        assert_eq!(plan.start_x, 14);
        let xs: [i32; 4] = plan.digits.map(|p| p.frame.top_left.x);
        assert_eq!(xs, [16, 31, 68, 98]);
        assert!(plan.separators.is_empty());
    }

    #[test]
    fn test_positions_with_separator() {
        let plan = plan(&clock([Digit::new(1), Digit::new(2), Digit::new(3), Digit::new(4)]), &compact(SeparatorStyle::Square));
        let xs: [i32; 4] = plan.digits.map(|p| p.frame.top_left.x);
        assert_eq!(xs, [15, 30, 69, 99]);
        assert_eq!(plan.separators.len(), 2);
        // start + 1 + 11 + 4 + 29 + 3
        let dot = plan.separators[0];
        assert_eq!(dot.frame, Rectangle::new(Point::new(62, 37), Size::new(4, 4)));
        assert_eq!(dot.corner_radius, 0);
        assert_eq!(plan.separators[1].frame.top_left, Point::new(62, 56));
    }

    #[test]
    fn test_separator_sits_inside_group_gap() {
        for sep in [SeparatorStyle::Square, SeparatorStyle::Round, SeparatorStyle::SquareBold, SeparatorStyle::RoundBold] {
            for a in Digit::ALL {
                let plan = plan(&clock([a, Digit::new(8), Digit::new(0), Digit::new(0)]), &compact(sep));
                let hour_end = plan.digits[1].frame.top_left.x + plan.digits[1].frame.size.width as i32;
                let minute_start = plan.digits[2].frame.top_left.x;
                for dot in &plan.separators {
                    assert!(dot.frame.top_left.x >= hour_end, "{sep:?} dot overlaps hours");
                    assert!(dot.frame.top_left.x + dot.frame.size.width as i32 <= minute_start, "{sep:?} dot overlaps minutes");
                }
            }
        }
    }

    #[test]
    fn test_bold_presets_are_larger_and_shifted() {
        let digits = clock([Digit::new(1), Digit::new(2), Digit::new(3), Digit::new(4)]);
        let regular = plan(&digits, &compact(SeparatorStyle::Round));
        let bold = plan(&digits, &compact(SeparatorStyle::RoundBold));
        assert_eq!(regular.separators[0].corner_radius, 1);
        assert_eq!(bold.separators[0].corner_radius, 2);
        assert_eq!(bold.separators[0].frame.size, Size::new(6, 6));
        assert_eq!(bold.separators[0].frame.top_left, regular.separators[0].frame.top_left - Point::new(1, 1));
    }

    #[test]
    fn test_absent_hour_tens_collapses() {
        let digits = clock([Digit::Absent, Digit::new(7), Digit::new(0), Digit::new(5)]);
        let plan = plan(&digits, &compact(SeparatorStyle::None));
        assert_eq!(plan.digits[0].frame.size.width, 0);
        assert_eq!(plan.digits[0].glyph, GlyphId::BLANK);
        // Second digit starts right after the lead and hour gaps
        assert_eq!(plan.digits[1].frame.top_left.x, plan.start_x + 2 + 4);
    }

    #[test]
    fn test_odd_leftover_goes_right() {
        // 31 + 11 + 31 + 11 + 20 = 104 → (144 - 104) / 2 = 20
        let plan = plan(&clock([Digit::new(0), Digit::new(1), Digit::new(0), Digit::new(1)]), &compact(SeparatorStyle::None));
        assert_eq!(plan.total_width, 104);
        assert_eq!(plan.start_x, 20);
        let odd = centered_start(103);
        assert_eq!(odd, 20, "floor division leaves the extra unit on the right");
    }

    #[test]
    fn test_wide_digits_abut_on_two_rows() {
        let plan = plan(&clock([Digit::new(1), Digit::new(0), Digit::new(5), Digit::new(9)]), &wide());
        // 15 + 35 + 32 + 33 = 115; start 14
        assert_eq!(plan.start_x, 14);
        let xs: [i32; 4] = plan.digits.map(|p| p.frame.top_left.x);
        assert_eq!(xs, [14, 29, 64, 96]);
        assert_eq!(plan.digits[0].frame.top_left.y, 27);
        assert_eq!(plan.digits[2].frame.top_left.y, 28);
        assert_eq!(plan.digits[3].frame.size.height, 42);
    }

    #[test]
    fn test_styles_follow_groups() {
        let plan = plan(&clock([Digit::new(1), Digit::new(2), Digit::new(3), Digit::new(4)]), &compact(SeparatorStyle::None));
        assert_eq!(plan.digits[0].glyph.digit(), Some((1, GlyphStyle::Bold)));
        assert_eq!(plan.digits[1].glyph.digit(), Some((2, GlyphStyle::Bold)));
        assert_eq!(plan.digits[2].glyph.digit(), Some((3, GlyphStyle::Regular)));
        assert_eq!(plan.digits[3].glyph.digit(), Some((4, GlyphStyle::Regular)));
    }

    #[test]
    fn test_separator_codes() {
        assert_eq!(SeparatorStyle::from_code("squareb"), Some(SeparatorStyle::SquareBold));
        assert_eq!(SeparatorStyle::from_code("dots"), None);
        for style in SeparatorStyle::ALL {
            assert_eq!(SeparatorStyle::from_index(style.index()), Some(style));
        }
    }
}
