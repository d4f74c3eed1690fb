//! Display and layout configuration constants.
//!
//! Every position on the face is a compile-time constant relative to the
//! 144x168 canvas. Round displays offset the whole canvas (see
//! [`Platform`]) instead of using a second set of constants.

use embedded_graphics::prelude::{Point, Size, Transform};
use embedded_graphics::primitives::Rectangle;

// =============================================================================
// Canvas
// =============================================================================

/// Width of the face canvas. Digit layout is centered within this.
pub const CANVAS_WIDTH: u32 = 144;

/// Height of the face canvas on rectangular displays.
pub const CANVAS_HEIGHT: u32 = 168;

/// Side of the round display.
pub const ROUND_SCREEN_SIZE: u32 = 180;

// =============================================================================
// Digit Rows
// =============================================================================

/// Top of the hour digit row.
pub const HOUR_ROW_Y: i32 = 27;

/// Height of an hour digit bitmap.
pub const HOUR_ROW_HEIGHT: u32 = 43;

/// Top of the minute row on the wide face (one unit lower than hours).
pub const WIDE_MINUTE_ROW_Y: i32 = 28;

/// Height of a minute bitmap on the wide face.
pub const WIDE_MINUTE_ROW_HEIGHT: u32 = 42;

/// Upper separator dot top edge (regular size).
pub const SEPARATOR_UPPER_Y: i32 = 37;

/// Lower separator dot top edge (regular size).
pub const SEPARATOR_LOWER_Y: i32 = 56;

const _: () = assert!(HOUR_ROW_Y < SEPARATOR_UPPER_Y);
const _: () = assert!(SEPARATOR_LOWER_Y < HOUR_ROW_Y + HOUR_ROW_HEIGHT as i32);

// =============================================================================
// Fixed Frames
// =============================================================================

/// Battery bar on the compact face.
pub const BATTERY_BAR: Rectangle = Rectangle::new(Point::new(24, 88), Size::new(96, 4));

/// Battery bar on the wide face (four one-pixel lines from x=24 to x=120 inclusive).
pub const WIDE_BATTERY_BAR: Rectangle = Rectangle::new(Point::new(24, 88), Size::new(97, 4));

/// Date text frame.
pub const DATE_FRAME: Rectangle = Rectangle::new(Point::new(0, 96), Size::new(CANVAS_WIDTH, 32));

/// Warning glyph below the date.
pub const WARNING_FRAME: Rectangle = Rectangle::new(Point::new(0, 132), Size::new(CANVAS_WIDTH, 32));

/// Warning glyph drawn over the (hidden) date on the wide face.
pub const WIDE_WARNING_FRAME: Rectangle = Rectangle::new(Point::new(0, 96), Size::new(CANVAS_WIDTH, 64));

/// Placeholder shown before the first render cycle.
pub const DATE_PLACEHOLDER: &str = "Ddd 00 Mmm";

// =============================================================================
// Platforms
// =============================================================================

/// Display geometry of a host target.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Platform {
    /// Short target name.
    pub name: &'static str,
    /// Full screen size.
    pub screen: Size,
    /// Offset of the 144-wide canvas on the screen.
    pub origin: Point,
    /// Extra vertical drop applied to the digit row and separator dots.
    pub digit_drop: i32,
    /// Whether the battery bar may use tier colors.
    pub color: bool,
    /// Circular display.
    pub round: bool,
}

impl Platform {
    /// Rectangular monochrome display.
    pub const APLITE: Self = Self {
        name: "aplite",
        screen: Size::new(CANVAS_WIDTH, CANVAS_HEIGHT),
        origin: Point::zero(),
        digit_drop: 0,
        color: false,
        round: false,
    };

    /// Rectangular color display.
    pub const BASALT: Self = Self {
        name: "basalt",
        screen: Size::new(CANVAS_WIDTH, CANVAS_HEIGHT),
        origin: Point::zero(),
        digit_drop: 0,
        color: true,
        round: false,
    };

    /// Round color display.
    pub const CHALK: Self = Self {
        name: "chalk",
        screen: Size::new(ROUND_SCREEN_SIZE, ROUND_SCREEN_SIZE),
        origin: Point::new(18, 6),
        digit_drop: 4,
        color: true,
        round: true,
    };

    /// All known platforms.
    pub const ALL: [Self; 3] = [Self::APLITE, Self::BASALT, Self::CHALK];

    /// Look up a platform by name.
    pub fn from_name(name: &str) -> Option<Self> { Self::ALL.into_iter().find(|p| p.name == name) }

    /// Move a canvas-relative frame to screen coordinates.
    #[inline]
    pub fn place(
        &self,
        frame: Rectangle,
    ) -> Rectangle {
        frame.translate(self.origin)
    }

    /// Move a digit-row frame to screen coordinates (origin plus digit drop).
    #[inline]
    pub fn place_digit_row(
        &self,
        frame: Rectangle,
    ) -> Rectangle {
        frame.translate(self.origin + Point::new(0, self.digit_drop))
    }
}

impl Default for Platform {
    fn default() -> Self { Self::BASALT }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_fits_every_screen() {
        for platform in Platform::ALL {
            let right = platform.origin.x + CANVAS_WIDTH as i32;
            assert!(right <= platform.screen.width as i32, "{} canvas overflows", platform.name);
        }
    }

    #[test]
    fn test_round_offsets() {
        let frame = Rectangle::new(Point::new(10, 27), Size::new(31, 43));
        let placed = Platform::CHALK.place_digit_row(frame);
        assert_eq!(placed.top_left, Point::new(28, 37));
        let placed = Platform::CHALK.place(DATE_FRAME);
        assert_eq!(placed.top_left, Point::new(18, 102));
    }

    #[test]
    fn test_rect_platforms_do_not_move_frames() {
        assert_eq!(Platform::APLITE.place(BATTERY_BAR), BATTERY_BAR);
        assert_eq!(Platform::BASALT.place_digit_row(DATE_FRAME), DATE_FRAME);
    }

    #[test]
    fn test_platform_lookup() {
        assert_eq!(Platform::from_name("chalk"), Some(Platform::CHALK));
        assert_eq!(Platform::from_name("diorite"), None);
    }
}
