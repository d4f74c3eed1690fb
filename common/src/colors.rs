//! Color constants for the watch face.
//!
//! The battery bar picks one of four tier colors (or the neutral color while
//! charging and on monochrome displays). Everything else on the face is
//! white on black.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! The `RgbColor` trait constants are used wherever a pure primary is needed
//! so the values stay exact.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Face Colors
// =============================================================================

/// Window background.
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Digits, date text, separator dots and the neutral battery bar.
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Regular-weight digits are drawn slightly dimmer than bold ones.
pub const SILVER: Rgb565 = Rgb565::new(24, 48, 24);

// =============================================================================
// Battery Tier Colors
// =============================================================================

/// Charge at or above the full threshold.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Charge at or above the good threshold.
pub const BLUE: Rgb565 = Rgb565::BLUE;

/// Charge at or above the low threshold.
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Anything below the low threshold. Also the warning glyph color.
pub const RED: Rgb565 = Rgb565::RED;
