//! Pre-computed text styles for the face widgets.
//!
//! Everything is `const` so no style object is built per draw call. Digit
//! glyphs use the largest `ProFont` size; the bold weight is produced by the
//! widget (double strike), not by a separate font.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::{PROFONT_18_POINT, PROFONT_24_POINT};

use crate::colors::{BLACK, RED, SILVER, WHITE};

// =============================================================================
// Alignment
// =============================================================================

/// Centered horizontally and vertically on the anchor point.
pub const CENTERED_MIDDLE: TextStyle = TextStyleBuilder::new().alignment(Alignment::Center).baseline(Baseline::Middle).build();

// =============================================================================
// Text Styles
// =============================================================================

/// Bold digits: white, drawn twice one pixel apart.
pub const DIGIT_STYLE_BOLD: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, WHITE);

/// Regular digits.
pub const DIGIT_STYLE_REGULAR: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_24_POINT, SILVER);

/// Date line.
pub const DATE_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, WHITE);

/// Exclamation mark inside the warning triangle.
pub const WARNING_MARK_STYLE: MonoTextStyle<'static, Rgb565> = MonoTextStyle::new(&PROFONT_18_POINT, BLACK);

/// Warning triangle fill.
pub const WARNING_COLOR: Rgb565 = RED;
