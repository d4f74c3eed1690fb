//! Digit and warning glyphs.
//!
//! Glyph bitmaps are stood in for by font rendering: each digit is drawn
//! centered in its placement frame, the bold weight as a one-pixel double
//! strike. Frames are the exact advance widths from the glyph tables, so the
//! text may overhang narrow frames slightly (as the `1` does).

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, Triangle};
use embedded_graphics::text::Text;

use crate::glyphs::{GlyphId, GlyphStyle};
use crate::styles::{CENTERED_MIDDLE, DIGIT_STYLE_BOLD, DIGIT_STYLE_REGULAR, WARNING_COLOR, WARNING_MARK_STYLE};

/// Largest triangle height used for the warning glyph.
const WARNING_MAX_HEIGHT: u32 = 28;

/// Draw whatever `glyph` refers to inside `frame`. Blank draws nothing.
pub fn draw_glyph<D>(
    display: &mut D,
    frame: Rectangle,
    glyph: GlyphId,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if glyph == GlyphId::WARNING {
        draw_warning(display, frame);
    } else if let Some((value, style)) = glyph.digit() {
        draw_digit(display, frame, value, style);
    }
}

/// One digit centered in `frame`.
pub fn draw_digit<D>(
    display: &mut D,
    frame: Rectangle,
    value: u8,
    style: GlyphStyle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if value > 9 || frame.is_zero_sized() {
        return;
    }
    let mut buf = [0u8; 4];
    let text = char::from(b'0' + value).encode_utf8(&mut buf);
    let center = frame.center();

    match style {
        GlyphStyle::Regular => {
            Text::with_text_style(text, center, DIGIT_STYLE_REGULAR, CENTERED_MIDDLE).draw(display).ok();
        }
        GlyphStyle::Bold => {
            for dx in [0, 1] {
                Text::with_text_style(text, center + Point::new(dx, 0), DIGIT_STYLE_BOLD, CENTERED_MIDDLE)
                    .draw(display)
                    .ok();
            }
        }
    }
}

/// Filled warning triangle with an exclamation mark, centered in `frame`.
pub fn draw_warning<D>(
    display: &mut D,
    frame: Rectangle,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let height = frame.size.height.saturating_sub(4).min(WARNING_MAX_HEIGHT) as i32;
    if height < 4 {
        return;
    }
    let center = frame.center();
    let half = height / 2;
    Triangle::new(
        center + Point::new(0, -half),
        center + Point::new(-half - 2, half),
        center + Point::new(half + 2, half),
    )
    .into_styled(PrimitiveStyle::with_fill(WARNING_COLOR))
    .draw(display)
    .ok();

    Text::with_text_style("!", center + Point::new(0, half / 3), WARNING_MARK_STYLE, CENTERED_MIDDLE)
        .draw(display)
        .ok();
}
