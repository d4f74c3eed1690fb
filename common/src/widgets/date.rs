//! Date text layer.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use crate::colors::BLACK;
use crate::styles::{CENTERED_MIDDLE, DATE_STYLE};

const BACKGROUND: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(BLACK);

/// Clear `frame` and draw `text` centered in it.
pub fn draw_date<D>(
    display: &mut D,
    frame: Rectangle,
    text: &str,
) where
    D: DrawTarget<Color = Rgb565>,
{
    frame.into_styled(BACKGROUND).draw(display).ok();
    Text::with_text_style(text, frame.center(), DATE_STYLE, CENTERED_MIDDLE).draw(display).ok();
}

#[cfg(test)]
mod tests {
    use embedded_graphics::mock_display::MockDisplay;

    use super::*;
    use crate::colors::WHITE;

    #[test]
    fn test_date_clears_frame_and_draws_text() {
        let mut display: MockDisplay<Rgb565> = MockDisplay::new();
        display.set_allow_overdraw(true);
        let frame = Rectangle::new(Point::new(0, 16), Size::new(64, 32));
        draw_date(&mut display, frame, "Mar");

        assert_eq!(display.get_pixel(Point::new(0, 16)), Some(BLACK));
        assert_eq!(display.get_pixel(Point::new(0, 15)), None);
        let white = (0..64)
            .flat_map(|y| (0..64).map(move |x| Point::new(x, y)))
            .filter(|p| display.get_pixel(*p) == Some(WHITE))
            .count();
        assert!(white > 0);
        assert_eq!(display.affected_area(), frame);
    }
}
