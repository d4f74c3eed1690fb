//! Canvas layer primitives: battery bar and separator dots.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle, RoundedRectangle};

use crate::colors::WHITE;
use crate::host::CanvasScene;
use crate::layout::SeparatorDot;

const DOT_FILL: PrimitiveStyle<Rgb565> = PrimitiveStyle::with_fill(WHITE);

/// Solid battery bar.
pub fn draw_battery_bar<D>(
    display: &mut D,
    frame: Rectangle,
    color: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    frame.into_styled(PrimitiveStyle::with_fill(color)).draw(display).ok();
}

/// One separator dot; a zero radius gives a plain square.
pub fn draw_separator_dot<D>(
    display: &mut D,
    dot: &SeparatorDot,
) where
    D: DrawTarget<Color = Rgb565>,
{
    if dot.corner_radius == 0 {
        dot.frame.into_styled(DOT_FILL).draw(display).ok();
    } else {
        RoundedRectangle::with_equal_corners(dot.frame, Size::new_equal(dot.corner_radius))
            .into_styled(DOT_FILL)
            .draw(display)
            .ok();
    }
}

/// Everything on the canvas layer.
pub fn draw_canvas_scene<D>(
    display: &mut D,
    scene: &CanvasScene,
) where
    D: DrawTarget<Color = Rgb565>,
{
    draw_battery_bar(display, scene.battery_bar, scene.bar_color);
    for dot in scene.separators.iter() {
        draw_separator_dot(display, dot);
    }
}
