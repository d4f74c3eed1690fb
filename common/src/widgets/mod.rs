//! Drawing for the face layers.
//!
//! All widgets are generic over `DrawTarget<Color = Rgb565>` so any
//! embedded-graphics host can composite the face from the placements, date
//! text and canvas scene the controller hands it.

mod date;
mod glyph;
mod primitives;

pub use date::draw_date;
pub use glyph::{draw_digit, draw_glyph, draw_warning};
pub use primitives::{draw_battery_bar, draw_canvas_scene, draw_separator_dot};
