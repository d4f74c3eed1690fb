//! Interface to the host runtime.
//!
//! The watch face never touches a display, sensor or storage directly; it
//! asks a [`Host`] for readings and tells it what to place where. All frames
//! handed to the host are already in screen coordinates (platform origin
//! applied).

use chrono::{Datelike, Timelike};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::primitives::Rectangle;
use heapless::Vec;

use crate::glyphs::GlyphId;
use crate::layout::{DigitPlacement, SeparatorDot};
use crate::settings::KeyValueStore;
use crate::thresholds::ChargeState;

/// Everything drawn on the free-form canvas layer in one redraw.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CanvasScene {
    pub battery_bar: Rectangle,
    pub bar_color: Rgb565,
    /// Zero or two separator dots.
    pub separators: Vec<SeparatorDot, 2>,
}

/// Services the host runtime provides to the watch face.
///
/// Calls arrive one at a time from the host's event loop; no method is
/// re-entered.
pub trait Host {
    /// Handle to a live bitmap placement.
    type Placement;

    /// Persistent settings storage.
    type Store: KeyValueStore;

    /// Local wall-clock time.
    type Time: Timelike + Datelike;

    // ---- readings ----

    fn now(&self) -> Self::Time;

    /// User preference for the 24-hour clock.
    fn clock_is_24h(&self) -> bool;

    /// System locale identifier such as `"fr_FR"`.
    fn system_locale(&self) -> &str;

    fn battery(&self) -> ChargeState;

    /// Whether the phone is connected.
    fn is_connected(&self) -> bool;

    // ---- bitmaps ----

    /// Create a bitmap placement showing `glyph` inside `frame`.
    fn create_placement(
        &mut self,
        frame: Rectangle,
        glyph: GlyphId,
    ) -> Self::Placement;

    /// Release a placement created by [`create_placement`](Self::create_placement).
    fn destroy_placement(
        &mut self,
        placement: Self::Placement,
    );

    fn set_placement_hidden(
        &mut self,
        placement: &Self::Placement,
        hidden: bool,
    );

    // ---- text, canvas, feedback ----

    /// Replace the date line shown centered in `frame`.
    fn set_date_text(
        &mut self,
        frame: Rectangle,
        text: &str,
    );

    fn set_date_hidden(
        &mut self,
        hidden: bool,
    );

    /// Schedule a redraw of the canvas layer with `scene`.
    fn redraw_canvas(
        &mut self,
        scene: &CanvasScene,
    );

    fn vibrate_double_pulse(&mut self);

    fn storage(&mut self) -> &mut Self::Store;
}

/// The four live digit placements, replaced as a unit.
///
/// Old placements are always released before any replacement is created.
#[derive(Debug)]
pub struct DigitSlots<P> {
    live: Option<[P; 4]>,
}

impl<P> DigitSlots<P> {
    pub const fn new() -> Self { Self { live: None } }

    /// Release the current placements (if any), then create `next`.
    pub fn replace<H>(
        &mut self,
        host: &mut H,
        next: &[DigitPlacement; 4],
    ) where
        H: Host<Placement = P>,
    {
        self.release(host);
        self.live = Some((*next).map(|d| host.create_placement(d.frame, d.glyph)));
    }

    /// Release every held placement.
    pub fn release<H>(
        &mut self,
        host: &mut H,
    ) where
        H: Host<Placement = P>,
    {
        if let Some(old) = self.live.take() {
            for placement in old {
                host.destroy_placement(placement);
            }
        }
    }
}

impl<P> Default for DigitSlots<P> {
    fn default() -> Self { Self::new() }
}
