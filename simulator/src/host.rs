//! [`Host`] implementation over an in-memory layer stack.
//!
//! Placements, the date line and the canvas scene are kept as retained
//! layers, the way the watch's window system holds them, and composited onto
//! a fresh [`SimulatorDisplay`] whenever a frame is captured.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle};
use embedded_graphics_simulator::SimulatorDisplay;
use tracing::{debug, info};
use watchface_common::colors::BLACK;
use watchface_common::config::Platform;
use watchface_common::glyphs::GlyphId;
use watchface_common::host::{CanvasScene, Host};
use watchface_common::settings::MemoryStore;
use watchface_common::thresholds::ChargeState;
use watchface_common::widgets::{draw_canvas_scene, draw_date, draw_glyph};

use crate::timing::SimClock;

/// One retained bitmap layer.
#[derive(Clone, Copy, Debug)]
struct BitmapLayer {
    frame: Rectangle,
    glyph: GlyphId,
    hidden: bool,
}

/// Simulated watch runtime.
pub struct SimHost {
    pub clock: SimClock,
    pub use_24h: bool,
    pub system_locale: String,
    pub battery_percent: u8,
    pub charging: bool,
    pub connected: bool,

    platform: Platform,
    store: MemoryStore,
    layers: BTreeMap<u32, BitmapLayer>,
    next_id: u32,
    date: Option<(Rectangle, String)>,
    date_hidden: bool,
    scene: Option<CanvasScene>,
    vibrations: u32,
}

impl SimHost {
    pub fn new(
        platform: Platform,
        clock: SimClock,
        system_locale: String,
    ) -> Self {
        Self {
            clock,
            use_24h: true,
            system_locale,
            battery_percent: 100,
            charging: false,
            connected: true,
            platform,
            store: MemoryStore::new(),
            layers: BTreeMap::new(),
            next_id: 0,
            date: None,
            date_hidden: false,
            scene: None,
            vibrations: 0,
        }
    }

    /// Number of live bitmap placements.
    pub fn live_placements(&self) -> usize { self.layers.len() }

    /// Vibrations requested since the last call.
    pub fn take_vibrations(&mut self) -> u32 { std::mem::take(&mut self.vibrations) }

    /// Composite every visible layer onto a new display.
    pub fn compose(&self) -> SimulatorDisplay<Rgb565> {
        let mut display = SimulatorDisplay::new(self.platform.screen);
        display.clear(BLACK).ok();

        // Round screens only show the inscribed circle
        if self.platform.round {
            let bezel = Rgb565::new(4, 8, 4);
            display.clear(bezel).ok();
            Circle::new(Point::zero(), self.platform.screen.width)
                .into_styled(PrimitiveStyle::with_fill(BLACK))
                .draw(&mut display)
                .ok();
        }

        let (warnings, digits): (Vec<&BitmapLayer>, Vec<&BitmapLayer>) =
            self.layers.values().filter(|l| !l.hidden).partition(|l| l.glyph == GlyphId::WARNING);

        for layer in &digits {
            draw_glyph(&mut display, layer.frame, layer.glyph);
        }
        if let Some((frame, text)) = &self.date
            && !self.date_hidden
        {
            draw_date(&mut display, *frame, text);
        }
        if let Some(scene) = &self.scene {
            draw_canvas_scene(&mut display, scene);
        }
        for layer in &warnings {
            draw_glyph(&mut display, layer.frame, layer.glyph);
        }
        display
    }
}

impl Host for SimHost {
    type Placement = u32;
    type Store = MemoryStore;
    type Time = NaiveDateTime;

    fn now(&self) -> NaiveDateTime { self.clock.now() }

    fn clock_is_24h(&self) -> bool { self.use_24h }

    fn system_locale(&self) -> &str { &self.system_locale }

    fn battery(&self) -> ChargeState { ChargeState::from_reading(self.battery_percent, self.charging) }

    fn is_connected(&self) -> bool { self.connected }

    fn create_placement(
        &mut self,
        frame: Rectangle,
        glyph: GlyphId,
    ) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.layers.insert(
            id,
            BitmapLayer {
                frame,
                glyph,
                hidden: false,
            },
        );
        id
    }

    fn destroy_placement(
        &mut self,
        placement: u32,
    ) {
        if self.layers.remove(&placement).is_none() {
            debug!(placement, "release of unknown placement");
        }
    }

    fn set_placement_hidden(
        &mut self,
        placement: &u32,
        hidden: bool,
    ) {
        if let Some(layer) = self.layers.get_mut(placement) {
            layer.hidden = hidden;
        }
    }

    fn set_date_text(
        &mut self,
        frame: Rectangle,
        text: &str,
    ) {
        self.date = Some((frame, text.to_owned()));
    }

    fn set_date_hidden(
        &mut self,
        hidden: bool,
    ) {
        self.date_hidden = hidden;
    }

    fn redraw_canvas(
        &mut self,
        scene: &CanvasScene,
    ) {
        self.scene = Some(scene.clone());
    }

    fn vibrate_double_pulse(&mut self) {
        info!("vibration: double pulse");
        self.vibrations += 1;
    }

    fn storage(&mut self) -> &mut MemoryStore { &mut self.store }
}
