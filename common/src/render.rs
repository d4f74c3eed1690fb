//! Watch face controller: one synchronous render cycle per host event.
//!
//! [`WatchFace`] owns the host handle, the current settings and the per-window
//! resources. The host feeds it [`WatchEvent`]s strictly one at a time.
//!
//! # Render Cycle
//!
//! | Step | Action                                                          |
//! |------|-----------------------------------------------------------------|
//! | 1    | Read battery charge                                             |
//! | 2    | Decompose the wall clock into four digits and a date line      |
//! | 3    | Plan the digit layout                                           |
//! | 4    | Release the four old digit placements, create the new ones      |
//! | 5    | Set the date text                                               |
//! | 6    | Show/hide the warning, vibrate on a lost connection             |
//! | 7    | Redraw the canvas (battery bar + separator dots)                |
//!
//! # Connectivity
//!
//! A double pulse fires on the first cycle that sees the phone disconnected
//! after a connected one. With repeat enabled it fires on every disconnected
//! cycle. The remembered state starts as disconnected, so a face that loads
//! without a phone stays quiet unless repeat is on.

use embedded_graphics::primitives::Rectangle;

use crate::clock::{ClockDigits, ClockOptions, DateText, decompose};
use crate::config::{DATE_FRAME, DATE_PLACEHOLDER, Platform};
use crate::glyphs::GlyphId;
use crate::host::{CanvasScene, DigitSlots, Host};
use crate::layout::{DigitPlacement, LayoutPlan, SeparatorDot, plan};
use crate::locale::Locale;
use crate::log::EventLog;
use crate::profile::FaceProfile;
use crate::settings::{ConfigurationStore, InboundMessage, RenderConfig};
use crate::thresholds::{BatteryTier, ChargeState};
use crate::{log_debug, log_info, log_warn};

// =============================================================================
// Events
// =============================================================================

/// Callback from the host runtime.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum WatchEvent<'a> {
    /// The face window was pushed; create resources and render.
    WindowLoad,
    /// The face window is going away; release resources.
    WindowUnload,
    /// Minute tick.
    Tick,
    /// Settings received from the phone.
    ConfigMessage(InboundMessage<'a>),
    /// An inbound message was dropped with the given reason code.
    MessageDropped(u8),
    /// The phone connection changed; re-render to update the warning.
    ConnectivityChange,
}

/// What one render cycle did.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CycleReport {
    pub digits: ClockDigits,
    pub date: DateText,
    pub charge: ChargeState,
    pub tier: BatteryTier,
    pub connected: bool,
    pub vibrated: bool,
}

// =============================================================================
// State
// =============================================================================

/// Settings and connectivity memory, alive for the whole process.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct WatchFaceState {
    pub config: RenderConfig,
    pub last_connected: bool,
}

/// Resources that only exist while the window is loaded.
struct WindowResources<P> {
    digits: DigitSlots<P>,
    warning: P,
}

/// Top-level controller.
pub struct WatchFace<H: Host> {
    host: H,
    profile: FaceProfile,
    platform: Platform,
    settings: ConfigurationStore,
    state: WatchFaceState,
    window: Option<WindowResources<H::Placement>>,
    log: EventLog,
}

impl<H: Host> WatchFace<H> {
    /// Read persisted settings and wait for [`WatchEvent::WindowLoad`].
    pub fn new(
        mut host: H,
        profile: FaceProfile,
        platform: Platform,
    ) -> Self {
        let mut log = EventLog::new();
        let system_locale = Locale::from_system(host.system_locale());
        let settings = ConfigurationStore::new(system_locale);
        let config = if profile.configurable {
            settings.load(host.storage(), &mut log)
        } else {
            RenderConfig::with_locale(system_locale)
        };
        log_info!(log, "{} face on {}", profile.name, platform.name);

        Self {
            host,
            profile,
            platform,
            settings,
            state: WatchFaceState {
                config,
                last_connected: false,
            },
            window: None,
            log,
        }
    }

    /// Dispatch one host callback. Returns the render cycle it triggered, if
    /// any.
    pub fn handle_event(
        &mut self,
        event: WatchEvent<'_>,
    ) -> Option<CycleReport> {
        match event {
            WatchEvent::WindowLoad => self.load_window(),
            WatchEvent::WindowUnload => {
                self.unload_window();
                None
            }
            WatchEvent::Tick | WatchEvent::ConnectivityChange => self.render_if_loaded(),
            WatchEvent::ConfigMessage(message) => {
                if self.profile.configurable {
                    self.state.config = self.settings.apply_inbound_message(self.host.storage(), &message, &mut self.log);
                    self.render_if_loaded()
                } else {
                    log_info!(self.log, "{} face ignores settings", self.profile.name);
                    None
                }
            }
            WatchEvent::MessageDropped(reason) => {
                self.settings.on_message_dropped(reason, &mut self.log);
                None
            }
        }
    }

    fn load_window(&mut self) -> Option<CycleReport> {
        if self.window.is_some() {
            log_warn!(self.log, "window already loaded");
            return self.render_if_loaded();
        }

        // Placeholder "00:00" until the first cycle
        let initial = self.screen_plan(&ClockDigits::MIDNIGHT);
        let mut digits = DigitSlots::new();
        digits.replace(&mut self.host, &initial.digits);
        self.host.set_date_text(self.platform.place(DATE_FRAME), DATE_PLACEHOLDER);
        let warning = self
            .host
            .create_placement(self.platform.place(self.profile.warning_frame), GlyphId::WARNING);
        self.window = Some(WindowResources { digits, warning });
        log_debug!(self.log, "window loaded");

        self.render_if_loaded()
    }

    fn unload_window(&mut self) {
        let Some(mut window) = self.window.take() else {
            log_warn!(self.log, "unload without window");
            return;
        };
        window.digits.release(&mut self.host);
        self.host.destroy_placement(window.warning);
        log_debug!(self.log, "window unloaded");
    }

    fn render_if_loaded(&mut self) -> Option<CycleReport> {
        if self.window.is_none() {
            log_debug!(self.log, "no window, skipping render");
            return None;
        }
        Some(self.render())
    }

    /// Layout in screen coordinates.
    fn screen_plan(
        &self,
        digits: &ClockDigits,
    ) -> LayoutPlan {
        let mut layout = plan(digits, &self.profile.layout_params(&self.state.config));
        layout.digits = layout.digits.map(|d| DigitPlacement {
            frame: self.platform.place_digit_row(d.frame),
            ..d
        });
        for dot in layout.separators.iter_mut() {
            *dot = SeparatorDot {
                frame: self.platform.place_digit_row(dot.frame),
                ..*dot
            };
        }
        layout
    }

    fn render(&mut self) -> CycleReport {
        let config = self.state.config;

        let charge = self.host.battery();

        let options = ClockOptions {
            use_24h: self.host.clock_is_24h(),
            locale: config.locale,
            strip_leading_hour_zero: config.strip_leading_hour_zero,
            date_style: self.profile.date_style,
        };
        let reading = decompose(&self.host.now(), &options);

        let layout = self.screen_plan(&reading.digits);
        if let Some(window) = self.window.as_mut() {
            window.digits.replace(&mut self.host, &layout.digits);
        }

        self.host.set_date_text(self.platform.place(DATE_FRAME), &reading.date);

        let connected = self.host.is_connected();
        let vibrated = self.update_connectivity(connected);

        let tier = if self.platform.color {
            self.profile.battery_tiers.classify(charge)
        } else {
            BatteryTier::Neutral
        };
        self.host.redraw_canvas(&CanvasScene {
            battery_bar: self.battery_bar(),
            bar_color: tier.color(),
            separators: layout.separators,
        });

        log_debug!(
            self.log,
            "render {} conn={} vib={}",
            reading.date.as_str(),
            u8::from(connected),
            u8::from(vibrated)
        );

        CycleReport {
            digits: reading.digits,
            date: reading.date,
            charge,
            tier,
            connected,
            vibrated,
        }
    }

    /// Apply the warning and vibration rules. Returns whether it vibrated.
    fn update_connectivity(
        &mut self,
        connected: bool,
    ) -> bool {
        let hides_date = self.profile.warning_hides_date;
        if let Some(window) = self.window.as_ref() {
            self.host.set_placement_hidden(&window.warning, connected);
        }
        if hides_date {
            self.host.set_date_hidden(!connected);
        }

        if connected {
            self.state.last_connected = true;
            return false;
        }

        if self.state.last_connected || self.state.config.repeat_vibration {
            if self.state.last_connected {
                log_warn!(self.log, "phone disconnected");
            }
            self.state.last_connected = false;
            self.host.vibrate_double_pulse();
            return true;
        }
        false
    }

    fn battery_bar(&self) -> Rectangle { self.platform.place(self.profile.battery_bar) }

    // ---- accessors ----

    #[inline]
    pub const fn host(&self) -> &H { &self.host }

    #[inline]
    pub fn host_mut(&mut self) -> &mut H { &mut self.host }

    #[inline]
    pub const fn config(&self) -> &RenderConfig { &self.state.config }

    #[inline]
    pub const fn state(&self) -> &WatchFaceState { &self.state }

    #[inline]
    pub const fn is_loaded(&self) -> bool { self.window.is_some() }

    /// Buffered log entries; hosts drain this after each event.
    #[inline]
    pub fn log_mut(&mut self) -> &mut EventLog { &mut self.log }
}

// =============================================================================
// Unit Tests
// =============================================================================
