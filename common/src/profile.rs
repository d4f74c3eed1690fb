//! Face variants collapsed into one parameter set.
//!
//! - [`FaceProfile::CONFIGURABLE`]: compact glyphs, reserved padding,
//!   separators, localized date, settings from the phone, warning below the
//!   date.
//! - [`FaceProfile::CLASSIC`]: wide glyphs that abut, fixed bold hours and
//!   regular minutes, zero-padded date in the system language, warning drawn over the date
//!   (which is hidden while disconnected). Inbound settings are ignored.

use embedded_graphics::primitives::Rectangle;

use crate::clock::DateStyle;
use crate::config::{
    BATTERY_BAR,
    HOUR_ROW_HEIGHT,
    HOUR_ROW_Y,
    WARNING_FRAME,
    WIDE_BATTERY_BAR,
    WIDE_MINUTE_ROW_HEIGHT,
    WIDE_MINUTE_ROW_Y,
    WIDE_WARNING_FRAME,
};
use crate::glyphs::GlyphFamily;
use crate::layout::{LayoutParams, RowSpan, Spacing};
use crate::settings::RenderConfig;
use crate::thresholds::BatteryTiers;

const HOUR_ROW: RowSpan = RowSpan {
    y: HOUR_ROW_Y,
    height: HOUR_ROW_HEIGHT,
};

/// Everything that differs between face variants.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct FaceProfile {
    pub name: &'static str,
    pub family: GlyphFamily,
    pub spacing: Spacing,
    pub hour_row: RowSpan,
    pub minute_row: RowSpan,
    pub date_style: DateStyle,
    pub battery_tiers: BatteryTiers,
    pub battery_bar: Rectangle,
    pub warning_frame: Rectangle,
    /// Hide the date text while the warning is shown.
    pub warning_hides_date: bool,
    /// Accept settings from inbound messages and persisted storage.
    pub configurable: bool,
}

impl FaceProfile {
    pub const CONFIGURABLE: Self = Self {
        name: "configurable",
        family: GlyphFamily::COMPACT,
        spacing: Spacing::COMPACT,
        hour_row: HOUR_ROW,
        minute_row: HOUR_ROW,
        date_style: DateStyle::Localized,
        battery_tiers: BatteryTiers::STANDARD,
        battery_bar: BATTERY_BAR,
        warning_frame: WARNING_FRAME,
        warning_hides_date: false,
        configurable: true,
    };

    pub const CLASSIC: Self = Self {
        name: "classic",
        family: GlyphFamily::WIDE,
        spacing: Spacing::WIDE,
        hour_row: HOUR_ROW,
        minute_row: RowSpan {
            y: WIDE_MINUTE_ROW_Y,
            height: WIDE_MINUTE_ROW_HEIGHT,
        },
        date_style: DateStyle::PaddedDayFirst,
        battery_tiers: BatteryTiers::STANDARD,
        battery_bar: WIDE_BATTERY_BAR,
        warning_frame: WIDE_WARNING_FRAME,
        warning_hides_date: true,
        configurable: false,
    };

    pub const ALL: [Self; 2] = [Self::CONFIGURABLE, Self::CLASSIC];

    pub fn from_name(name: &str) -> Option<Self> { Self::ALL.into_iter().find(|p| p.name == name) }

    /// Same profile with a different battery tier table.
    pub const fn with_battery_tiers(
        mut self,
        tiers: BatteryTiers,
    ) -> Self {
        self.battery_tiers = tiers;
        self
    }

    /// Layout parameters for the given settings.
    pub const fn layout_params(
        &self,
        config: &RenderConfig,
    ) -> LayoutParams {
        LayoutParams {
            family: self.family,
            spacing: self.spacing,
            hour_row: self.hour_row,
            minute_row: self.minute_row,
            hour_style: config.hour_style,
            minute_style: config.minute_style,
            separator: config.separator,
        }
    }

    /// Largest block width any four digits can produce with this profile.
    pub const fn max_block_width(&self) -> u32 { self.family.max_width() * 4 + self.spacing.reserved }
}

impl Default for FaceProfile {
    fn default() -> Self { Self::CONFIGURABLE }
}

const _: () = assert!(FaceProfile::CONFIGURABLE.max_block_width() <= crate::config::CANVAS_WIDTH);
const _: () = assert!(FaceProfile::CLASSIC.max_block_width() <= crate::config::CANVAS_WIDTH);

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyphs::GlyphStyle;
    use crate::layout::SeparatorStyle;
    use crate::thresholds::{BatteryTier, ChargeState};

    #[test]
    fn test_profile_lookup() {
        assert_eq!(FaceProfile::from_name("classic"), Some(FaceProfile::CLASSIC));
        assert_eq!(FaceProfile::from_name("configurable"), Some(FaceProfile::CONFIGURABLE));
        assert_eq!(FaceProfile::from_name("digital"), None);
    }

    #[test]
    fn test_layout_params_take_config_styles() {
        let config = RenderConfig {
            hour_style: GlyphStyle::Regular,
            minute_style: GlyphStyle::Bold,
            separator: SeparatorStyle::Round,
            ..RenderConfig::default()
        };
        let params = FaceProfile::CONFIGURABLE.layout_params(&config);
        assert_eq!(params.hour_style, GlyphStyle::Regular);
        assert_eq!(params.minute_style, GlyphStyle::Bold);
        assert_eq!(params.separator, SeparatorStyle::Round);
        assert_eq!(params.family, GlyphFamily::COMPACT);
    }

    #[test]
    fn test_battery_tier_override() {
        let profile = FaceProfile::CONFIGURABLE.with_battery_tiers(BatteryTiers::RELAXED);
        assert_eq!(profile.battery_tiers.classify(ChargeState::Level(25)), BatteryTier::Low);
        assert_eq!(FaceProfile::CONFIGURABLE.battery_tiers.classify(ChargeState::Level(25)), BatteryTier::Critical);
    }

    #[test]
    fn test_max_block_widths() {
        assert_eq!(FaceProfile::CONFIGURABLE.max_block_width(), 144);
        assert_eq!(FaceProfile::CLASSIC.max_block_width(), 140);
    }
}
