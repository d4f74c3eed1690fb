//! Battery charge thresholds for the color bar.
//!
//! The face variants disagree on where the "low" band starts (30% on the
//! compact configurable face, 20% on others), so the tiers are a table rather
//! than a single set of constants. Both presets are validated at compile time.
//!
//! # Usage
//!
//! ```ignore
//! use watchface_common::thresholds::{BatteryTiers, BatteryTier};
//!
//! let tier = BatteryTiers::STANDARD.classify(charge);
//! ```

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{BLUE, GREEN, RED, WHITE, YELLOW};

// =============================================================================
// Battery Charge Thresholds
// =============================================================================

/// Charge (%) where the bar turns green.
pub const BATT_FULL: u8 = 80;

/// Charge (%) where the bar turns blue.
pub const BATT_GOOD: u8 = 50;

/// Low band start used by most faces.
pub const BATT_LOW: u8 = 30;

/// Low band start used by the relaxed preset.
pub const BATT_LOW_RELAXED: u8 = 20;

const _: () = assert!(BATT_LOW < BATT_GOOD);
const _: () = assert!(BATT_LOW_RELAXED < BATT_GOOD);
const _: () = assert!(BATT_GOOD < BATT_FULL);
const _: () = assert!(BATT_FULL <= 100);

// =============================================================================
// Battery Charge
// =============================================================================

/// Battery state as reported by the host for one render cycle.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChargeState {
    /// Plugged in; the bar is drawn in the neutral color.
    Charging,
    /// Discharging at the given percentage.
    Level(u8),
}

impl ChargeState {
    /// Build from a raw host reading.
    pub const fn from_reading(
        percent: u8,
        is_charging: bool,
    ) -> Self {
        if is_charging { Self::Charging } else { Self::Level(percent) }
    }
}

/// Color band of the battery bar.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BatteryTier {
    /// Charging, or a display without color.
    Neutral,
    Full,
    Good,
    Low,
    Critical,
}

impl BatteryTier {
    /// Fill color for this tier.
    pub const fn color(self) -> Rgb565 {
        match self {
            Self::Neutral => WHITE,
            Self::Full => GREEN,
            Self::Good => BLUE,
            Self::Low => YELLOW,
            Self::Critical => RED,
        }
    }
}

/// Ordered charge thresholds (`full > good > low`).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BatteryTiers {
    pub full: u8,
    pub good: u8,
    pub low: u8,
}

impl BatteryTiers {
    /// 80 / 50 / 30.
    pub const STANDARD: Self = Self::new(BATT_FULL, BATT_GOOD, BATT_LOW);

    /// 80 / 50 / 20.
    pub const RELAXED: Self = Self::new(BATT_FULL, BATT_GOOD, BATT_LOW_RELAXED);

    /// Build a tier table. Panics at compile time when used in a `const`
    /// with thresholds out of order.
    pub const fn new(
        full: u8,
        good: u8,
        low: u8,
    ) -> Self {
        assert!(low < good && good < full, "battery thresholds must be strictly descending");
        Self { full, good, low }
    }

    /// Pick the tier for a charge state.
    pub const fn classify(
        &self,
        charge: ChargeState,
    ) -> BatteryTier {
        match charge {
            ChargeState::Charging => BatteryTier::Neutral,
            ChargeState::Level(pct) if pct >= self.full => BatteryTier::Full,
            ChargeState::Level(pct) if pct >= self.good => BatteryTier::Good,
            ChargeState::Level(pct) if pct >= self.low => BatteryTier::Low,
            ChargeState::Level(_) => BatteryTier::Critical,
        }
    }
}

impl Default for BatteryTiers {
    fn default() -> Self { Self::STANDARD }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_tiers() {
        let tiers = BatteryTiers::STANDARD;
        assert_eq!(tiers.classify(ChargeState::Level(100)), BatteryTier::Full);
        assert_eq!(tiers.classify(ChargeState::Level(80)), BatteryTier::Full);
        assert_eq!(tiers.classify(ChargeState::Level(79)), BatteryTier::Good);
        assert_eq!(tiers.classify(ChargeState::Level(50)), BatteryTier::Good);
        assert_eq!(tiers.classify(ChargeState::Level(49)), BatteryTier::Low);
        assert_eq!(tiers.classify(ChargeState::Level(30)), BatteryTier::Low);
        assert_eq!(tiers.classify(ChargeState::Level(29)), BatteryTier::Critical);
        assert_eq!(tiers.classify(ChargeState::Level(0)), BatteryTier::Critical);
    }

    #[test]
    fn test_relaxed_low_band() {
        let tiers = BatteryTiers::RELAXED;
        assert_eq!(tiers.classify(ChargeState::Level(25)), BatteryTier::Low, "25% is low, not critical, at 20%");
        assert_eq!(tiers.classify(ChargeState::Level(20)), BatteryTier::Low);
        assert_eq!(tiers.classify(ChargeState::Level(19)), BatteryTier::Critical);
    }

    #[test]
    fn test_charging_is_neutral() {
        for tiers in [BatteryTiers::STANDARD, BatteryTiers::RELAXED] {
            assert_eq!(tiers.classify(ChargeState::Charging), BatteryTier::Neutral);
        }
        assert_eq!(BatteryTier::Neutral.color(), WHITE);
    }

    #[test]
    fn test_from_reading_prefers_charging_flag() {
        assert_eq!(ChargeState::from_reading(10, true), ChargeState::Charging);
        assert_eq!(ChargeState::from_reading(10, false), ChargeState::Level(10));
    }

    #[test]
    fn test_tier_colors_distinct() {
        let colors = [
            BatteryTier::Full.color(),
            BatteryTier::Good.color(),
            BatteryTier::Low.color(),
            BatteryTier::Critical.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    #[should_panic(expected = "strictly descending")]
    fn test_unordered_tiers_rejected() {
        let _ = BatteryTiers::new(50, 80, 20);
    }
}
