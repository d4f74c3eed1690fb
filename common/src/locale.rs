//! Date locales: weekday/month abbreviation tables and field order.
//!
//! Tables already carry each language's casing; nothing is capitalized at
//! render time.

/// Supported date languages.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Locale {
    #[default]
    En = 0,
    Fr = 1,
    De = 2,
    Es = 3,
    It = 4,
}

/// Sunday-first weekday abbreviations.
const DAYS: [[&str; 7]; 5] = [
    ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    ["Dim", "Lun", "Mar", "Mer", "Jeu", "Ven", "Sam"],
    ["Son", "Mon", "Die", "Mit", "Don", "Fre", "Sam"],
    ["Dom", "Lun", "Mar", "Mié", "Jue", "Vie", "Sab"],
    ["Dom", "Lun", "Mar", "Mer", "Gio", "Ven", "Sab"],
];

/// January-first month abbreviations.
const MONTHS: [[&str; 12]; 5] = [
    ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"],
    ["Jan", "Fev", "Mar", "Avr", "Mai", "Jui", "Jul", "Aou", "Sep", "Oct", "Nov", "Dec"],
    ["Jan", "Feb", "Mrz", "Apr", "Mai", "Jun", "Jul", "Aug", "Sep", "Okt", "Nov", "Dez"],
    ["Ene", "Feb", "Mar", "Abr", "May", "Jun", "Jul", "Ago", "Sep", "Oct", "Nov", "Dic"],
    ["Gen", "Feb", "Mar", "Apr", "Mag", "Giu", "Lug", "Ago", "Set", "Ott", "Nov", "Dic"],
];

impl Locale {
    pub const ALL: [Self; 5] = [Self::En, Self::Fr, Self::De, Self::Es, Self::It];

    /// Persisted index → locale.
    pub const fn from_index(index: i32) -> Option<Self> {
        match index {
            0 => Some(Self::En),
            1 => Some(Self::Fr),
            2 => Some(Self::De),
            3 => Some(Self::Es),
            4 => Some(Self::It),
            _ => None,
        }
    }

    /// Index written to persistent storage.
    #[inline]
    pub const fn index(self) -> i32 { self as i32 }

    /// Two-letter code used by configuration messages.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "en" => Some(Self::En),
            "fr" => Some(Self::Fr),
            "de" => Some(Self::De),
            "es" => Some(Self::Es),
            "it" => Some(Self::It),
            _ => None,
        }
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Fr => "fr",
            Self::De => "de",
            Self::Es => "es",
            Self::It => "it",
        }
    }

    /// Map the host's system locale identifier. Only the exact identifiers
    /// below are recognized; everything else is English.
    pub fn from_system(identifier: &str) -> Self {
        match identifier {
            "fr_FR" => Self::Fr,
            "de_DE" => Self::De,
            "es_ES" => Self::Es,
            "it_IT" => Self::It,
            _ => Self::En,
        }
    }

    /// Weekday abbreviation, `0` = Sunday. Out of range wraps.
    pub const fn weekday(
        self,
        days_from_sunday: u32,
    ) -> &'static str {
        DAYS[self as usize][(days_from_sunday % 7) as usize]
    }

    /// Month abbreviation, `0` = January. Out of range wraps.
    pub const fn month(
        self,
        month0: u32,
    ) -> &'static str {
        MONTHS[self as usize][(month0 % 12) as usize]
    }

    /// English puts the month before the day number; every other locale
    /// puts the day number first.
    #[inline]
    pub const fn month_before_day(self) -> bool { matches!(self, Self::En) }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_index(locale.index()), Some(locale));
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
        assert_eq!(Locale::from_index(5), None);
        assert_eq!(Locale::from_index(-1), None);
    }

    #[test]
    fn test_system_locale_mapping() {
        assert_eq!(Locale::from_system("fr_FR"), Locale::Fr);
        assert_eq!(Locale::from_system("de_DE"), Locale::De);
        assert_eq!(Locale::from_system("es_ES"), Locale::Es);
        assert_eq!(Locale::from_system("it_IT"), Locale::It);
        assert_eq!(Locale::from_system("en_US"), Locale::En);
        assert_eq!(Locale::from_system("fr_CA"), Locale::En, "only exact identifiers are recognized");
        assert_eq!(Locale::from_system(""), Locale::En);
    }

    #[test]
    fn test_tables_keep_language_casing() {
        assert_eq!(Locale::Es.weekday(3), "Mié");
        assert_eq!(Locale::It.month(5), "Giu");
        assert_eq!(Locale::De.month(2), "Mrz");
        assert_eq!(Locale::Fr.weekday(0), "Dim");
    }

    #[test]
    fn test_field_order() {
        assert!(Locale::En.month_before_day());
        for locale in [Locale::Fr, Locale::De, Locale::Es, Locale::It] {
            assert!(!locale.month_before_day());
        }
    }
}
