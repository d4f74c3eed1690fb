//! Persisted face settings and inbound configuration messages.
//!
//! Settings live in the host's key/value store, one key per option, and are
//! read back in full after every change. Inbound messages carry a handful of
//! named fields, each as a string (from the phone's settings page) or an
//! integer. Decoding never fails: anything outside a field's domain resolves
//! to that field's default.
//!
//! # Decoding Rules
//!
//! | Field           | String                                    | Integer        |
//! |-----------------|-------------------------------------------|----------------|
//! | `HH_IN_BOLD`    | `"0"` → regular, else bold                | `!= 0` → bold  |
//! | `MM_IN_BOLD`    | `"1"` → bold, else regular                | `!= 0` → bold  |
//! | `LOCALE`        | `en fr de es it`, else key deleted        | locale index   |
//! | `HH_STRIP_ZERO` | `"0"` → off, else on                      | `!= 0` → on    |
//! | `TIME_SEP`      | `square round squareb roundb`, else none  | style index    |
//! | `REPEAT_VIB`    | `"1"` → on, else off                      | `!= 0` → on    |
//!
//! A deleted `LOCALE` key makes [`ConfigurationStore::load`] fall back to the
//! host's system locale. An unrecognized `LOCALE` value deletes the key too,
//! so it also clears an earlier explicit choice such as `"fr"`.

use core::fmt;

use heapless::LinearMap;

use crate::glyphs::GlyphStyle;
use crate::layout::SeparatorStyle;
use crate::locale::Locale;
use crate::log::EventLog;
use crate::{log_debug, log_info, log_warn};

// =============================================================================
// Keys
// =============================================================================

/// One persisted option. The discriminant is the storage key.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum SettingKey {
    HourBold = 0,
    MinuteBold = 1,
    Locale = 2,
    StripHourZero = 3,
    TimeSeparator = 4,
    RepeatVibration = 5,
}

impl SettingKey {
    pub const ALL: [Self; 6] = [
        Self::HourBold,
        Self::MinuteBold,
        Self::Locale,
        Self::StripHourZero,
        Self::TimeSeparator,
        Self::RepeatVibration,
    ];

    /// Storage key id.
    #[inline]
    pub const fn id(self) -> u32 { self as u32 }

    /// Field name used in inbound messages.
    pub const fn message_name(self) -> &'static str {
        match self {
            Self::HourBold => "HH_IN_BOLD",
            Self::MinuteBold => "MM_IN_BOLD",
            Self::Locale => "LOCALE",
            Self::StripHourZero => "HH_STRIP_ZERO",
            Self::TimeSeparator => "TIME_SEP",
            Self::RepeatVibration => "REPEAT_VIB",
        }
    }

    pub fn from_message_name(name: &str) -> Option<Self> { Self::ALL.into_iter().find(|k| k.message_name() == name) }
}

// =============================================================================
// Key/Value Store
// =============================================================================

/// Host persistent storage, keyed by [`SettingKey::id`].
///
/// Reads of a missing key return `false` / `0`; callers check
/// [`exists`](Self::exists) first when absence matters.
pub trait KeyValueStore {
    fn exists(
        &self,
        key: u32,
    ) -> bool;

    fn read_bool(
        &self,
        key: u32,
    ) -> bool;

    fn read_int(
        &self,
        key: u32,
    ) -> i32;

    fn write_bool(
        &mut self,
        key: u32,
        value: bool,
    );

    fn write_int(
        &mut self,
        key: u32,
        value: i32,
    );

    fn delete(
        &mut self,
        key: u32,
    );
}

/// A value held by [`MemoryStore`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StoredValue {
    Bool(bool),
    Int(i32),
}

/// Slots in [`MemoryStore`]; one per setting plus headroom.
pub const MEMORY_STORE_CAPACITY: usize = 8;

/// Fixed-capacity in-memory store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: LinearMap<u32, StoredValue, MEMORY_STORE_CAPACITY>,
    writes: u32,
}

impl MemoryStore {
    pub const fn new() -> Self {
        Self {
            values: LinearMap::new(),
            writes: 0,
        }
    }

    /// Raw stored value.
    pub fn get(
        &self,
        key: u32,
    ) -> Option<StoredValue> {
        self.values.get(&key).copied()
    }

    /// Number of writes and deletes performed so far.
    #[inline]
    pub const fn write_count(&self) -> u32 { self.writes }

    #[inline]
    pub fn len(&self) -> usize { self.values.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    fn insert(
        &mut self,
        key: u32,
        value: StoredValue,
    ) {
        self.writes = self.writes.wrapping_add(1);
        // Full map: the write is lost, like a host store out of space
        self.values.insert(key, value).ok();
    }
}

impl KeyValueStore for MemoryStore {
    fn exists(
        &self,
        key: u32,
    ) -> bool {
        self.values.contains_key(&key)
    }

    fn read_bool(
        &self,
        key: u32,
    ) -> bool {
        match self.get(key) {
            Some(StoredValue::Bool(b)) => b,
            Some(StoredValue::Int(n)) => n != 0,
            None => false,
        }
    }

    fn read_int(
        &self,
        key: u32,
    ) -> i32 {
        match self.get(key) {
            Some(StoredValue::Int(n)) => n,
            Some(StoredValue::Bool(b)) => i32::from(b),
            None => 0,
        }
    }

    fn write_bool(
        &mut self,
        key: u32,
        value: bool,
    ) {
        self.insert(key, StoredValue::Bool(value));
    }

    fn write_int(
        &mut self,
        key: u32,
        value: i32,
    ) {
        self.insert(key, StoredValue::Int(value));
    }

    fn delete(
        &mut self,
        key: u32,
    ) {
        self.writes = self.writes.wrapping_add(1);
        self.values.remove(&key);
    }
}

// =============================================================================
// Inbound Messages
// =============================================================================

/// Value of one inbound message field.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MessageValue<'a> {
    Str(&'a str),
    Int(i32),
}

impl fmt::Display for MessageValue<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Str(s) => write!(f, "\"{s}\""),
            Self::Int(n) => write!(f, "{n}"),
        }
    }
}

/// Named fields received from the phone.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct InboundMessage<'a> {
    entries: &'a [(&'a str, MessageValue<'a>)],
}

impl<'a> InboundMessage<'a> {
    pub const fn new(entries: &'a [(&'a str, MessageValue<'a>)]) -> Self { Self { entries } }

    /// First value carried under `key`'s field name.
    pub fn find(
        &self,
        key: SettingKey,
    ) -> Option<MessageValue<'a>> {
        self.entries.iter().find(|(name, _)| *name == key.message_name()).map(|(_, value)| *value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(&'a str, MessageValue<'a>)> { self.entries.iter() }

    #[inline]
    pub const fn is_empty(&self) -> bool { self.entries.is_empty() }
}

// =============================================================================
// Render Config
// =============================================================================

/// User-facing options that shape rendering.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderConfig {
    pub hour_style: GlyphStyle,
    pub minute_style: GlyphStyle,
    pub locale: Locale,
    pub strip_leading_hour_zero: bool,
    pub separator: SeparatorStyle,
    pub repeat_vibration: bool,
}

impl RenderConfig {
    /// Defaults with the locale taken from the host.
    pub const fn with_locale(locale: Locale) -> Self {
        Self {
            hour_style: GlyphStyle::Bold,
            minute_style: GlyphStyle::Regular,
            locale,
            strip_leading_hour_zero: false,
            separator: SeparatorStyle::None,
            repeat_vibration: false,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self { Self::with_locale(Locale::En) }
}

// =============================================================================
// Configuration Store
// =============================================================================

/// Decodes settings to and from a [`KeyValueStore`].
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct ConfigurationStore {
    /// Locale used when none is persisted.
    pub system_locale: Locale,
}

impl ConfigurationStore {
    pub const fn new(system_locale: Locale) -> Self { Self { system_locale } }

    /// Read every option, using its default when the key is missing.
    pub fn load<S: KeyValueStore + ?Sized>(
        &self,
        store: &S,
        log: &mut EventLog,
    ) -> RenderConfig {
        let mut config = RenderConfig::with_locale(self.system_locale);

        if let Some(bold) = read_bool(store, SettingKey::HourBold) {
            config.hour_style = GlyphStyle::from_bold(bold);
        }
        if let Some(bold) = read_bool(store, SettingKey::MinuteBold) {
            config.minute_style = GlyphStyle::from_bold(bold);
        }
        if let Some(index) = read_int(store, SettingKey::Locale) {
            match Locale::from_index(index) {
                Some(locale) => config.locale = locale,
                None => log_warn!(log, "persisted locale {} invalid, using system", index),
            }
        }
        if let Some(strip) = read_bool(store, SettingKey::StripHourZero) {
            config.strip_leading_hour_zero = strip;
        }
        if let Some(index) = read_int(store, SettingKey::TimeSeparator) {
            match SeparatorStyle::from_index(index) {
                Some(separator) => config.separator = separator,
                None => log_warn!(log, "persisted separator {} invalid", index),
            }
        }
        if let Some(repeat) = read_bool(store, SettingKey::RepeatVibration) {
            config.repeat_vibration = repeat;
        }

        log_debug!(
            log,
            "config hh={} mm={} loc={} sep={}",
            u8::from(config.hour_style.is_bold()),
            u8::from(config.minute_style.is_bold()),
            config.locale.code(),
            config.separator.index()
        );
        config
    }

    /// Persist every recognized field of `message`, then reload.
    ///
    /// Fields are written one at a time in a fixed order; unknown field
    /// names are logged and skipped.
    pub fn apply_inbound_message<S: KeyValueStore + ?Sized>(
        &self,
        store: &mut S,
        message: &InboundMessage<'_>,
        log: &mut EventLog,
    ) -> RenderConfig {
        for key in SettingKey::ALL {
            if let Some(value) = message.find(key) {
                log_debug!(log, "{}={}", key.message_name(), value);
                apply_field(store, key, value, log);
            }
        }

        for (name, _) in message.iter() {
            if SettingKey::from_message_name(name).is_none() {
                log_info!(log, "ignoring field {}", name);
            }
        }

        self.load(store, log)
    }

    /// A message could not be delivered; settings stay as they are.
    pub fn on_message_dropped(
        &self,
        reason: u8,
        log: &mut EventLog,
    ) {
        log_warn!(log, "message dropped, reason code {}", reason);
    }
}

fn read_bool<S: KeyValueStore + ?Sized>(
    store: &S,
    key: SettingKey,
) -> Option<bool> {
    store.exists(key.id()).then(|| store.read_bool(key.id()))
}

fn read_int<S: KeyValueStore + ?Sized>(
    store: &S,
    key: SettingKey,
) -> Option<i32> {
    store.exists(key.id()).then(|| store.read_int(key.id()))
}

/// Bold/on unless the value is exactly off.
fn decode_default_on(value: MessageValue<'_>) -> bool {
    match value {
        MessageValue::Str(s) => s != "0",
        MessageValue::Int(n) => n != 0,
    }
}

/// Off unless the value is exactly on.
fn decode_default_off(value: MessageValue<'_>) -> bool {
    match value {
        MessageValue::Str(s) => s == "1",
        MessageValue::Int(n) => n != 0,
    }
}

fn decode_locale(value: MessageValue<'_>) -> Option<Locale> {
    match value {
        MessageValue::Str(code) => Locale::from_code(code),
        MessageValue::Int(index) => Locale::from_index(index),
    }
}

fn decode_separator(value: MessageValue<'_>) -> Option<SeparatorStyle> {
    match value {
        MessageValue::Str(code) => SeparatorStyle::from_code(code),
        MessageValue::Int(index) => SeparatorStyle::from_index(index),
    }
}

fn apply_field<S: KeyValueStore + ?Sized>(
    store: &mut S,
    key: SettingKey,
    value: MessageValue<'_>,
    log: &mut EventLog,
) {
    let id = key.id();
    match key {
        SettingKey::HourBold | SettingKey::StripHourZero => store.write_bool(id, decode_default_on(value)),
        SettingKey::MinuteBold | SettingKey::RepeatVibration => store.write_bool(id, decode_default_off(value)),
        SettingKey::Locale => match decode_locale(value) {
            Some(locale) => store.write_int(id, locale.index()),
            None => {
                if value != MessageValue::Str("default") {
                    log_info!(log, "locale {} unrecognized, using system", value);
                }
                if store.exists(id) {
                    store.delete(id);
                }
            }
        },
        SettingKey::TimeSeparator => {
            let separator = decode_separator(value).unwrap_or_else(|| {
                if value != MessageValue::Str("none") {
                    log_info!(log, "separator {} unrecognized", value);
                }
                SeparatorStyle::None
            });
            store.write_int(id, separator.index());
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
