//! Leveled event log owned by the watch face controller.
//!
//! The core has no global state, so instead of a static buffer behind a mutex
//! every [`WatchFace`](crate::render::WatchFace) carries its own [`EventLog`].
//! Hosts drain it after each event and forward the entries wherever they
//! log (the simulator re-emits them through `tracing`).
//!
//! With the `defmt` feature enabled every pushed entry is also sent to
//! `defmt` at the matching level.
//!
//! # Usage
//!
//! ```ignore
//! use watchface_common::{log_info, log_warn};
//!
//! log_info!(log, "window loaded");
//! log_warn!(log, "message dropped, reason {}", reason);
//! ```

use heapless::{Deque, String};

/// Maximum number of entries kept before the oldest is dropped.
pub const LOG_ENTRIES: usize = 16;

/// Maximum characters per log message.
pub const LOG_MSG_LEN: usize = 48;

/// Log severity level.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    #[default]
    Info = 2,
    Warn = 3,
    Error = 4,
}

/// One log line.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct LogEntry {
    pub level: LogLevel,
    /// Message, truncated to `LOG_MSG_LEN - 1` characters.
    pub message: String<LOG_MSG_LEN>,
    /// Monotonic push counter; gaps show how many entries were dropped.
    pub seq: u32,
}

impl LogEntry {
    pub fn new(
        level: LogLevel,
        message: &str,
        seq: u32,
    ) -> Self {
        let mut msg: String<LOG_MSG_LEN> = String::new();
        for (i, c) in message.chars().enumerate() {
            if i >= LOG_MSG_LEN - 1 {
                break;
            }
            // A multi-byte char can still overflow near the end
            if msg.push(c).is_err() {
                break;
            }
        }
        Self {
            level,
            message: msg,
            seq,
        }
    }
}

/// Ring buffer of the most recent `LOG_ENTRIES` entries.
#[derive(Debug, Default)]
pub struct EventLog {
    entries: Deque<LogEntry, LOG_ENTRIES>,
    next_seq: u32,
}

impl EventLog {
    pub const fn new() -> Self {
        Self {
            entries: Deque::new(),
            next_seq: 0,
        }
    }

    /// Append an entry. If the buffer is full the oldest entry is dropped.
    pub fn push(
        &mut self,
        level: LogLevel,
        message: &str,
    ) {
        if self.entries.is_full() {
            self.entries.pop_front();
        }
        let entry = LogEntry::new(level, message, self.next_seq);
        self.next_seq = self.next_seq.wrapping_add(1);

        #[cfg(feature = "defmt")]
        match level {
            LogLevel::Trace => defmt::trace!("{=str}", entry.message.as_str()),
            LogLevel::Debug => defmt::debug!("{=str}", entry.message.as_str()),
            LogLevel::Info => defmt::info!("{=str}", entry.message.as_str()),
            LogLevel::Warn => defmt::warn!("{=str}", entry.message.as_str()),
            LogLevel::Error => defmt::error!("{=str}", entry.message.as_str()),
        }

        self.entries.push_back(entry).ok();
    }

    /// Remove and return the oldest entry.
    pub fn pop(&mut self) -> Option<LogEntry> { self.entries.pop_front() }

    /// Iterate over entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &LogEntry> { self.entries.iter() }

    /// Whether any entry at `level` or above is buffered.
    pub fn contains_level(
        &self,
        level: LogLevel,
    ) -> bool {
        self.entries.iter().any(|e| e.level >= level)
    }

    #[inline]
    pub fn len(&self) -> usize { self.entries.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn clear(&mut self) { self.entries.clear(); }
}

/// Format a message and push it at the given level.
#[macro_export]
macro_rules! log_at {
    ($log:expr, $level:expr, $($arg:tt)*) => {{
        use core::fmt::Write;
        let mut buf: heapless::String<{ $crate::log::LOG_MSG_LEN }> = heapless::String::new();
        let _ = write!(buf, $($arg)*);
        $log.push($level, buf.as_str());
    }};
}

/// Log a message at Debug level.
#[macro_export]
macro_rules! log_debug {
    ($log:expr, $($arg:tt)*) => {
        $crate::log_at!($log, $crate::log::LogLevel::Debug, $($arg)*)
    };
}

/// Log a message at Info level.
#[macro_export]
macro_rules! log_info {
    ($log:expr, $($arg:tt)*) => {
        $crate::log_at!($log, $crate::log::LogLevel::Info, $($arg)*)
    };
}

/// Log a message at Warn level.
#[macro_export]
macro_rules! log_warn {
    ($log:expr, $($arg:tt)*) => {
        $crate::log_at!($log, $crate::log::LogLevel::Warn, $($arg)*)
    };
}

/// Log a message at Error level.
#[macro_export]
macro_rules! log_error {
    ($log:expr, $($arg:tt)*) => {
        $crate::log_at!($log, $crate::log::LogLevel::Error, $($arg)*)
    };
}

// =============================================================================
// Unit Tests
// =============================================================================
