//! Digit-glyph watch face core.
//!
//! Platform-agnostic logic shared by every host (the desktop simulator, or a
//! firmware event loop):
//!
//! - [`glyphs`]: digit values, glyph weights, resource handles and widths
//! - [`clock`]: wall clock → four digit slots and a localized date line
//! - [`locale`]: weekday/month tables and date field order
//! - [`layout`]: centered digit placement and separator dots
//! - [`settings`]: persisted settings and inbound configuration messages
//! - [`render`]: the [`WatchFace`](render::WatchFace) controller and its render cycle
//! - [`host`]: the interface the host runtime implements
//! - [`profile`]: face variants; [`config`]: geometry and platforms
//! - [`thresholds`]: battery tiers; [`colors`], [`styles`], [`widgets`]: drawing
//! - [`log`]: controller-owned event log and `log_*!` macros
//!
//! # no_std Compatibility
//!
//! This crate is `no_std` outside of tests and never allocates.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod log;

pub mod clock;
pub mod colors;
pub mod config;
pub mod glyphs;
pub mod host;
pub mod layout;
pub mod locale;
pub mod profile;
pub mod render;
pub mod settings;
pub mod styles;
pub mod thresholds;
pub mod widgets;

// Re-export commonly used items
pub use config::Platform;
pub use host::{CanvasScene, Host};
pub use profile::FaceProfile;
pub use render::{CycleReport, WatchEvent, WatchFace};
pub use settings::{InboundMessage, MemoryStore, MessageValue};
