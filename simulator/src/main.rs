//! Watch face simulator for desktop platforms.
//!
//! Runs the face against a simulated host, plays a scripted scenario and
//! writes one PNG per step into the output directory. Everything the face
//! logs is re-emitted through `tracing`.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod host;
mod scenario;
mod timing;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, ensure};
use chrono::NaiveDateTime;
use clap::{Parser, ValueEnum};
use embedded_graphics_simulator::OutputSettingsBuilder;
use tracing::{Level as TraceLevel, debug, error, info, trace, warn};
use tracing_subscriber::FmtSubscriber;
use watchface_common::log::LogLevel;
use watchface_common::settings::InboundMessage;
use watchface_common::thresholds::BatteryTiers;
use watchface_common::{CycleReport, FaceProfile, Platform, WatchEvent, WatchFace};

use crate::host::SimHost;
use crate::scenario::{Step, showcase};
use crate::timing::SimClock;

/// Face variant selectable from the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum ProfileArg {
    Configurable,
    Classic,
}

/// Display target selectable from the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum PlatformArg {
    Aplite,
    Basalt,
    Chalk,
}

/// Render the watch face through a scripted scenario, one PNG per step
#[derive(Debug, Parser)]
#[command(name = "simulator", version)]
struct Args {
    /// Face variant
    #[arg(long, value_enum, default_value_t = ProfileArg::Configurable)]
    profile: ProfileArg,

    /// Display target
    #[arg(long, value_enum, default_value_t = PlatformArg::Basalt)]
    platform: PlatformArg,

    /// Start time as YYYY-MM-DDTHH:MM (defaults to the local time)
    #[arg(long, value_name = "TIME")]
    start: Option<String>,

    /// Use the 12-hour clock
    #[arg(long)]
    twelve_hour: bool,

    /// System locale identifier reported by the host
    #[arg(long, value_name = "ID", default_value = "en_US")]
    system_locale: String,

    /// Color the battery bar yellow down to 20% instead of 30%
    #[arg(long)]
    relaxed_battery: bool,

    /// Output directory for captured frames
    #[arg(short, long, value_name = "DIR", default_value = "sim-out")]
    out: PathBuf,

    /// Upscale factor for the PNGs
    #[arg(long, default_value_t = 2)]
    scale: u32,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl ProfileArg {
    const fn profile(self) -> FaceProfile {
        match self {
            Self::Configurable => FaceProfile::CONFIGURABLE,
            Self::Classic => FaceProfile::CLASSIC,
        }
    }
}

impl PlatformArg {
    const fn platform(self) -> Platform {
        match self {
            Self::Aplite => Platform::APLITE,
            Self::Basalt => Platform::BASALT,
            Self::Chalk => Platform::CHALK,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { TraceLevel::DEBUG } else { TraceLevel::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    ensure!(args.scale > 0, "scale must be at least 1");
    fs::create_dir_all(&args.out).with_context(|| format!("creating {}", args.out.display()))?;

    let clock = match &args.start {
        Some(text) => SimClock::starting_at(
            NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M").with_context(|| format!("invalid start time {text:?}"))?,
        ),
        None => SimClock::from_local(),
    };

    let mut profile = args.profile.profile();
    if args.relaxed_battery {
        profile = profile.with_battery_tiers(BatteryTiers::RELAXED);
    }
    let platform = args.platform.platform();

    let mut host = SimHost::new(platform, clock, args.system_locale.clone());
    host.use_24h = !args.twelve_hour;

    let mut face = WatchFace::new(host, profile, platform);
    drain_log(&mut face);
    info!(profile = profile.name, platform = platform.name, out = %args.out.display(), "simulator started");

    for (index, (label, step)) in showcase().into_iter().enumerate() {
        let report = run_step(&mut face, &step);
        drain_log(&mut face);

        let vibrations = face.host_mut().take_vibrations();
        if let Some(report) = &report {
            log_report(label, report, vibrations);
        } else {
            debug!(step = label, "no render");
        }

        let path = args.out.join(format!("{index:02}-{label}.png"));
        capture(face.host(), &path, args.scale)?;
    }

    let leaked = face.host().live_placements();
    if leaked > 0 {
        error!(leaked, "placements still live after unload");
    }
    info!("done");
    Ok(())
}

/// Apply one scripted step. Returns the last render cycle it triggered.
fn run_step(
    face: &mut WatchFace<SimHost>,
    step: &Step,
) -> Option<CycleReport> {
    match step {
        Step::Load => face.handle_event(WatchEvent::WindowLoad),
        Step::Unload => face.handle_event(WatchEvent::WindowUnload),
        Step::Ticks(count) => {
            let mut last = None;
            for _ in 0..*count {
                face.host_mut().clock.advance(1);
                last = face.handle_event(WatchEvent::Tick).or(last);
            }
            last
        }
        Step::Connectivity(connected) => {
            face.host_mut().connected = *connected;
            face.handle_event(WatchEvent::ConnectivityChange)
        }
        Step::Battery { percent, charging } => {
            let host = face.host_mut();
            host.battery_percent = *percent;
            host.charging = *charging;
            None
        }
        Step::Message(entries) => face.handle_event(WatchEvent::ConfigMessage(InboundMessage::new(entries))),
        Step::Dropped(reason) => face.handle_event(WatchEvent::MessageDropped(*reason)),
    }
}

/// Forward buffered face log entries to `tracing`.
fn drain_log(face: &mut WatchFace<SimHost>) {
    while let Some(entry) = face.log_mut().pop() {
        let message = entry.message.as_str();
        match entry.level {
            LogLevel::Trace => trace!(seq = entry.seq, "{message}"),
            LogLevel::Debug => debug!(seq = entry.seq, "{message}"),
            LogLevel::Info => info!(seq = entry.seq, "{message}"),
            LogLevel::Warn => warn!(seq = entry.seq, "{message}"),
            LogLevel::Error => error!(seq = entry.seq, "{message}"),
        }
    }
}

fn log_report(
    label: &str,
    report: &CycleReport,
    vibrations: u32,
) {
    let time: String = report.digits.as_array().iter().filter_map(|d| d.as_char()).collect();
    info!(
        step = label,
        time = %time,
        date = report.date.as_str(),
        tier = ?report.tier,
        connected = report.connected,
        vibrations,
        "rendered"
    );
}

/// Composite the host layers and save them as a PNG.
fn capture(
    host: &SimHost,
    path: &Path,
    scale: u32,
) -> Result<()> {
    let display = host.compose();
    let settings = OutputSettingsBuilder::new().scale(scale).build();
    display
        .to_rgb_output_image(&settings)
        .save_png(path)
        .with_context(|| format!("writing {}", path.display()))?;
    debug!(path = %path.display(), "frame saved");
    Ok(())
}
