//! Scripted event sequences fed to the face.

use watchface_common::settings::MessageValue;

/// One scripted host action.
#[derive(Clone, Debug)]
pub enum Step {
    Load,
    Unload,
    /// Advance the clock by this many minutes, one tick each.
    Ticks(u32),
    /// Flip the phone connection and notify the face.
    Connectivity(bool),
    /// Change the battery reading (takes effect on the next cycle).
    Battery { percent: u8, charging: bool },
    /// Deliver a settings message.
    Message(Vec<(&'static str, MessageValue<'static>)>),
    /// Report a dropped message with a reason code.
    Dropped(u8),
}

/// A labelled step; the label names the captured frame.
pub type Script = Vec<(&'static str, Step)>;

/// Walk through every feature of the face once.
pub fn showcase() -> Script {
    vec![
        ("load", Step::Load),
        ("tick", Step::Ticks(1)),
        (
            "battery-low",
            Step::Battery {
                percent: 25,
                charging: false,
            },
        ),
        ("tick-low", Step::Ticks(1)),
        (
            "separator",
            Step::Message(vec![
                ("TIME_SEP", MessageValue::Str("roundb")),
                ("MM_IN_BOLD", MessageValue::Str("1")),
                ("HH_IN_BOLD", MessageValue::Str("0")),
            ]),
        ),
        (
            "french",
            Step::Message(vec![("LOCALE", MessageValue::Str("fr")), ("HH_STRIP_ZERO", MessageValue::Str("1"))]),
        ),
        ("disconnect", Step::Connectivity(false)),
        ("still-disconnected", Step::Ticks(1)),
        (
            "repeat-vibration",
            Step::Message(vec![("REPEAT_VIB", MessageValue::Str("1"))]),
        ),
        ("reconnect", Step::Connectivity(true)),
        (
            "charging",
            Step::Battery {
                percent: 25,
                charging: true,
            },
        ),
        ("tick-charging", Step::Ticks(1)),
        ("unknown-locale", Step::Message(vec![("LOCALE", MessageValue::Str("xx"))])),
        ("dropped", Step::Dropped(8)),
        ("hour-later", Step::Ticks(60)),
        ("unload", Step::Unload),
    ]
}
