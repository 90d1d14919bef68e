use serde::Serialize;

use crate::preset::{derive_preset, TimePreset};

pub const MAX_HOUR: u32 = 24;
pub const MAX_MINUTE: u32 = 59;

/// Wheel selection; `hour` in `0..=MAX_HOUR`, `minute` in `0..=MAX_MINUTE`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct HourMinute {
    pub hour: u32,
    pub minute: u32,
}

impl HourMinute {
    pub const ZERO: Self = Self { hour: 0, minute: 0 };

    pub fn new(hour: u32, minute: u32) -> Self {
        Self {
            hour: clamp_hour(hour),
            minute: clamp_minute(minute),
        }
    }

    /// Splits a bound duration into wheel positions.
    ///
    /// Fractional minutes are truncated. Negative and NaN durations seed
    /// `0:00`; anything past `MAX_HOUR` hours is pinned to `MAX_HOUR` while
    /// keeping the minute remainder.
    pub fn from_minutes(minutes: f64) -> Self {
        if !(minutes >= 0.0) {
            log::warn!("Duration {minutes} is not a non-negative number, using 0 minutes");
            return Self::ZERO;
        }

        let whole = minutes as u64;
        let hour = whole / 60;
        let minute = (whole % 60) as u32;
        if hour > u64::from(MAX_HOUR) {
            log::warn!("Duration {minutes} exceeds {MAX_HOUR} hours, clamping the hour wheel");
            return Self {
                hour: MAX_HOUR,
                minute,
            };
        }

        Self {
            hour: hour as u32,
            minute,
        }
    }

    pub fn from_preset(preset: TimePreset) -> Self {
        let (hour, minute) = preset.hour_minute();
        Self { hour, minute }
    }

    /// Saturates instead of overflowing for fields set past the wheel range.
    pub fn total_minutes(&self) -> u32 {
        self.hour.saturating_mul(60).saturating_add(self.minute)
    }

    pub fn preset(&self) -> Option<TimePreset> {
        derive_preset(self.total_minutes())
    }
}

pub fn clamp_hour(hour: u32) -> u32 {
    hour.min(MAX_HOUR)
}

pub fn clamp_minute(minute: u32) -> u32 {
    minute.min(MAX_MINUTE)
}

/// Human readable form used by the host readout and the CLI.
pub fn format_duration(total_minutes: u32) -> String {
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;
    match (hours, minutes) {
        (0, minutes) => format!("{minutes} min"),
        (hours, 0) => format!("{hours} h"),
        (hours, minutes) => format!("{hours} h {minutes} min"),
    }
}
