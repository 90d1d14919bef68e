use serde::{Deserialize, Serialize};

use crate::Error;

/// Quick suggestions offered next to the hour/minute wheels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimePreset {
    FiveMin,
    QuarterHour,
    HalfHour,
    OneHour,
    ThreeHours,
}

/// Presets in the order they are shown, left to right.
pub const PRESETS: [TimePreset; 5] = [
    TimePreset::FiveMin,
    TimePreset::QuarterHour,
    TimePreset::HalfHour,
    TimePreset::OneHour,
    TimePreset::ThreeHours,
];

impl TimePreset {
    pub const fn minutes(self) -> u32 {
        match self {
            TimePreset::FiveMin => 5,
            TimePreset::QuarterHour => 15,
            TimePreset::HalfHour => 30,
            TimePreset::OneHour => 60,
            TimePreset::ThreeHours => 180,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            TimePreset::FiveMin => "5 Min",
            TimePreset::QuarterHour => "15 Min",
            TimePreset::HalfHour => "30 Min",
            TimePreset::OneHour => "1 Hr",
            TimePreset::ThreeHours => "3 Hr",
        }
    }

    pub const fn id(self) -> &'static str {
        match self {
            TimePreset::FiveMin => "five_min",
            TimePreset::QuarterHour => "quarter_hour",
            TimePreset::HalfHour => "half_hour",
            TimePreset::OneHour => "one_hour",
            TimePreset::ThreeHours => "three_hours",
        }
    }

    /// 1-based position in [`PRESETS`].
    pub const fn slot(self) -> usize {
        match self {
            TimePreset::FiveMin => 1,
            TimePreset::QuarterHour => 2,
            TimePreset::HalfHour => 3,
            TimePreset::OneHour => 4,
            TimePreset::ThreeHours => 5,
        }
    }

    /// Canonical `(hour, minute)` the wheels jump to when the preset is tapped.
    pub const fn hour_minute(self) -> (u32, u32) {
        match self {
            TimePreset::FiveMin => (0, 5),
            TimePreset::QuarterHour => (0, 15),
            TimePreset::HalfHour => (0, 30),
            TimePreset::OneHour => (1, 0),
            TimePreset::ThreeHours => (3, 0),
        }
    }

    /// Accepts either the displayed label (`"1 Hr"`) or the id (`one_hour`).
    pub fn from_label(value: &str) -> Result<Self, Error> {
        let trimmed = value.trim();
        PRESETS
            .iter()
            .copied()
            .find(|preset| {
                preset.label().eq_ignore_ascii_case(trimmed)
                    || preset.id().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| Error::UnknownPreset(trimmed.to_string()))
    }
}

impl std::fmt::Display for TimePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Exact-match lookup of the preset for a total number of minutes.
///
/// There is no nearest-match: 61 minutes has no preset even though it is one
/// minute away from [`TimePreset::OneHour`].
pub fn derive_preset(total_minutes: u32) -> Option<TimePreset> {
    PRESETS
        .iter()
        .copied()
        .find(|preset| preset.minutes() == total_minutes)
}

/// Share of the segmented control covered by the highlight bar.
pub fn highlight_fraction(preset: Option<TimePreset>) -> f32 {
    match preset {
        Some(preset) => preset.slot() as f32 / PRESETS.len() as f32,
        None => 0.0,
    }
}
