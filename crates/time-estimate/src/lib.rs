//! Duration model shared by the time picker frontends.
//!
//! Holds the quick suggestion presets, the exact-match rule that maps a total
//! number of minutes onto them, the hour/minute split used to seed the wheels,
//! and the TOML configuration for a picker's appearance.

pub mod config;
pub mod duration;
pub mod preset;

pub use config::{
    color_config_to_rgba, load_config, rgba_to_color_config, ColorConfig, PickerConfig,
    StyleConfig, CONFIG_FILE_NAME,
};
pub use duration::{
    clamp_hour, clamp_minute, format_duration, HourMinute, MAX_HOUR, MAX_MINUTE,
};
pub use preset::{derive_preset, highlight_fraction, TimePreset, PRESETS};

#[derive(Debug)]
pub enum Error {
    IOError(std::io::Error),
    ConfigError(String),
    UnknownPreset(String),
    ArgumentError(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::IOError(err) => write!(f, "{err:?}"),
            Error::ConfigError(err) => write!(f, "{err}"),
            Error::ArgumentError(err) => write!(f, "{err}"),
            Error::UnknownPreset(label) => {
                let known = PRESETS
                    .iter()
                    .map(|preset| preset.label())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "Unknown preset '{label}', expected one of: {known}")
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IOError(err)
    }
}
