use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Error;

pub const CONFIG_FILE_NAME: &str = "time_picker.toml";

const DEFAULT_INITIAL_MINUTES: f64 = 5.0;
const DEFAULT_SELECTED_FONT_SIZE: f32 = 16.0;
const DEFAULT_HIGHLIGHT_ROUNDING: f32 = 8.0;
const DEFAULT_PADDING: f32 = 16.0;
const DEFAULT_ANIMATION_SECONDS: f32 = 0.35;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorConfig {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

pub fn color_config_to_rgba(color: ColorConfig) -> [u8; 4] {
    [color.r, color.g, color.b, color.a]
}

pub fn rgba_to_color_config(rgba: [u8; 4]) -> ColorConfig {
    ColorConfig {
        r: rgba[0],
        g: rgba[1],
        b: rgba[2],
        a: rgba[3],
    }
}

/// Appearance of a single picker. Owned by the widget that renders it; no
/// field here is ever written into shared toolkit defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    #[serde(default = "StyleConfig::default_selected_segment")]
    pub selected_segment: ColorConfig,
    #[serde(default = "StyleConfig::default_segment_background")]
    pub segment_background: ColorConfig,
    #[serde(default = "StyleConfig::default_selected_text")]
    pub selected_text: ColorConfig,
    #[serde(default = "StyleConfig::default_highlight")]
    pub highlight: ColorConfig,
    #[serde(default = "StyleConfig::default_selected_font_size")]
    pub selected_font_size: f32,
    #[serde(default = "StyleConfig::default_highlight_rounding")]
    pub highlight_rounding: f32,
    #[serde(default = "StyleConfig::default_padding")]
    pub padding: f32,
    #[serde(default = "StyleConfig::default_animation_seconds")]
    pub animation_seconds: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            selected_segment: Self::default_selected_segment(),
            segment_background: Self::default_segment_background(),
            selected_text: Self::default_selected_text(),
            highlight: Self::default_highlight(),
            selected_font_size: Self::default_selected_font_size(),
            highlight_rounding: Self::default_highlight_rounding(),
            padding: Self::default_padding(),
            animation_seconds: Self::default_animation_seconds(),
        }
    }
}

impl StyleConfig {
    /// White at 70% opacity.
    pub const fn default_selected_segment() -> ColorConfig {
        ColorConfig {
            r: 255,
            g: 255,
            b: 255,
            a: 179,
        }
    }

    /// Black at 30% opacity.
    pub const fn default_segment_background() -> ColorConfig {
        ColorConfig {
            r: 0,
            g: 0,
            b: 0,
            a: 77,
        }
    }

    pub const fn default_selected_text() -> ColorConfig {
        ColorConfig {
            r: 0,
            g: 0,
            b: 0,
            a: 255,
        }
    }

    /// System blue at 50% opacity.
    pub const fn default_highlight() -> ColorConfig {
        ColorConfig {
            r: 0,
            g: 122,
            b: 255,
            a: 128,
        }
    }

    pub const fn default_selected_font_size() -> f32 {
        DEFAULT_SELECTED_FONT_SIZE
    }

    pub const fn default_highlight_rounding() -> f32 {
        DEFAULT_HIGHLIGHT_ROUNDING
    }

    pub const fn default_padding() -> f32 {
        DEFAULT_PADDING
    }

    pub const fn default_animation_seconds() -> f32 {
        DEFAULT_ANIMATION_SECONDS
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PickerConfig {
    pub initial_minutes: f64,
    pub publish_on_preset: bool,
    pub style: StyleConfig,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            initial_minutes: DEFAULT_INITIAL_MINUTES,
            publish_on_preset: true,
            style: StyleConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
struct ConfigFile {
    #[serde(default)]
    picker: PickerSection,
    #[serde(default)]
    style: StyleConfig,
}

#[derive(Debug, Deserialize, Serialize)]
struct PickerSection {
    #[serde(default = "default_initial_minutes")]
    initial_minutes: f64,
    #[serde(default = "default_publish_on_preset")]
    publish_on_preset: bool,
}

impl Default for PickerSection {
    fn default() -> Self {
        Self {
            initial_minutes: default_initial_minutes(),
            publish_on_preset: default_publish_on_preset(),
        }
    }
}

fn default_initial_minutes() -> f64 {
    DEFAULT_INITIAL_MINUTES
}

fn default_publish_on_preset() -> bool {
    true
}

impl From<ConfigFile> for PickerConfig {
    fn from(file: ConfigFile) -> Self {
        let ConfigFile { picker, style } = file;
        Self {
            initial_minutes: picker.initial_minutes,
            publish_on_preset: picker.publish_on_preset,
            style,
        }
    }
}

impl PickerConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, Error> {
        let config_file =
            toml::from_str::<ConfigFile>(contents).map_err(|e| Error::ConfigError(e.to_string()))?;
        Ok(config_file.into())
    }

    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        let config_file = ConfigFile {
            picker: PickerSection {
                initial_minutes: self.initial_minutes,
                publish_on_preset: self.publish_on_preset,
            },
            style: self.style,
        };

        toml::to_string_pretty(&config_file)
    }
}

pub fn load_config(path: &Path) -> Result<PickerConfig, Error> {
    let str = std::fs::read_to_string(path)?;
    PickerConfig::from_toml_str(&str)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        let config = PickerConfig::from_toml_str("").expect("parse empty config");
        assert_eq!(config, PickerConfig::default());
    }

    #[test]
    fn partial_style_keeps_remaining_defaults() {
        let config = PickerConfig::from_toml_str(
            r#"
            [picker]
            initial_minutes = 125

            [style]
            padding = 4.0
            highlight = { r = 255, g = 0, b = 0, a = 255 }
            "#,
        )
        .expect("parse config");

        assert_eq!(config.initial_minutes, 125.0);
        assert!(config.publish_on_preset);
        assert_eq!(config.style.padding, 4.0);
        assert_eq!(
            color_config_to_rgba(config.style.highlight),
            [255, 0, 0, 255]
        );
        assert_eq!(
            config.style.selected_segment,
            StyleConfig::default_selected_segment()
        );
        assert_eq!(config.style.animation_seconds, DEFAULT_ANIMATION_SECONDS);
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let err = PickerConfig::from_toml_str("[picker]\ninitial_minutes = \"soon\"")
            .expect_err("string minutes must be rejected");
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn serialized_config_parses_back() {
        let mut config = PickerConfig::default();
        config.initial_minutes = 30.0;
        config.publish_on_preset = false;
        config.style.selected_text = rgba_to_color_config([10, 20, 30, 40]);

        let text = config.to_toml_string().expect("serialize config");
        assert!(text.contains("[picker]"));
        assert_eq!(PickerConfig::from_toml_str(&text).expect("parse"), config);
    }
}
