use eframe::egui;
use time_estimate::{PickerConfig, TimePreset};
use time_picker_ui::{time_selector, TimeSelectorResponse, TimeSelectorState, TimeSelectorStyle};

use crate::ui::theme;

pub(crate) const PICKER_ID: &str = "estimated_time_picker";

/// Host application owning the bound duration the picker writes to.
pub struct PickerApp {
    estimated_minutes: f64,
    selector: TimeSelectorState,
    config: PickerConfig,
    style: TimeSelectorStyle,
    pub(crate) theme: theme::Palette,
}

impl Default for PickerApp {
    fn default() -> Self {
        Self::from_config(PickerConfig::default())
    }
}

impl PickerApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: PickerConfig) -> Self {
        let app = Self::from_config(config);
        theme::install(&cc.egui_ctx, &app.theme);
        app
    }

    pub fn from_config(config: PickerConfig) -> Self {
        let estimated_minutes = config.initial_minutes;
        let selector = TimeSelectorState::new(estimated_minutes)
            .with_publish_on_preset(config.publish_on_preset);
        let style = TimeSelectorStyle::from_config(&config.style);
        Self {
            estimated_minutes,
            selector,
            config,
            style,
            theme: theme::Palette::default(),
        }
    }

    pub fn estimated_minutes(&self) -> f64 {
        self.estimated_minutes
    }

    pub fn selector(&self) -> &TimeSelectorState {
        &self.selector
    }

    pub fn style(&self) -> &TimeSelectorStyle {
        &self.style
    }

    /// Replaces the bound value from outside the picker.
    pub fn set_estimated_minutes(&mut self, minutes: f64) {
        self.estimated_minutes = minutes;
        self.selector.sync_from_binding(minutes);
    }

    pub fn reset(&mut self) {
        log::info!(
            "Resetting estimate to {} minutes",
            self.config.initial_minutes
        );
        self.set_estimated_minutes(self.config.initial_minutes);
    }

    pub fn apply_preset(&mut self, preset: TimePreset) -> bool {
        self.selector
            .select_preset(Some(preset), &mut self.estimated_minutes)
    }

    pub fn set_hour(&mut self, hour: u32) -> bool {
        self.selector.set_hour(hour, &mut self.estimated_minutes)
    }

    pub fn set_minute(&mut self, minute: u32) -> bool {
        self.selector.set_minute(minute, &mut self.estimated_minutes)
    }

    pub fn show_picker(&mut self, ui: &mut egui::Ui) -> TimeSelectorResponse {
        time_selector(
            ui,
            PICKER_ID,
            &mut self.selector,
            &mut self.estimated_minutes,
            &self.style,
        )
    }
}
