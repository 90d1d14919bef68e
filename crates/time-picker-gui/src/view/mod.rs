use eframe::egui;
use time_estimate::PRESETS;

use crate::{
    state::PickerApp,
    ui::{self, theme},
};

const PRESET_SHORTCUTS: [egui::Key; 5] = [
    egui::Key::Num1,
    egui::Key::Num2,
    egui::Key::Num3,
    egui::Key::Num4,
    egui::Key::Num5,
];

pub trait View<TState> {
    fn show(&mut self, ui: &mut egui::Ui, state: &mut TState);
}

#[derive(Default)]
pub struct EstimatedTimePanel;

impl View<PickerApp> for EstimatedTimePanel {
    fn show(&mut self, ui: &mut egui::Ui, state: &mut PickerApp) {
        ui::centered_column(ui, ui::CENTERED_COLUMN_MAX_WIDTH, |ui| {
            state.show_picker(ui);
            ui.add_space(8.0);
            ui::bound_duration_section(state, ui);
        });
    }
}

impl PickerApp {
    /// Number keys 1-5 tap the matching quick suggestion.
    pub(crate) fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        let pressed = ctx.input(|i| {
            PRESET_SHORTCUTS
                .iter()
                .zip(PRESETS)
                .find(|(key, _)| i.key_pressed(**key))
                .map(|(_, preset)| preset)
        });
        if let Some(preset) = pressed {
            self.apply_preset(preset);
        }
    }
}

impl eframe::App for PickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        egui::TopBottomPanel::top("top_panel")
            .frame(egui::Frame::NONE.fill(self.theme.background))
            .show(ctx, |ui| {
                let rect = ui.max_rect();
                theme::draw_vertical_gradient(
                    ui.painter(),
                    rect,
                    self.theme.header_top,
                    self.theme.header_bottom,
                );
                theme::draw_header_rule(ui.painter(), rect, self.theme.separator);
                ui.add_space(6.0);
                ui.horizontal(|ui| {
                    ui.add_space(12.0);
                    ui.heading("Estimated Time");
                });
                ui.add_space(6.0);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(8.0);
            EstimatedTimePanel.show(ui, self);
        });
    }
}
