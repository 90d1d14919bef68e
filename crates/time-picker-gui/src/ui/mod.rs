use eframe::egui;
use time_estimate::format_duration;

use crate::PickerApp;

pub mod theme;

pub(crate) const CENTERED_COLUMN_MAX_WIDTH: f32 = 460.0;

/// Column of at most `max_width` points, centred in the available width.
pub(crate) fn centered_column<R>(
    ui: &mut egui::Ui,
    max_width: f32,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let size = egui::vec2(ui.available_width().min(max_width), ui.available_height());
    ui.vertical_centered(|ui| {
        ui.allocate_ui_with_layout(size, egui::Layout::top_down(egui::Align::Min), add_contents)
            .inner
    })
    .inner
}

/// Readout of the value the host currently holds, plus the reset control.
pub(crate) fn bound_duration_section(app: &mut PickerApp, ui: &mut egui::Ui) {
    ui.group(|ui| {
        ui.horizontal(|ui| {
            ui.label("Estimated time");
            let minutes = app.estimated_minutes().max(0.0) as u32;
            ui.label(
                egui::RichText::new(format_duration(minutes))
                    .strong()
                    .color(app.theme.accent),
            );
            ui.small(format!("({} minutes)", app.estimated_minutes()));
        });

        let preset_text = match app.selector().active_preset() {
            Some(preset) => format!("Matches the {} suggestion", preset.label()),
            None => "No quick suggestion matches".to_string(),
        };
        ui.small(preset_text);

        if ui
            .button("Reset")
            .on_hover_text("Restore the configured initial estimate")
            .clicked()
        {
            app.reset();
        }
    });
}
