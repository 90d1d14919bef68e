use std::fs;

use eframe::egui::{self, CentralPanel};
use tempfile::tempdir;
use time_estimate::{load_config, TimePreset, CONFIG_FILE_NAME};
use time_picker_gui::ui::theme;
use time_picker_gui::{EstimatedTimePanel, PickerApp, View};

fn render(app: &mut PickerApp, ctx: &egui::Context) -> egui::FullOutput {
    ctx.run(egui::RawInput::default(), |ctx| {
        CentralPanel::default().show(ctx, |ui| {
            EstimatedTimePanel.show(ui, app);
        });
    })
}

#[test]
fn panel_renders_default_state() {
    let mut app = PickerApp::default();
    let ctx = egui::Context::default();
    theme::install(&ctx, &theme::Palette::default());

    let full_output = render(&mut app, &ctx);

    assert!(full_output
        .shapes
        .iter()
        .any(|shape| !matches!(shape.shape, egui::epaint::Shape::Noop)));
    assert_eq!(app.estimated_minutes(), 5.0);
    assert_eq!(app.selector().active_preset(), Some(TimePreset::FiveMin));
}

#[test]
fn app_built_from_config_file_seeds_picker() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(
        &path,
        "[picker]\ninitial_minutes = 125\n\n[style]\npadding = 8.0\n",
    )
    .expect("write config");

    let config = load_config(&path).expect("load config");
    let mut app = PickerApp::from_config(config);
    assert_eq!(app.style().padding, 8.0);
    assert_eq!((app.selector().hour(), app.selector().minute()), (2, 5));
    assert_eq!(app.selector().active_preset(), None);

    let ctx = egui::Context::default();
    render(&mut app, &ctx);
    assert_eq!(app.estimated_minutes(), 125.0);
}

#[test]
fn external_update_resyncs_wheels() {
    let mut app = PickerApp::default();
    app.set_estimated_minutes(180.0);

    assert_eq!((app.selector().hour(), app.selector().minute()), (3, 0));
    assert_eq!(app.selector().active_preset(), Some(TimePreset::ThreeHours));

    app.set_minute(1);
    assert_eq!(app.estimated_minutes(), 181.0);
    assert_eq!(app.selector().active_preset(), None);
}
