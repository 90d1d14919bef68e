use std::path::PathBuf;

use argh::FromArgs;
use eframe::egui;
use time_estimate::{load_config, PickerConfig, CONFIG_FILE_NAME};
use time_picker_gui::PickerApp;

#[derive(FromArgs)]
/// Pick an estimated duration with hour/minute wheels and quick suggestions.
struct Args {
    /// initial estimate in minutes, overrides the config file
    #[argh(option, short = 'm')]
    minutes: Option<f64>,

    /// path to a time_picker.toml configuration
    #[argh(option, short = 'c')]
    config: Option<PathBuf>,
}

fn resolve_config(args: &Args) -> PickerConfig {
    let path = args
        .config
        .clone()
        .or_else(|| Some(PathBuf::from(CONFIG_FILE_NAME)).filter(|path| path.is_file()));

    let mut config = match path {
        Some(path) => match load_config(&path) {
            Ok(config) => {
                log::info!("Loaded configuration from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!(
                    "Failed to load {}: {err}. Falling back to defaults",
                    path.display()
                );
                PickerConfig::default()
            }
        },
        None => PickerConfig::default(),
    };

    if let Some(minutes) = args.minutes {
        config.initial_minutes = minutes;
    }
    config
}

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();
    let config = resolve_config(&args);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 460.0])
            .with_min_inner_size([320.0, 380.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Estimated Time Picker",
        options,
        Box::new(|cc| Ok(Box::new(PickerApp::new(cc, config)))),
    )
}
