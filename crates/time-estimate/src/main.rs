use argh::FromArgs;
use colored::Colorize;
use serde::Serialize;
use time_estimate::{format_duration, Error, HourMinute, TimePreset};

#[derive(FromArgs)]
/// Split a duration into hour/minute wheel positions and name its preset.
struct Args {
    /// total minutes to decompose
    #[argh(option, short = 'm')]
    minutes: Option<f64>,

    /// preset label ("1 Hr") or id (one_hour) to decompose
    #[argh(option, short = 'p')]
    preset: Option<String>,

    /// print a JSON object instead of text
    #[argh(switch)]
    json: bool,
}

#[derive(Debug, PartialEq, Serialize)]
struct Report {
    hour: u32,
    minute: u32,
    total_minutes: u32,
    preset: Option<TimePreset>,
}

impl Report {
    fn new(selection: HourMinute) -> Self {
        Self {
            hour: selection.hour,
            minute: selection.minute,
            total_minutes: selection.total_minutes(),
            preset: selection.preset(),
        }
    }

    fn to_text(&self) -> String {
        let preset = match self.preset {
            Some(preset) => preset.label().green(),
            None => "none".dimmed(),
        };
        format!(
            "{} {} {}",
            format_duration(self.total_minutes).bold(),
            format!("(hour={}, minute={}),", self.hour, self.minute).dimmed(),
            format!("preset: {preset}")
        )
    }

    fn to_json(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self).map_err(|e| Error::ConfigError(e.to_string()))
    }
}

fn main() {
    let args: Args = argh::from_env();
    match run(&args) {
        Ok(output) => println!("{output}"),
        Err(err) => {
            eprintln!("{}", format!("Error: {err}").red());
            std::process::exit(1);
        }
    }
}

fn build_report(args: &Args) -> Result<Report, Error> {
    let selection = match (&args.preset, args.minutes) {
        (Some(label), None) => HourMinute::from_preset(TimePreset::from_label(label)?),
        (None, Some(minutes)) => HourMinute::from_minutes(minutes),
        (Some(_), Some(_)) => {
            return Err(Error::ArgumentError(
                "--minutes and --preset cannot be combined".to_string(),
            ))
        }
        (None, None) => {
            return Err(Error::ArgumentError(
                "Pass either --minutes or --preset".to_string(),
            ))
        }
    };
    Ok(Report::new(selection))
}

fn run(args: &Args) -> Result<String, Error> {
    let report = build_report(args)?;
    if args.json {
        report.to_json()
    } else {
        Ok(report.to_text())
    }
}
