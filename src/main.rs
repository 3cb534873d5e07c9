// hide console window on Windows in release
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use clap::Parser;
use std::error::Error;
use std::path::PathBuf;

mod components;
mod ui;
mod util;

use crate::ui::{Settings, WordCounterApp};

#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Settings file to use instead of the one in the user's config directory
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    let args = Args::parse();

    let settings_path = args.config.or_else(Settings::default_path);

    let settings = match settings_path.as_deref() {
        Some(path) => Settings::load_from_file(path).unwrap_or_else(|err| {
            log::error!("could not load settings from {path:?}, using defaults: {err}");
            Settings::default()
        }),
        None => {
            log::warn!("no config directory available, settings will not be saved");
            Settings::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Word Counter")
            .with_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Word Counter",
        options,
        Box::new(move |cc| {
            Ok(Box::new(WordCounterApp::new(cc, settings, settings_path)))
        }),
    )?;

    Ok(())
}
