//! m,n,k game GUI
//!
//! A graphical interface for playing k-in-a-row against the AI or another player.

use anyhow::{anyhow, Result};
use clap::Parser;
use log::info;

use mnk::config::ConfigArgs;
use mnk::ui::MnkApp;

#[derive(Parser, Debug)]
#[command(name = "mnk", about = "m,n,k game with an alpha-beta AI")]
struct Args {
    #[command(flatten)]
    config: ConfigArgs,
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let config = args.config.resolve()?;
    info!("starting GUI with {:?}", config);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("m,n,k"),
        ..Default::default()
    };

    eframe::run_native(
        "mnk",
        options,
        Box::new(move |cc| Ok(Box::new(MnkApp::new(cc, config)))),
    )
    .map_err(|e| anyhow!("GUI error: {}", e))
}
