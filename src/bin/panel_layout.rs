//! Regenerates the panel layout, writes the board files and shows the result.
//!
//! Usage: `panel-layout [CONFIG.json] [OUT_DIR]`

use log::info;
use neopixel_panel::export::export_all;
use neopixel_panel::layout::generate;
use neopixel_panel::{viewer, LayoutConfig};
use std::error::Error as StdError;
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn StdError>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => {
            info!("reading layout config from {}", path);
            LayoutConfig::from_path(path)?
        }
        None => LayoutConfig::default(),
    };
    let out_dir = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));

    let layout = generate(&config)?;
    info!(
        "theta offset {:.2}, sector counts {:?}",
        layout.paths.theta_offset,
        layout.paths.counts()
    );

    let summary = export_all(&out_dir, &layout, &config)?;
    info!("exported {} pixels to {}", summary.pixels, out_dir.display());

    viewer::run(layout, config)?;
    Ok(())
}
