//! Packaging manifest generator
//!
//! Prints the mobile-shell manifest as JSON.
//!
//! Usage: cliffvibe-manifest [static|server] [OUTPUT]
//!
//! The build mode defaults to `static`. Without OUTPUT the manifest goes to stdout.

use anyhow::{Context, Result};
use cliffvibe::{logging, BuildMode, PackagingManifest, SiteMetadata};
use std::env;
use std::fs;

fn main() -> Result<()> {
    logging::init_logging();

    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        eprintln!("Usage: {} [static|server] [OUTPUT]", args[0]);
        return Ok(());
    }

    let mode = match args.get(1) {
        Some(mode) => mode.parse::<BuildMode>()?,
        None => BuildMode::default(),
    };

    let manifest = PackagingManifest::for_mode(mode, &SiteMetadata::default());
    let json = manifest.to_json()?;

    match args.get(2) {
        Some(path) => {
            fs::write(path, format!("{}\n", json))
                .with_context(|| format!("Failed to write manifest to {}", path))?;
            tracing::info!(%mode, path = %path, "manifest written");
        }
        None => println!("{}", json),
    }

    Ok(())
}
