use anyhow::{Context, Result};
use std::fs::File;
use std::io;

use crate::config::WalkConfig;
use crate::core::{WalkEvent, resolve_dependencies};
use crate::format::write_collection;

/// Main entry point for the depwalk CLI.
///
/// Runs the walk on a background thread and consumes trace events on the
/// main thread, printing them when `verbose` is enabled. The resolved
/// collection is then rendered to stdout or the configured output file.
pub fn run(config: WalkConfig) -> Result<()> {
    let (tx, rx) = crossbeam_channel::unbounded();

    let path = config.path.clone();
    let handle = std::thread::spawn(move || resolve_dependencies(&path, Some(tx)));

    for event in rx {
        if !config.verbose {
            continue;
        }
        match event {
            WalkEvent::StructuredManifest(p) => println!("parsing deploy.json at {}", p.display()),
            WalkEvent::ExpressionManifest(p) => println!("parsing package.js at {}", p.display()),
            WalkEvent::Script(p) => println!("script: {}", p.display()),
            WalkEvent::Stylesheet(p) => println!("stylesheet: {}", p.display()),
            WalkEvent::Ignored(entry) => println!("ignoring {}", entry),
            WalkEvent::CollectingAssets(p) => println!("collecting assets at {}", p.display()),
            WalkEvent::Asset(p) => println!("asset: {}", p.display()),
        }
    }

    let deps = handle
        .join()
        .map_err(|_| anyhow::anyhow!("walker thread panicked"))??;

    match &config.output {
        Some(path) => {
            let mut file = File::create(path)
                .with_context(|| format!("Failed to create output file: {:?}", path))?;
            write_collection(&mut file, &deps, config.output_format)?;
        }
        None => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_collection(&mut out, &deps, config.output_format)?;
        }
    }

    Ok(())
}
