//! QuickDraw stroke-to-raster preprocessing tool
//!
//! Turns per-category NDJSON files of pen-stroke drawings into:
//! - one plain PBM bitmap per drawing (256x256, binary)
//! - one CSV table per category (label + 65536 flattened pixels per row)
//!
//! Runs as a batch: the output root is purged, then every category file
//! under the input root is processed in order, fail-fast.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod dataset;
mod output;
mod pipeline;
mod raster;

use pipeline::{run, Config};

/// Default cap on drawings taken per category
const MAX_SAMPLES: usize = 10_000;

fn main() {
    println!("quickdraw-raster v{}", VERSION);

    let config = Config {
        input_dir: "raw_data".into(),
        output_dir: "data".into(),
        max_samples: MAX_SAMPLES,
    };

    if let Err(e) = run(&config) {
        eprintln!("Run failed: {}", e);
        std::process::exit(1);
    }
}
