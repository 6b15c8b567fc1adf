//! Print where the display corners land in the camera image.
//!
//! Usage: `cargo run --example fit_display -- [config.json]`

use std::{env, path::PathBuf};

use arframe::core::{FitConfig, FrameDescriptor, Orientation};
use log::{info, LevelFilter};
use nalgebra::Point2;

#[cfg(not(feature = "tracing"))]
use arframe::core::init_with_level;
#[cfg(feature = "tracing")]
use arframe::core::init_tracing;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(not(feature = "tracing"))]
    init_with_level(LevelFilter::Info).map_err(|e| e.to_string())?;
    #[cfg(feature = "tracing")]
    init_tracing(false);

    let cfg = match env::args().nth(1).map(PathBuf::from) {
        Some(path) => {
            info!("loading {}", path.display());
            FitConfig::load_json(&path)?
        }
        None => FitConfig::new(
            FrameDescriptor::new(1920.0, 1440.0, Orientation::LandscapeRight),
            FrameDescriptor::new(1170.0, 2532.0, Orientation::Portrait),
        ),
    };

    let report = cfg.report()?;
    info!(
        "scale=({:.4}, {:.4}) rotation={:.1}deg",
        report.scale[0], report.scale[1], report.degrees
    );

    let transform = cfg.build_transform()?;
    for (name, uv) in [
        ("top-left", Point2::new(0.0_f32, 0.0)),
        ("top-right", Point2::new(1.0, 0.0)),
        ("bottom-left", Point2::new(0.0, 1.0)),
        ("bottom-right", Point2::new(1.0, 1.0)),
    ] {
        let p = transform.apply(uv);
        println!("{name:>12}: ({:.4}, {:.4})", p.x, p.y);
    }
    Ok(())
}
