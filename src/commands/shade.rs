//! src/commands/shade.rs
//! Mandelbrot / Julia shading of a region, written to stdout or a file.

use std::io::Write;

use anyhow::{Context, Result};

use crate::cli::GridArgs;
use crate::config::FractalConfig;
use crate::core::titan::{Fractal, Region};
use crate::debug_log;
use crate::io::atomic::atomic_write;
use crate::render::render;

/// Command-line flags win over config values, one field at a time.
pub fn effective_region(args: &GridArgs, cfg: &FractalConfig) -> Region {
    let base = cfg.region();
    Region::new(
        args.top_left.unwrap_or(base.top_left),
        args.bottom_right.unwrap_or(base.bottom_right),
        args.step.unwrap_or(base.step),
    )
}

pub fn main(fractal: Fractal, args: GridArgs, cfg: &FractalConfig) -> Result<()> {
    let region = effective_region(&args, cfg);
    let max_iter = args.max_iter.unwrap_or(cfg.max_iterations);

    let grid = region.generate().context("sampling region")?;
    let shades = fractal
        .shading(&grid, max_iter)
        .with_context(|| format!("shading {}", fractal.name()))?;
    let text = render(&shades, args.format)?;

    match args.out {
        Some(path) => {
            atomic_write(&path, text.as_bytes())
                .with_context(|| format!("writing {}", path.display()))?;
            println!(
                "wrote {} {}x{} to {}",
                fractal.name(),
                shades.rows(),
                shades.cols(),
                path.display()
            );
        }
        None => {
            debug_log!("output: stdout ({} bytes)", text.len());
            let mut out = std::io::stdout().lock();
            out.write_all(text.as_bytes()).context("writing stdout")?;
            out.flush().context("writing stdout")?;
        }
    }
    Ok(())
}
