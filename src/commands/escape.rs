//! src/commands/escape.rs
//! Escape time of a single point.

use anyhow::Result;
use num_complex::Complex64;

use crate::config::FractalConfig;
use crate::core::titan::Fractal;

pub fn main(
    point: Complex64,
    max_iter: Option<u32>,
    julia_c: Option<Complex64>,
    cfg: &FractalConfig,
) -> Result<()> {
    let max_iter = max_iter.unwrap_or(cfg.max_iterations);
    let fractal = match julia_c {
        Some(c) => Fractal::Julia { c },
        None => Fractal::Mandelbrot,
    };
    let escape = fractal.escape_time(point, max_iter)?;
    println!("{escape}");
    Ok(())
}
