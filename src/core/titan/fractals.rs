//! Escape-time iteration for the Mandelbrot and Julia sets.
//!
//! Every point is iterated with `z <- z^2 + c` until `|z| > 2` or the
//! iteration budget runs out. The batched forms are per-cell wrappers over
//! the scalar iteration and produce identical values.

use std::fmt;

use num_complex::Complex64;
use serde::Serialize;

use crate::core::error::FractalError;
use crate::core::titan::grid::Grid;
use crate::debug_log;

pub const ESCAPE_RADIUS: f64 = 2.0;

/// Shading values in [0,1], same shape as the sampled grid.
pub type ShadingGrid = Grid<f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EscapeTime {
    /// `|z_k| > 2` first held at iteration `k` (0 = the starting value itself).
    Escaped(u32),
    /// Never escaped within the budget.
    Bounded,
}

impl EscapeTime {
    pub fn iterations(self) -> Option<u32> {
        match self {
            EscapeTime::Escaped(k) => Some(k),
            EscapeTime::Bounded => None,
        }
    }

    pub fn is_bounded(self) -> bool {
        matches!(self, EscapeTime::Bounded)
    }
}

impl fmt::Display for EscapeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EscapeTime::Escaped(k) => write!(f, "escaped at {}", k),
            EscapeTime::Bounded => write!(f, "bounded"),
        }
    }
}

/// Which recurrence a grid is iterated under.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fractal {
    /// Each point is both `z0` and `c`.
    Mandelbrot,
    /// Fixed `c`; each point is only `z0`.
    Julia { c: Complex64 },
}

impl Fractal {
    pub fn name(&self) -> &'static str {
        match self {
            Fractal::Mandelbrot => "mandelbrot",
            Fractal::Julia { .. } => "julia",
        }
    }

    pub fn escape_time(&self, z: Complex64, max_iterations: u32) -> Result<EscapeTime, FractalError> {
        match *self {
            Fractal::Mandelbrot => escape_time(z, max_iterations),
            Fractal::Julia { c } => julia_escape_time(z, c, max_iterations),
        }
    }

    pub fn escape_times(
        &self,
        grid: &Grid<Complex64>,
        max_iterations: u32,
    ) -> Result<Grid<EscapeTime>, FractalError> {
        match *self {
            Fractal::Mandelbrot => mandelbrot_escape_times(grid, max_iterations),
            Fractal::Julia { c } => julia_escape_times(grid, c, max_iterations),
        }
    }

    pub fn shading(&self, grid: &Grid<Complex64>, max_iterations: u32) -> Result<ShadingGrid, FractalError> {
        let times = self.escape_times(grid, max_iterations)?;
        Ok(shade(&times, max_iterations))
    }
}

/// Mandelbrot escape time of `c` (starting value and parameter are both `c`).
pub fn escape_time(c: Complex64, max_iterations: u32) -> Result<EscapeTime, FractalError> {
    check_finite("c", c)?;
    Ok(orbit(c, c, max_iterations))
}

/// Julia escape time of starting value `z0` under the fixed constant `c`.
pub fn julia_escape_time(z0: Complex64, c: Complex64, max_iterations: u32) -> Result<EscapeTime, FractalError> {
    check_finite("z0", z0)?;
    check_finite("c", c)?;
    Ok(orbit(z0, c, max_iterations))
}

/// `(max - t + 1) / (max + 1)`, where a bounded orbit counts as `t = max + 1`.
///
/// An `Escaped(k)` with `k > max_iterations` lies outside the budget and
/// shades like a bounded orbit.
pub fn shading(escape: EscapeTime, max_iterations: u32) -> f64 {
    let max = max_iterations as f64;
    let t = match escape {
        EscapeTime::Escaped(k) if k <= max_iterations => k as f64,
        _ => max + 1.0,
    };
    (max - t + 1.0) / (max + 1.0)
}

pub fn mandelbrot_escape_times(
    grid: &Grid<Complex64>,
    max_iterations: u32,
) -> Result<Grid<EscapeTime>, FractalError> {
    check_cells(grid)?;
    let times = grid.par_map(|&z| orbit(z, z, max_iterations));
    log_batch("mandelbrot", &times, max_iterations);
    Ok(times)
}

pub fn julia_escape_times(
    grid: &Grid<Complex64>,
    c: Complex64,
    max_iterations: u32,
) -> Result<Grid<EscapeTime>, FractalError> {
    check_finite("c", c)?;
    check_cells(grid)?;
    let times = grid.par_map(|&z| orbit(z, c, max_iterations));
    log_batch("julia", &times, max_iterations);
    Ok(times)
}

pub fn mandelbrot_shading(grid: &Grid<Complex64>, max_iterations: u32) -> Result<ShadingGrid, FractalError> {
    let times = mandelbrot_escape_times(grid, max_iterations)?;
    Ok(shade(&times, max_iterations))
}

pub fn julia_shading(
    grid: &Grid<Complex64>,
    c: Complex64,
    max_iterations: u32,
) -> Result<ShadingGrid, FractalError> {
    let times = julia_escape_times(grid, c, max_iterations)?;
    Ok(shade(&times, max_iterations))
}

fn shade(times: &Grid<EscapeTime>, max_iterations: u32) -> ShadingGrid {
    times.map(|&e| shading(e, max_iterations))
}

#[inline]
fn escapes(z: Complex64) -> bool {
    (z.re * z.re + z.im * z.im).sqrt() > ESCAPE_RADIUS
}

fn orbit(z0: Complex64, c: Complex64, max_iterations: u32) -> EscapeTime {
    let mut z = z0;
    if escapes(z) {
        return EscapeTime::Escaped(0);
    }
    for k in 1..=max_iterations {
        z = z * z + c;
        if escapes(z) {
            return EscapeTime::Escaped(k);
        }
    }
    EscapeTime::Bounded
}

fn check_finite(name: &str, z: Complex64) -> Result<(), FractalError> {
    if z.is_finite() {
        Ok(())
    } else {
        Err(FractalError::NonFinite(format!("{name} = {z}")))
    }
}

// Scans every cell so the error reports all offenders, not just the first.
fn check_cells(grid: &Grid<Complex64>) -> Result<(), FractalError> {
    let cols = grid.cols();
    let mut bad = grid
        .as_slice()
        .iter()
        .enumerate()
        .filter(|(_, z)| !z.is_finite());
    match bad.next() {
        Some((idx, _)) => Err(FractalError::NonFiniteCells {
            count: 1 + bad.count(),
            first: (idx / cols, idx % cols),
        }),
        None => Ok(()),
    }
}

fn log_batch(kind: &str, times: &Grid<EscapeTime>, max_iterations: u32) {
    if crate::core::debug::is_enabled() {
        let bounded = times.as_slice().iter().filter(|e| e.is_bounded()).count();
        debug_log!(
            "{kind}: {}x{} cells, max_iter {max_iterations}, {} escaped, {bounded} bounded",
            times.rows(),
            times.cols(),
            times.len() - bounded
        );
    }
}
