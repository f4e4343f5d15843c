//! Titan math: complex-plane grids and escape-time fractals.

pub mod fractals;
pub mod grid;

pub use fractals::{
    escape_time, julia_escape_time, julia_shading, mandelbrot_shading, shading, EscapeTime, Fractal,
    ShadingGrid,
};
pub use grid::{generate, Grid, Region};
