// Library surface shared by the `titan-fractal` binary and the integration tests.
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod render;

pub use crate::core::error::FractalError;
pub use crate::core::titan::{
    escape_time, generate, julia_escape_time, julia_shading, mandelbrot_shading, shading, EscapeTime,
    Fractal, Grid, Region, ShadingGrid,
};
