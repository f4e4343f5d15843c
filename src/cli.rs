use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use num_complex::Complex64;
use std::path::PathBuf;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
#[derive(Default)]
pub enum OutputFormat {
    /// One glyph per cell, '@' = interior
    #[default]
    Ascii,
    /// {"rows","cols","values"}
    Json,
    /// One comma-separated line per row
    Csv,
}

#[derive(Debug, Parser)]
#[command(
    name = "titan-fractal",
    about = "Titan escape-time fractals — Mandelbrot and Julia shading grids",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct TitanCli {
    /// Global: path to config (TOML); default: ~/.titan/fractal.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Global: debug output on stderr (same as TITAN_DEBUG=1)
    #[arg(long = "debug", action = ArgAction::SetTrue, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub cmd: Option<Command>,
}

/// Region and output flags shared by the grid commands; unset flags fall back to config.
#[derive(Debug, Clone, Args)]
pub struct GridArgs {
    /// Upper-left corner as RE,IM
    #[arg(long = "top-left", value_name = "RE,IM", value_parser = parse_complex, allow_hyphen_values = true)]
    pub top_left: Option<Complex64>,

    /// Lower-right corner as RE,IM (excluded)
    #[arg(long = "bottom-right", value_name = "RE,IM", value_parser = parse_complex, allow_hyphen_values = true)]
    pub bottom_right: Option<Complex64>,

    /// Distance between neighbouring samples
    #[arg(long = "step", value_name = "S")]
    pub step: Option<f64>,

    /// Iteration budget per point
    #[arg(long = "max-iter", value_name = "N")]
    pub max_iter: Option<u32>,

    /// Output encoding
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Ascii)]
    pub format: OutputFormat,

    /// Output file path (short: -o). Defaults to stdout.
    #[arg(short = 'o', long = "out", value_name = "FILE")]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shade a region of the Mandelbrot set
    ///
    /// Examples:
    ///   titan-fractal mandelbrot --step 0.05
    ///   titan-fractal mandelbrot --top-left -2,1 --bottom-right 1,-1 --format json -o m.json
    Mandelbrot {
        #[command(flatten)]
        grid: GridArgs,
    },

    /// Shade a region of the Julia set for a fixed constant
    Julia {
        /// Julia constant as RE,IM
        #[arg(long = "c", value_name = "RE,IM", value_parser = parse_complex, allow_hyphen_values = true)]
        c: Option<Complex64>,
        #[command(flatten)]
        grid: GridArgs,
    },

    /// Escape time of a single point
    Escape {
        #[arg(value_name = "RE,IM", value_parser = parse_complex, allow_hyphen_values = true)]
        point: Complex64,
        #[arg(long = "max-iter", value_name = "N")]
        max_iter: Option<u32>,
        /// Iterate as a Julia starting value under this constant instead of a Mandelbrot parameter
        #[arg(long = "julia-c", value_name = "RE,IM", value_parser = parse_complex, allow_hyphen_values = true)]
        julia_c: Option<Complex64>,
    },

    /// Print the effective configuration as TOML
    ShowConfig,
}

/// `"RE,IM"` → complex. Whitespace around either part is ignored.
pub fn parse_complex(s: &str) -> Result<Complex64, String> {
    let (re, im) = s
        .split_once(',')
        .ok_or_else(|| format!("expected RE,IM but got '{s}'"))?;
    let re: f64 = re
        .trim()
        .parse()
        .map_err(|e| format!("bad real part '{}': {e}", re.trim()))?;
    let im: f64 = im
        .trim()
        .parse()
        .map_err(|e| format!("bad imaginary part '{}': {e}", im.trim()))?;
    Ok(Complex64::new(re, im))
}
