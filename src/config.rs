//! Render defaults: built-in values + optional TOML config.
//!
//! - `FractalConfig::default()` → classic full view of the Mandelbrot set
//! - `FractalConfig::from_toml_file(path)` → user overrides (missing keys keep defaults)
//! - `FractalConfig::load(&cli_path)` → `--config` if given, else ~/.titan/fractal.toml, else built-in

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::core::titan::Region;
use crate::debug_log;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FractalConfig {
    pub max_iterations: u32,
    pub region: RegionConfig,
    pub julia: JuliaConfig,
}

/// Corners are `[re, im]` pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegionConfig {
    pub top_left: [f64; 2],
    pub bottom_right: [f64; 2],
    pub step: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct JuliaConfig {
    pub c: [f64; 2],
}

impl Default for FractalConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            region: RegionConfig::default(),
            julia: JuliaConfig::default(),
        }
    }
}

impl Default for RegionConfig {
    fn default() -> Self {
        Self {
            top_left: [-2.0, 1.25],
            bottom_right: [0.75, -1.25],
            step: 0.05,
        }
    }
}

impl Default for JuliaConfig {
    fn default() -> Self {
        Self { c: [-0.8, 0.156] }
    }
}

impl FractalConfig {
    pub fn from_toml_str(txt: &str) -> Result<Self> {
        Ok(toml::from_str(txt)?)
    }

    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let txt = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::from_toml_str(&txt).with_context(|| format!("parsing {}", path.display()))
    }

    /// An explicit path must load; the per-user default may be absent or broken.
    pub fn load(cli_path: &Option<PathBuf>) -> Result<Self> {
        if let Some(p) = cli_path {
            debug_log!("config: {}", p.display());
            return Self::from_toml_file(p);
        }
        if let Some(p) = default_config_path() {
            if p.exists() {
                match Self::from_toml_file(&p) {
                    Ok(cfg) => {
                        debug_log!("config: {}", p.display());
                        return Ok(cfg);
                    }
                    Err(e) => eprintln!("(warn) {e:#}, using built-in defaults"),
                }
            }
        }
        debug_log!("config: built-in defaults");
        Ok(Self::default())
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).context("serializing config")
    }

    pub fn region(&self) -> Region {
        Region::new(
            pair(self.region.top_left),
            pair(self.region.bottom_right),
            self.region.step,
        )
    }

    pub fn julia_c(&self) -> Complex64 {
        pair(self.julia.c)
    }
}

fn pair([re, im]: [f64; 2]) -> Complex64 {
    Complex64::new(re, im)
}

/// ~/.titan/fractal.toml
pub fn default_config_path() -> Option<PathBuf> {
    dirs_next::home_dir().map(|h| h.join(".titan").join("fractal.toml"))
}
