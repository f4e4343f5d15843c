use anyhow::Result;

use crate::config::FractalConfig;

pub fn show(cfg: &FractalConfig) -> Result<()> {
    print!("{}", cfg.to_toml_string()?);
    Ok(())
}
