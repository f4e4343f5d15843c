//! Text encodings of a shading grid (0 = interior/black, 1 = immediate escape/white).

use anyhow::Result;

use crate::cli::OutputFormat;
use crate::core::titan::ShadingGrid;

/// Darkest to lightest.
pub const ASCII_RAMP: &[u8] = b"@%#*+=~-:.";

pub fn render(grid: &ShadingGrid, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Ascii => to_ascii(grid),
        OutputFormat::Json => to_json(grid)?,
        OutputFormat::Csv => to_csv(grid),
    })
}

pub fn ascii_glyph(value: f64) -> char {
    let last = (ASCII_RAMP.len() - 1) as f64;
    let idx = (value.clamp(0.0, 1.0) * last).round() as usize;
    ASCII_RAMP[idx] as char
}

/// One line per row.
pub fn to_ascii(grid: &ShadingGrid) -> String {
    let mut out = String::with_capacity(grid.rows() * (grid.cols() + 1));
    for row in grid.iter_rows() {
        out.extend(row.iter().map(|&v| ascii_glyph(v)));
        out.push('\n');
    }
    out
}

/// `{"rows":R,"cols":C,"values":[[...],...]}`
pub fn to_json(grid: &ShadingGrid) -> Result<String> {
    let mut s = serde_json::to_string(grid)?;
    s.push('\n');
    Ok(s)
}

pub fn to_csv(grid: &ShadingGrid) -> String {
    let mut out = String::new();
    for row in grid.iter_rows() {
        let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::titan::Grid;

    fn sample() -> ShadingGrid {
        Grid::from_vec(2, 2, vec![0.0, 0.5, 1.0, 0.25]).unwrap()
    }

    #[test]
    fn ramp_endpoints() {
        assert_eq!(ascii_glyph(0.0), '@');
        assert_eq!(ascii_glyph(1.0), '.');
        assert_eq!(ascii_glyph(0.5), '=');
        assert_eq!(ascii_glyph(-3.0), '@');
    }

    #[test]
    fn ascii_rows() {
        assert_eq!(to_ascii(&sample()), "@=\n.#\n");
    }

    #[test]
    fn json_shape() {
        let v: serde_json::Value = serde_json::from_str(&to_json(&sample()).unwrap()).unwrap();
        assert_eq!(v["rows"], 2);
        assert_eq!(v["cols"], 2);
        assert_eq!(v["values"][1][0], 1.0);
    }

    #[test]
    fn csv_rows() {
        assert_eq!(to_csv(&sample()), "0,0.5\n1,0.25\n");
    }
}
