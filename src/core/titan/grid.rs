//! Complex-plane sampling grids.
//!
//! - `Grid<T>`: dense row-major 2D container
//! - `Region`: top-left / bottom-right corners plus a sampling step
//! - `generate(top_left, bottom_right, step)`: outer sum of the real and
//!   imaginary axis samples, bottom and right edges excluded

use std::ops::Index;

use num_complex::Complex64;
use rayon::prelude::*;
use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::core::error::FractalError;
use crate::debug_log;

#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T> Grid<T> {
    /// Wrap a row-major buffer. Returns `None` if `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Option<Self> {
        if rows.checked_mul(cols)? != data.len() {
            return None;
        }
        Some(Grid { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.data.get(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row < self.rows {
            Some(&self.data[row * self.cols..(row + 1) * self.cols])
        } else {
            None
        }
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        (0..self.rows).map(move |r| &self.data[r * self.cols..(r + 1) * self.cols])
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Same-shaped grid with `f` applied to every cell.
    pub fn map<U>(&self, f: impl Fn(&T) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            data: self.data.iter().map(f).collect(),
        }
    }
}

impl<T: Sync> Grid<T> {
    /// Like `map`, but rows are evaluated on the rayon pool. Cell order is preserved.
    pub fn par_map<U: Send>(&self, f: impl Fn(&T) -> U + Sync) -> Grid<U> {
        let data = if self.cols == 0 {
            Vec::new()
        } else {
            self.data
                .par_chunks(self.cols)
                .flat_map_iter(|row| row.iter().map(&f))
                .collect()
        };
        Grid { rows: self.rows, cols: self.cols, data }
    }
}

impl<T: Clone> Grid<T> {
    pub fn to_nested(&self) -> Vec<Vec<T>> {
        self.iter_rows().map(|r| r.to_vec()).collect()
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows && col < self.cols,
            "grid index ({row}, {col}) out of bounds for {}x{}",
            self.rows,
            self.cols
        );
        &self.data[row * self.cols + col]
    }
}

impl<T: Serialize> Serialize for Grid<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let values: Vec<&[T]> = self.iter_rows().collect();
        let mut state = serializer.serialize_struct("Grid", 3)?;
        state.serialize_field("rows", &self.rows)?;
        state.serialize_field("cols", &self.cols)?;
        state.serialize_field("values", &values)?;
        state.end()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub top_left: Complex64,
    pub bottom_right: Complex64,
    pub step: f64,
}

impl Region {
    pub fn new(top_left: Complex64, bottom_right: Complex64, step: f64) -> Self {
        Region { top_left, bottom_right, step }
    }

    /// Fails fast on anything that would yield an empty, inverted or NaN-laden grid.
    pub fn validate(&self) -> Result<(), FractalError> {
        for (name, v) in [
            ("top_left.re", self.top_left.re),
            ("top_left.im", self.top_left.im),
            ("bottom_right.re", self.bottom_right.re),
            ("bottom_right.im", self.bottom_right.im),
            ("step", self.step),
        ] {
            if !v.is_finite() {
                return Err(FractalError::NonFinite(format!("{name} = {v}")));
            }
        }
        if self.step <= 0.0 {
            return Err(FractalError::InvalidRegion(format!(
                "step must be positive, got {}",
                self.step
            )));
        }
        if self.top_left.re >= self.bottom_right.re {
            return Err(FractalError::InvalidRegion(format!(
                "left edge {} must be less than right edge {}",
                self.top_left.re, self.bottom_right.re
            )));
        }
        if self.top_left.im <= self.bottom_right.im {
            return Err(FractalError::InvalidRegion(format!(
                "top edge {} must be greater than bottom edge {}",
                self.top_left.im, self.bottom_right.im
            )));
        }
        Ok(())
    }

    /// `(rows, cols)` of the grid this region samples.
    pub fn shape(&self) -> Result<(usize, usize), FractalError> {
        self.validate()?;
        let rows = sample_count(self.top_left.im - self.bottom_right.im, self.step)?;
        let cols = sample_count(self.bottom_right.re - self.top_left.re, self.step)?;
        let bytes = rows
            .checked_mul(cols)
            .and_then(|n| n.checked_mul(std::mem::size_of::<Complex64>()));
        match bytes {
            Some(b) if b <= isize::MAX as usize => Ok((rows, cols)),
            _ => Err(FractalError::GridTooLarge { rows: rows as f64, cols: cols as f64 }),
        }
    }

    /// Column coordinates: `left, left + step, ...` stopping before the right edge.
    pub fn real_samples(&self) -> Result<Vec<f64>, FractalError> {
        let (_, cols) = self.shape()?;
        Ok(axis(self.top_left.re, self.step, cols))
    }

    /// Row coordinates: `top, top - step, ...` stopping before the bottom edge.
    pub fn imag_samples(&self) -> Result<Vec<f64>, FractalError> {
        let (rows, _) = self.shape()?;
        Ok(axis(self.top_left.im, -self.step, rows))
    }

    pub fn generate(&self) -> Result<Grid<Complex64>, FractalError> {
        let (rows, cols) = self.shape()?;
        let re = axis(self.top_left.re, self.step, cols);
        let im = axis(self.top_left.im, -self.step, rows);

        let mut data = Vec::with_capacity(rows * cols);
        for &y in &im {
            data.extend(re.iter().map(|&x| Complex64::new(x, y)));
        }
        debug_log!("grid: {}x{} samples, step {}", rows, cols, self.step);
        Ok(Grid { rows, cols, data })
    }
}

/// Sample the half-open rectangle from `top_left` to `bottom_right` every `step` units.
pub fn generate(
    top_left: Complex64,
    bottom_right: Complex64,
    step: f64,
) -> Result<Grid<Complex64>, FractalError> {
    Region::new(top_left, bottom_right, step).generate()
}

fn sample_count(span: f64, step: f64) -> Result<usize, FractalError> {
    let n = (span / step).ceil();
    if !n.is_finite() || n >= usize::MAX as f64 {
        return Err(FractalError::GridTooLarge { rows: span / step, cols: 1.0 });
    }
    if n < 1.0 {
        return Err(FractalError::InvalidRegion(format!(
            "span {span} holds no samples at step {step}"
        )));
    }
    Ok(n as usize)
}

// Multiply rather than accumulate so sample k is exactly start + k * step.
fn axis(start: f64, step: f64, n: usize) -> Vec<f64> {
    (0..n).map(|k| start + k as f64 * step).collect()
}
