use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum FractalError {
    /// Region bounds or step that cannot produce a non-empty grid.
    InvalidRegion(String),
    /// A NaN or infinite scalar input (coordinate, step, Julia constant).
    NonFinite(String),
    /// Grid cells that are NaN or infinite; `first` is the first offender in row-major order.
    NonFiniteCells { count: usize, first: (usize, usize) },
    /// Grid dimensions not representable in memory.
    GridTooLarge { rows: f64, cols: f64 },
}

impl fmt::Display for FractalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FractalError::InvalidRegion(msg) => write!(f, "Invalid Region: {}", msg),
            FractalError::NonFinite(msg) => write!(f, "Non-finite Input: {}", msg),
            FractalError::NonFiniteCells { count, first } => write!(
                f,
                "Non-finite Input: {} grid cell(s), first at row {} col {}",
                count, first.0, first.1
            ),
            FractalError::GridTooLarge { rows, cols } => {
                write!(f, "Grid Too Large: {} x {} samples", rows, cols)
            }
        }
    }
}

impl std::error::Error for FractalError {}

impl FractalError {
    pub fn invalid_region(message: &str) -> Self { FractalError::InvalidRegion(message.to_string()) }
    pub fn non_finite(message: &str) -> Self { FractalError::NonFinite(message.to_string()) }
}
