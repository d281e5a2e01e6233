//! Output configuration types

use crate::error::{Error, Result};

/// Threshold used when `--min-percentage` is not given.
pub const DEFAULT_MIN_PERCENTAGE: f64 = 2.0;

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Nodes whose share of the total is below this are pruned with their subtree
    pub min_percentage: f64,
    /// Deepest level rendered; the root is level 0
    pub max_depth: Option<usize>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            min_percentage: DEFAULT_MIN_PERCENTAGE,
            max_depth: None,
        }
    }
}

/// Parse a threshold percentage, accepting finite numbers in `[0, 100]`.
///
/// A single trailing `%` is allowed, so `5` and `5%` mean the same thing.
pub fn parse_min_percentage(s: &str) -> Result<f64> {
    let trimmed = s.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();
    match number.parse::<f64>() {
        Ok(value) if value.is_finite() && (0.0..=100.0).contains(&value) => Ok(value),
        _ => Err(Error::InvalidThreshold(s.to_string())),
    }
}
