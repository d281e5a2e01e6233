//! Report formatting and display
//!
//! # Module Structure
//!
//! - `config` - Output configuration and threshold parsing
//! - `tree` - Percentage-gated tree formatter (plain or colored)
//! - `json` - JSON output
//! - `progress` - Transient console progress while scanning

mod config;
mod json;
mod progress;
mod tree;

// Re-export public types and functions
pub use config::{DEFAULT_MIN_PERCENTAGE, OutputConfig, parse_min_percentage};
pub use json::print_json;
pub use progress::ConsoleProgress;
pub use tree::TreeFormatter;
