//! Configuration types for the size walker

/// Entries processed between two progress reports.
pub const PROGRESS_INTERVAL: u64 = 100;

/// Configuration for size walking behavior.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Report progress every this many entries (0 disables reporting)
    pub progress_interval: u64,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            progress_interval: PROGRESS_INTERVAL,
        }
    }
}
