//! Directory size aggregation
//!
//! `SizeWalker` visits a dependency root once, depth first, and returns a
//! `SizeReport` holding a tree of `SizeNode`s with sizes summed bottom-up and
//! peer dependencies merged from nested manifests.

mod config;
mod node;
mod utils;
mod walker;

// Re-export public types
pub use config::{PROGRESS_INTERVAL, WalkerConfig};
pub use node::{PeerSet, SizeNode, SizeReport};
pub use utils::{is_scope_internal, percentage, to_megabytes};
pub use walker::{NoProgress, ScanProgress, SizeWalker, check_root};
