//! modsize - Shows what is taking up space in node_modules

pub mod error;
pub mod manifest;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, Result};
pub use manifest::{Manifest, PackageManifest};
pub use output::{
    ConsoleProgress, DEFAULT_MIN_PERCENTAGE, OutputConfig, TreeFormatter, parse_min_percentage,
    print_json,
};
pub use tree::{
    NoProgress, PeerSet, ScanProgress, SizeNode, SizeReport, SizeWalker, WalkerConfig, check_root,
};
