//! Aggregated size tree types

use std::fmt;

use serde::Serialize;

/// Insertion-ordered set of dependency names.
///
/// Duplicates are ignored, so iteration yields each name once in the order it
/// was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PeerSet(Vec<String>);

impl PeerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a name, returning `false` if it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.0.push(name);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PeerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for PeerSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = PeerSet::new();
        for name in iter {
            set.insert(name);
        }
        set
    }
}

/// One directory in the aggregated tree.
#[derive(Debug, Clone, Serialize)]
pub struct SizeNode {
    /// Base name of the directory.
    pub name: String,
    /// Bytes of every non-directory entry beneath this directory.
    pub size: u64,
    /// Peer dependencies declared at or below this directory.
    pub peer_dependencies: PeerSet,
    /// Subdirectories, largest first.
    pub children: Vec<SizeNode>,
}

impl SizeNode {
    /// A node with no children or peer dependencies.
    pub fn leaf(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            peer_dependencies: PeerSet::new(),
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Result of scanning a dependency root.
#[derive(Debug, Clone, Serialize)]
pub struct SizeReport {
    /// Total bytes under the root; always equal to `root.size`.
    pub total_size: u64,
    pub root: SizeNode,
}

impl SizeReport {
    pub fn new(root: SizeNode) -> Self {
        Self {
            total_size: root.size,
            root,
        }
    }
}
