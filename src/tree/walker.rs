//! SizeWalker - aggregates directory sizes into a tree

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::manifest::PackageManifest;

use super::config::WalkerConfig;
use super::node::{PeerSet, SizeNode, SizeReport};
use super::utils::{dir_name, is_scope_internal, sort_by_size};

/// Receives progress updates while a scan is running.
pub trait ScanProgress {
    /// Called every `progress_interval` entries with the running entry count.
    fn entries_processed(&mut self, count: u64);

    /// Called once after a successful scan with the final entry count.
    fn finish(&mut self, _total: u64) {}
}

/// Progress sink that discards every update.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ScanProgress for NoProgress {
    fn entries_processed(&mut self, _count: u64) {}
}

/// Fail with [`Error::MissingRoot`] unless `root` is an existing directory.
pub fn check_root(root: &Path) -> Result<()> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(Error::MissingRoot(root.to_path_buf()))
    }
}

/// Mutable state threaded through one scan.
struct ScanState<'a, P: ScanProgress + ?Sized> {
    entries: u64,
    interval: u64,
    progress: &'a mut P,
}

impl<P: ScanProgress + ?Sized> ScanState<'_, P> {
    fn tick(&mut self) {
        self.entries += 1;
        if self.interval > 0 && self.entries % self.interval == 0 {
            self.progress.entries_processed(self.entries);
        }
    }
}

/// Walks a dependency root once and builds the aggregated size tree.
///
/// Sizes are summed bottom-up; peer dependencies declared by nested manifests
/// bubble up to every ancestor except the scan root, with scope-internal
/// names dropped at their scope directory. Any I/O or manifest error aborts
/// the whole scan.
pub struct SizeWalker {
    config: WalkerConfig,
}

impl SizeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Scan `root` without progress reporting.
    pub fn walk(&self, root: &Path) -> Result<SizeReport> {
        self.scan(root, &mut NoProgress)
    }

    /// Scan `root`, reporting progress to `progress`.
    pub fn scan<P: ScanProgress + ?Sized>(
        &self,
        root: &Path,
        progress: &mut P,
    ) -> Result<SizeReport> {
        check_root(root)?;

        let mut state = ScanState {
            entries: 0,
            interval: self.config.progress_interval,
            progress,
        };
        let mut node = self.scan_dir(root, true, &mut state)?;
        sort_by_size(&mut node.children);

        log::debug!(
            "scanned {} entries under {} ({} bytes)",
            state.entries,
            root.display(),
            node.size
        );
        state.progress.finish(state.entries);

        Ok(SizeReport::new(node))
    }

    fn scan_dir<P: ScanProgress + ?Sized>(
        &self,
        path: &Path,
        is_root: bool,
        state: &mut ScanState<'_, P>,
    ) -> Result<SizeNode> {
        let name = dir_name(path);

        let mut entries = fs::read_dir(path)
            .and_then(|entries| entries.collect::<std::io::Result<Vec<_>>>())
            .map_err(|e| Error::io(path, e))?;
        entries.sort_by_key(|e| e.file_name());

        let mut size = 0u64;
        let mut peer_dependencies = PeerSet::new();
        let mut children = Vec::new();

        for entry in entries {
            let entry_path = entry.path();
            // Follows symlinks, so a linked directory is measured like a real one.
            let metadata = fs::metadata(&entry_path).map_err(|e| Error::io(&entry_path, e))?;
            state.tick();

            if metadata.is_dir() {
                let child = self.scan_dir(&entry_path, false, state)?;
                size += child.size;
                for dependency in child.peer_dependencies.iter() {
                    if !is_scope_internal(&name, dependency) {
                        peer_dependencies.insert(dependency);
                    }
                }
                children.push(child);
            } else {
                size += metadata.len();
            }
        }

        if !is_root {
            if let Some(manifest) = PackageManifest::load_in_dir(path)? {
                for dependency in manifest.peer_dependency_names() {
                    peer_dependencies.insert(dependency);
                }
            }
        }

        sort_by_size(&mut children);

        Ok(SizeNode {
            name,
            size,
            peer_dependencies,
            children,
        })
    }
}

impl Default for SizeWalker {
    fn default() -> Self {
        Self::new(WalkerConfig::default())
    }
}
