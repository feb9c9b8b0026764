//! In-memory view of the working tree during a dry run
//!
//! A dry run never touches the filesystem, so later entries would otherwise
//! miss the files earlier entries planned to produce.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub(crate) struct Overlay {
    /// Planned path -> path the content still lives at on disk
    placed: HashMap<PathBuf, PathBuf>,
    /// Paths a planned move has emptied
    vacated: HashSet<PathBuf>,
}

impl Overlay {
    /// Where the content of `rel` can be read right now, if it exists
    pub(crate) fn locate(&self, root: &Path, rel: &Path) -> Option<PathBuf> {
        if let Some(origin) = self.placed.get(rel) {
            return Some(root.join(origin));
        }
        if self.vacated.contains(rel) {
            return None;
        }
        let path = root.join(rel);
        fs::symlink_metadata(&path).is_ok().then_some(path)
    }

    pub(crate) fn exists(&self, root: &Path, rel: &Path) -> bool {
        self.locate(root, rel).is_some()
    }

    pub(crate) fn record_move(&mut self, from: &Path, to: &Path) {
        let origin = self
            .placed
            .remove(from)
            .unwrap_or_else(|| from.to_path_buf());
        self.vacated.insert(from.to_path_buf());
        self.vacated.remove(to);
        self.placed.insert(to.to_path_buf(), origin);
    }
}
