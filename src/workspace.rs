//! Working directory anchoring.
//! Every demo file is created next to the process working directory, never
//! under a hard-coded drive or next to the binary.

use std::io;
use std::path::{Path, PathBuf};

/// Directory all demo files are resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Anchor on the process current directory.
    pub fn current() -> io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path of `file_name` inside the working directory.
    pub fn path(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_joins_onto_root() {
        let ws = Workspace::new("/course/base");
        assert_eq!(ws.path("clients.csv"), PathBuf::from("/course/base/clients.csv"));
    }

    #[test]
    fn test_current_matches_env() {
        let ws = Workspace::current().unwrap();
        assert_eq!(ws.root(), std::env::current_dir().unwrap().as_path());
    }
}
