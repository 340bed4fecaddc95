//! On-disk layout of manifests and cache snapshots
//!
//! Snapshots live inside node_modules itself, as dotfiles, so clearing
//! the dependency tree implicitly clears the cache with it.

use std::fmt;
use std::path::{Path, PathBuf};

/// Directory holding the installed dependency tree
pub const MODULES_DIR: &str = "node_modules";

/// Fingerprint file name inside node_modules
const FINGERPRINT_FILE: &str = ".meta.json";

/// Which manifest file drives cache validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestKind {
    /// package.json - declared version ranges
    Package,
    /// package-lock.json - exact resolved versions; wins whenever present
    Lock,
}

impl ManifestKind {
    /// Manifest file name in the project directory
    pub fn file_name(&self) -> &'static str {
        match self {
            Self::Package => "package.json",
            Self::Lock => "package-lock.json",
        }
    }

    /// Snapshot file name inside node_modules
    pub fn snapshot_name(&self) -> &'static str {
        match self {
            Self::Package => ".package.json",
            Self::Lock => ".package-lock.json",
        }
    }
}

impl fmt::Display for ManifestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

/// Resolved file paths for one project directory
#[derive(Debug, Clone)]
pub struct Layout {
    project_dir: PathBuf,
}

impl Layout {
    pub fn new(project_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_dir: project_dir.into(),
        }
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn modules_dir(&self) -> PathBuf {
        self.project_dir.join(MODULES_DIR)
    }

    pub fn manifest(&self, kind: ManifestKind) -> PathBuf {
        self.project_dir.join(kind.file_name())
    }

    pub fn snapshot(&self, kind: ManifestKind) -> PathBuf {
        self.modules_dir().join(kind.snapshot_name())
    }

    pub fn fingerprint(&self) -> PathBuf {
        self.modules_dir().join(FINGERPRINT_FILE)
    }
}
