//! Snapshot store: the small JSON bookkeeping files inside node_modules
//!
//! Reads distinguish "file absent" (a normal value) from "file present
//! but unreadable" (a fatal error). Writes are best-effort: a failed
//! bookkeeping write must never fail an otherwise-successful install.

use crate::error::{ModcacheError, ModcacheResult};
use crate::layout::{Layout, ManifestKind};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::debug;

/// Read and parse a JSON file, mapping "not found" to `None`.
///
/// Any other IO error, and any parse error, propagates.
pub fn read_json(path: &Path) -> ModcacheResult<Option<Value>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(ModcacheError::io(format!("reading {}", path.display()), e)),
    };

    let value = serde_json::from_str(&contents).map_err(|e| ModcacheError::ManifestParse {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(Some(value))
}

/// Read a project manifest; `None` when the file does not exist.
pub fn read_manifest(layout: &Layout, kind: ManifestKind) -> ModcacheResult<Option<Value>> {
    read_json(&layout.manifest(kind))
}

/// Read a project manifest that must exist.
///
/// This is the one place where an absent file escalates to a hard
/// failure instead of a cache miss.
pub fn read_required(layout: &Layout, kind: ManifestKind) -> ModcacheResult<Value> {
    read_manifest(layout, kind)?.ok_or_else(|| ModcacheError::ManifestMissing(layout.manifest(kind)))
}

/// Read the cached snapshot for a manifest kind; `None` when absent.
pub fn read_snapshot(layout: &Layout, kind: ManifestKind) -> ModcacheResult<Option<Value>> {
    read_json(&layout.snapshot(kind))
}

/// Best-effort write of a snapshot file.
pub fn write_snapshot(layout: &Layout, kind: ManifestKind, value: &Value) {
    write_best_effort(&layout.snapshot(kind), value);
}

/// Serialize `value` to `path`, creating the parent directory if needed.
/// Failures are logged and swallowed.
pub(crate) fn write_best_effort(path: &Path, value: &Value) {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    match serde_json::to_string(value) {
        Ok(json) => {
            if let Err(e) = fs::write(path, json) {
                debug!("Snapshot write to {} failed: {}", path.display(), e);
            }
        }
        Err(e) => debug!("Snapshot serialization for {} failed: {}", path.display(), e),
    }
}

/// Record the current manifests as the cache.
///
/// package.json must exist; its snapshot is always written. The lock
/// snapshot is written only when package-lock.json is present, both
/// read fresh at call time.
pub fn set_snapshots(layout: &Layout) -> ModcacheResult<()> {
    let package = read_required(layout, ManifestKind::Package)?;
    write_snapshot(layout, ManifestKind::Package, &package);

    if let Some(lock) = read_manifest(layout, ManifestKind::Lock)? {
        write_snapshot(layout, ManifestKind::Lock, &lock);
    }
    Ok(())
}

/// Best-effort removal of all snapshot and fingerprint files.
///
/// Absence is not an error; repeated calls are idempotent.
pub fn clear(layout: &Layout) {
    let paths = [
        layout.snapshot(ManifestKind::Package),
        layout.snapshot(ManifestKind::Lock),
        layout.fingerprint(),
    ];
    for path in paths {
        if let Err(e) = fs::remove_file(&path) {
            if e.kind() != ErrorKind::NotFound {
                debug!("Failed to remove {}: {}", path.display(), e);
            }
        }
    }
}
