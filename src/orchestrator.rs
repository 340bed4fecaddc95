//! Install orchestration
//!
//! Runs the gate end to end: fingerprint check (cheap rebuild), cache
//! check (skip or reinstall), external install, and re-snapshotting on
//! success. A failed install leaves the cache cleared so the next
//! invocation cannot mistake a partial tree for a valid one.

use crate::cache::{store, validity, Fingerprint};
use crate::error::{ModcacheError, ModcacheResult};
use crate::layout::Layout;
use crate::npm;
use std::io::ErrorKind;
use std::path::Path;
use std::process::ExitCode;
use tracing::info;

/// Run the install gate.
///
/// When `reinstall` is set and the cache is invalid, the whole
/// node_modules tree is deleted before the installer runs; otherwise
/// the existing tree is augmented in place. Trailing arguments are
/// forwarded verbatim to `npm install`.
pub async fn install(
    layout: &Layout,
    reinstall: bool,
    extra_args: &[String],
) -> ModcacheResult<ExitCode> {
    let current = Fingerprint::current().await?;
    if !current.matches_stored(layout)? {
        info!("Node version changed, rebuilding native modules");
        npm::rebuild(layout.project_dir()).await?;
        current.store(layout);
    }

    if validity::is_cache_valid(layout)? {
        info!("No install necessary as cache appears to be valid");
        return Ok(ExitCode::SUCCESS);
    }

    store::clear(layout);
    if reinstall {
        remove_tree(&layout.modules_dir()).await?;
    }

    let mut child = npm::spawn_install(layout.project_dir(), extra_args)?;
    let status = child
        .wait()
        .await
        .map_err(|e| ModcacheError::io("waiting for npm install", e))?;

    match status.code() {
        Some(0) => {
            info!("Setting cache after successful npm install");
            store::set_snapshots(layout)?;
            current.store(layout);
            Ok(ExitCode::SUCCESS)
        }
        // Propagate the installer's own exit code; the cache stays
        // cleared so the partial tree reads as invalid next time.
        Some(code) => Ok(ExitCode::from(u8::try_from(code).unwrap_or(1))),
        // Killed by a signal
        None => Ok(ExitCode::FAILURE),
    }
}

/// Delete a directory tree, tolerating absence.
async fn remove_tree(dir: &Path) -> ModcacheResult<()> {
    match tokio::fs::remove_dir_all(dir).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(ModcacheError::io(format!("removing {}", dir.display()), e)),
    }
}
