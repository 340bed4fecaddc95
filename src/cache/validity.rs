//! Cache validity: deep comparison of current manifests against snapshots
//!
//! package-lock.json is the sole authority whenever it exists, even if
//! package.json also changed. Equality is full structural equality over
//! the parsed JSON values: object key order irrelevant, array order
//! relevant, no type coercion.

use crate::cache::store;
use crate::error::ModcacheResult;
use crate::layout::{Layout, ManifestKind};
use serde_json::Value;
use tracing::info;

/// Compare a current manifest against its cached snapshot.
fn snapshot_matches(kind: ManifestKind, current: &Value, cached: Option<&Value>) -> bool {
    match cached {
        None => {
            info!("node_modules cache invalid: No cached {kind}");
            false
        }
        Some(cached) if cached != current => {
            info!("node_modules cache invalid: Cached {kind} is invalid");
            false
        }
        Some(_) => true,
    }
}

/// Decide whether the installed tree still matches the project manifests.
///
/// Fatal when neither package-lock.json nor package.json exists.
pub fn is_cache_valid(layout: &Layout) -> ModcacheResult<bool> {
    if let Some(lock) = store::read_manifest(layout, ManifestKind::Lock)? {
        let cached = store::read_snapshot(layout, ManifestKind::Lock)?;
        return Ok(snapshot_matches(ManifestKind::Lock, &lock, cached.as_ref()));
    }

    let package = store::read_required(layout, ManifestKind::Package)?;
    let cached = store::read_snapshot(layout, ManifestKind::Package)?;
    Ok(snapshot_matches(ManifestKind::Package, &package, cached.as_ref()))
}
