//! Environment fingerprint: detects node version changes
//!
//! A changed node version only requires rebuilding native modules in
//! place, not a full reinstall, so the fingerprint is checked and
//! persisted independently of the manifest snapshots.

use crate::cache::store;
use crate::error::ModcacheResult;
use crate::layout::Layout;
use crate::npm;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Runtime identity recorded after a successful install or rebuild
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fingerprint {
    #[serde(rename = "nodeVersion")]
    pub node_version: String,
}

impl Fingerprint {
    /// Fingerprint of the currently active runtime
    pub async fn current() -> ModcacheResult<Self> {
        Ok(Self {
            node_version: npm::node_version().await?,
        })
    }

    fn to_value(&self) -> Value {
        json!({ "nodeVersion": self.node_version })
    }

    /// True when the stored fingerprint deep-equals this one.
    ///
    /// The stored file is compared as a raw JSON value, so an absent or
    /// differently-shaped record is a mismatch rather than an error.
    pub fn matches_stored(&self, layout: &Layout) -> ModcacheResult<bool> {
        let stored = store::read_json(&layout.fingerprint())?;
        Ok(stored.as_ref() == Some(&self.to_value()))
    }

    /// Best-effort persist; a failed write never fails the install.
    pub fn store(&self, layout: &Layout) {
        store::write_best_effort(&layout.fingerprint(), &self.to_value());
    }
}
