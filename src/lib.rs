//! Modcache - cache-validation gate for npm installs
//!
//! Decides whether an existing node_modules tree still matches the
//! project manifests and only runs the external installer when it
//! does not.

pub mod cache;
pub mod cli;
pub mod error;
pub mod layout;
pub mod npm;
pub mod orchestrator;

pub use error::{ModcacheError, ModcacheResult};
