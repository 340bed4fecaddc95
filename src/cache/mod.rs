//! Cache snapshots, validity checks, and environment fingerprinting
//!
//! The cache is considered valid when the authoritative manifest
//! deep-equals the snapshot taken at the last successful install.

pub mod fingerprint;
pub mod store;
pub mod validity;

pub use fingerprint::Fingerprint;
