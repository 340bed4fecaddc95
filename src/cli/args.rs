//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Modcache - cache-validation gate for npm installs
///
/// Skips `npm install` when node_modules already matches the current
/// package.json/package-lock.json, and rebuilds native modules when
/// the node version changes.
#[derive(Parser, Debug)]
#[command(name = "modcache")]
#[command(author, version, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Project directory (defaults to current directory)
    #[arg(short, long, global = true, env = "MODCACHE_PROJECT")]
    pub project: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Exit 0 if the cache is valid, 1 otherwise; mutates nothing
    Check,

    /// Remove the cache snapshots from node_modules
    Clear,

    /// Record the current manifests as the cache, assuming the last
    /// npm install succeeded
    Set,

    /// Run npm install if the cache does not match the current manifests
    Install(InstallArgs),

    /// Delete node_modules and run npm install if the cache does not match
    Reinstall(InstallArgs),
}

/// Arguments forwarded to the installer
#[derive(Parser, Debug)]
pub struct InstallArgs {
    /// Extra arguments passed through verbatim to npm install
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}
