//! Invocations of the external npm and node binaries
//!
//! The installer is opaque to the cache gate: only its exit status
//! matters. Interactive output passes straight through to the caller's
//! terminal via inherited stdio.

use crate::error::{ModcacheError, ModcacheResult};
use std::path::Path;
use std::process::Stdio;
use tokio::process::{Child, Command};
use tracing::debug;

const NPM: &str = "npm";
const NODE: &str = "node";

/// Current node version string, e.g. "v22.1.0"
pub async fn node_version() -> ModcacheResult<String> {
    let output = Command::new(NODE)
        .arg("--version")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| ModcacheError::command_failed("node --version", e))?;

    if !output.status.success() {
        return Err(ModcacheError::CommandExit {
            command: "node --version".to_string(),
            code: output.status.code().unwrap_or(-1),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

/// Run `npm rebuild` to completion with inherited stdio.
///
/// This one is deliberately synchronous from the orchestrator's point
/// of view: its success gates whether the install step may run at all.
pub async fn rebuild(project_dir: &Path) -> ModcacheResult<()> {
    debug!("Running npm rebuild");

    let status = Command::new(NPM)
        .arg("rebuild")
        .current_dir(project_dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|e| ModcacheError::command_failed("npm rebuild", e))?;

    if status.success() {
        Ok(())
    } else {
        Err(ModcacheError::CommandExit {
            command: "npm rebuild".to_string(),
            code: status.code().unwrap_or(-1),
        })
    }
}

/// Spawn `npm install` with any caller-supplied trailing arguments.
///
/// Returns the running child; the caller awaits its termination and
/// decides what to do with the exit status.
pub fn spawn_install(project_dir: &Path, extra_args: &[String]) -> ModcacheResult<Child> {
    debug!("Spawning npm install with extra args {:?}", extra_args);

    Command::new(NPM)
        .arg("install")
        .args(extra_args)
        .current_dir(project_dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| ModcacheError::command_failed("npm install", e))
}
