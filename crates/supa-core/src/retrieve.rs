use crate::error::{InstallError, Result};
use crate::paths;
use crate::source::FrameworkDescriptor;
use std::path::Path;
use std::process::Command;

/// What happened when retrieving a framework's source tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetrieveOutcome {
    Cloned,
    /// The staging path already holds a tree from a prior run; reused as-is.
    AlreadyStaged,
}

/// Shallow-clone a framework's repository into its staging path. An existing
/// staging tree is reused rather than refreshed — `temp/` is removed at the
/// end of a successful install, so leftovers only survive failed runs.
pub fn retrieve(root: &Path, descriptor: &FrameworkDescriptor) -> Result<RetrieveOutcome> {
    let staging = root.join(descriptor.staging_path);
    if staging.exists() {
        return Ok(RetrieveOutcome::AlreadyStaged);
    }

    let status = Command::new("git")
        .args(["clone", "--depth=1", descriptor.repo_url])
        .arg(&staging)
        .status()
        .map_err(|e| InstallError::RetrievalFailed {
            framework: descriptor.framework.to_string(),
            reason: format!("failed to spawn git: {e}"),
        })?;

    if !status.success() {
        return Err(InstallError::RetrievalFailed {
            framework: descriptor.framework.to_string(),
            reason: format!("git clone exited with {status}"),
        });
    }
    Ok(RetrieveOutcome::Cloned)
}

/// Whether a failure to remove the staging area aborts the install.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CleanupPolicy {
    /// Report the failure but let the install succeed (the staging area is
    /// disposable; a leftover `temp/` costs disk, not correctness).
    #[default]
    Lenient,
    /// Treat removal failure like any other filesystem failure.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanupOutcome {
    Removed,
    NotPresent,
    /// Removal failed under the lenient policy; carries the failure text.
    FailedNonFatal(String),
}

/// Remove the staging area used for retrieval.
pub fn cleanup_staging(root: &Path, policy: CleanupPolicy) -> Result<CleanupOutcome> {
    let staging = paths::staging_dir(root);
    if !staging.exists() {
        return Ok(CleanupOutcome::NotPresent);
    }
    match std::fs::remove_dir_all(&staging) {
        Ok(()) => Ok(CleanupOutcome::Removed),
        Err(e) => match policy {
            CleanupPolicy::Lenient => Ok(CleanupOutcome::FailedNonFatal(e.to_string())),
            CleanupPolicy::Strict => Err(InstallError::CleanupFailed {
                path: staging.display().to_string(),
                source: e,
            }),
        },
    }
}
