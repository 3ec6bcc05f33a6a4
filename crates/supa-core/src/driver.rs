use crate::error::{InstallError, Result};
use crate::extract::rules_for;
use crate::retrieve::CleanupPolicy;
use crate::source::Framework;
use crate::{layout, paths, synth};
use std::fmt;

/// States of the install sequence. Strictly forward-only; any failure moves
/// the run to a terminal failed state carrying the stage it died in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Preflight,
    Layout,
    Retrieve(Framework),
    Extract(Framework),
    Synthesize,
    Cleanup,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Preflight => write!(f, "preflight"),
            Stage::Layout => write!(f, "layout"),
            Stage::Retrieve(fw) => write!(f, "retrieve ({fw})"),
            Stage::Extract(fw) => write!(f, "extract ({fw})"),
            Stage::Synthesize => write!(f, "synthesize"),
            Stage::Cleanup => write!(f, "cleanup"),
        }
    }
}

/// Per-run installer options, constructed once at process entry and passed
/// down — no ambient state.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstallOptions {
    /// Skip retrieval entirely; staging trees are used as-is and absent
    /// subtrees degrade to skipped rules.
    pub offline: bool,
    /// Leave the staging area in place after a successful install.
    pub keep_staging: bool,
    /// Trust the environment instead of probing for required tools.
    pub skip_preflight: bool,
    pub cleanup: CleanupPolicy,
}

/// Audit the manifest/rule co-design invariant: every extraction-rule
/// destination and every synthesized file's directory must be covered by the
/// workspace manifest. Run before any filesystem mutation — a violation here
/// is an authoring bug, and failing fast beats silently creating ad-hoc
/// directories at copy time.
pub fn validate_destinations() -> Result<()> {
    for framework in Framework::ALL {
        for rule in rules_for(framework) {
            if !layout::covers(rule.dest) {
                return Err(InstallError::DestinationOutsideManifest(
                    rule.dest.to_string(),
                ));
            }
        }
    }
    for file in synth::OUTPUT_FILES {
        let dir = paths::parent_of(file);
        if !layout::covers(dir) {
            return Err(InstallError::DestinationOutsideManifest(dir.to_string()));
        }
    }
    Ok(())
}
