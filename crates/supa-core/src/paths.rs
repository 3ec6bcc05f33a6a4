use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

/// Staging area for retrieved framework source trees. Removed after install.
pub const STAGING_DIR: &str = "temp";

// ---------------------------------------------------------------------------
// Synthesized artifact paths (workspace-relative)
// ---------------------------------------------------------------------------

pub const COMMANDS_FILE: &str = ".claude/commands/unified-commands.json";
pub const CONFIG_FILE: &str = ".claude/supa-config.json";
pub const ORCHESTRATOR_FILE: &str = "orchestration/master-orchestrator.md";
pub const INTEGRATION_FLOW_FILE: &str = "testing/integration-tests.md";
pub const EXAMPLE_FILE: &str = "docs/examples/team-collaboration-example.md";
pub const QUICKSTART_FILE: &str = "docs/guides/quickstart.md";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn staging_dir(root: &Path) -> PathBuf {
    root.join(STAGING_DIR)
}

pub fn commands_path(root: &Path) -> PathBuf {
    root.join(COMMANDS_FILE)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

/// Workspace-relative parent directory of a workspace-relative file path.
pub fn parent_of(rel: &str) -> &str {
    rel.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_helpers() {
        let root = Path::new("/tmp/proj");
        assert_eq!(
            config_path(root),
            PathBuf::from("/tmp/proj/.claude/supa-config.json")
        );
        assert_eq!(
            commands_path(root),
            PathBuf::from("/tmp/proj/.claude/commands/unified-commands.json")
        );
        assert_eq!(staging_dir(root), PathBuf::from("/tmp/proj/temp"));
    }

    #[test]
    fn parent_of_strips_last_segment() {
        assert_eq!(parent_of(ORCHESTRATOR_FILE), "orchestration");
        assert_eq!(parent_of(COMMANDS_FILE), ".claude/commands");
        assert_eq!(parent_of("flat.md"), "");
    }
}
