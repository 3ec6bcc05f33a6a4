use crate::error::Result;
use crate::io;
use std::path::Path;

/// The workspace manifest: every destination directory that must exist
/// before extraction begins. Extraction rules and synthesized artifacts may
/// only ever write under these paths — see `driver::validate_destinations`.
pub const WORKSPACE_MANIFEST: [&str; 23] = [
    // Planning layer (BMAD)
    "planning/agents",
    "planning/workflows",
    "planning/templates",
    "planning/checklists",
    // Context layer (xText)
    "contexts/engineering",
    "contexts/prp",
    "contexts/sharding",
    // Implementation layer (SuperClaude)
    "implementation/personas",
    "implementation/commands",
    "implementation/mcp",
    // Testing layer (FloSho)
    "testing/flosho/core",
    "testing/flosho/flows",
    "testing/flosho/documentation",
    // Orchestration layer
    "orchestration/unified-workflow",
    "orchestration/conflict-resolution",
    "orchestration/optimization",
    // Shared resources
    ".claude/commands",
    ".claude/agents",
    "docs/guides",
    "docs/examples",
    "setup/profiles",
    "data/knowledge-base",
    "data/preferences",
];

/// Ensure every manifest directory exists under `root`.
///
/// Creation is recursive and idempotent: pre-existing directories and their
/// contents are left untouched, and a second run is a no-op.
pub fn build_layout(root: &Path) -> Result<()> {
    for dir in WORKSPACE_MANIFEST {
        io::ensure_dir(&root.join(dir))?;
    }
    Ok(())
}

/// Whether `dest` (a workspace-relative directory) is covered by the
/// manifest: either a manifest entry itself, or an ancestor of one (ancestors
/// are created implicitly by the recursive mkdir).
pub fn covers(dest: &str) -> bool {
    WORKSPACE_MANIFEST.iter().any(|entry| {
        *entry == dest
            || entry
                .strip_prefix(dest)
                .is_some_and(|rest| rest.starts_with('/'))
    })
}
