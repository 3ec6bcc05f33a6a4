use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One unified command: what it does and which per-framework commands it
/// triggers, in order. Static descriptive data — the installer never
/// executes any of this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnifiedCommand {
    pub description: String,
    pub triggers: Vec<String>,
}

fn command(description: &str, triggers: &[&str]) -> UnifiedCommand {
    UnifiedCommand {
        description: description.to_string(),
        triggers: triggers.iter().map(|t| t.to_string()).collect(),
    }
}

/// The fixed unified command registry. Derived from a static table, never
/// from extracted file contents. BTreeMap keeps serialization order stable
/// across runs.
pub fn unified_commands() -> BTreeMap<String, UnifiedCommand> {
    BTreeMap::from([
        (
            "supa:init".to_string(),
            command(
                "Initialize a new SupaBMADFloSho project",
                &["bmad:analyst", "xt:prp", "sc:personas", "fs:setup"],
            ),
        ),
        (
            "supa:plan".to_string(),
            command(
                "Run unified planning workflow",
                &["bmad:plan", "xt:context", "auto-shard"],
            ),
        ),
        (
            "supa:implement".to_string(),
            command(
                "Context-aware implementation",
                &["read-prp", "sc:implement", "fs:test-gen"],
            ),
        ),
        (
            "supa:test".to_string(),
            command(
                "Unified testing and documentation",
                &["fs:flow", "bmad:qa", "auto-doc"],
            ),
        ),
        (
            "supa:optimize".to_string(),
            command(
                "Optimize workflow and resolve conflicts",
                &["analyze-performance", "resolve-conflicts", "cache-context"],
            ),
        ),
    ])
}
