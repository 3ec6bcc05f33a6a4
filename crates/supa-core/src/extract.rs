use crate::error::Result;
use crate::io;
use crate::source::{descriptor, Framework};
use regex::Regex;
use std::path::Path;

// ---------------------------------------------------------------------------
// Rule model
// ---------------------------------------------------------------------------

/// How a rule selects files within its source subtree.
#[derive(Debug, Clone)]
pub enum RulePattern {
    /// An explicit set of file names; names missing from the source are
    /// skipped without error.
    Named(&'static [&'static str]),
    /// A file-name glob matched against direct children of the source
    /// directory (`*` matches any run of characters).
    Glob(&'static str),
    /// The whole subtree, copied recursively and additively.
    Tree,
}

/// A declarative mapping from a source subtree to a destination directory.
/// Applying a rule copies files; rules never merge file contents.
#[derive(Debug, Clone)]
pub struct ExtractionRule {
    pub label: &'static str,
    /// Path relative to the framework's staging tree.
    pub source: &'static str,
    /// Destination directory relative to the workspace root. Must be covered
    /// by the workspace manifest.
    pub dest: &'static str,
    pub pattern: RulePattern,
}

const BMAD_RULES: [ExtractionRule; 3] = [
    ExtractionRule {
        label: "planning agents",
        source: "bmad-core/agents",
        dest: "planning/agents",
        pattern: RulePattern::Named(&["analyst.md", "pm.md", "architect.md", "po.md", "qa.md"]),
    },
    ExtractionRule {
        label: "planning workflows",
        source: "bmad-core/workflows",
        dest: "planning/workflows",
        pattern: RulePattern::Glob("*.yaml"),
    },
    ExtractionRule {
        label: "planning templates",
        source: "bmad-core/templates",
        dest: "planning/templates",
        pattern: RulePattern::Glob("*.md"),
    },
];

const XTEXT_RULES: [ExtractionRule; 3] = [
    ExtractionRule {
        label: "context engineering",
        source: "src/contexts",
        dest: "contexts/engineering",
        pattern: RulePattern::Glob("*.md"),
    },
    ExtractionRule {
        label: "PRP templates",
        source: "templates",
        dest: "contexts/prp",
        pattern: RulePattern::Glob("*prp*.md"),
    },
    ExtractionRule {
        label: "FloSho core",
        source: "flosho",
        dest: "testing/flosho/core",
        pattern: RulePattern::Tree,
    },
];

const SUPERCLAUDE_RULES: [ExtractionRule; 2] = [
    ExtractionRule {
        label: "personas",
        source: ".claude/personas",
        dest: "implementation/personas",
        pattern: RulePattern::Glob("*.md"),
    },
    ExtractionRule {
        label: "commands",
        source: ".claude/commands",
        dest: "implementation/commands",
        pattern: RulePattern::Glob("*.md"),
    },
];

/// The extraction rule set for a framework, in application order.
pub fn rules_for(framework: Framework) -> &'static [ExtractionRule] {
    match framework {
        Framework::Bmad => &BMAD_RULES,
        Framework::Xtext => &XTEXT_RULES,
        Framework::Superclaude => &SUPERCLAUDE_RULES,
    }
}

// ---------------------------------------------------------------------------
// Application
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    Applied { copied: usize },
    /// The rule's source subtree was absent. Designed degraded path, not an
    /// error — frameworks drift and optional features go missing.
    SkippedMissing,
}

#[derive(Debug, Clone)]
pub struct RuleReport {
    pub label: &'static str,
    pub dest: &'static str,
    pub outcome: RuleOutcome,
}

/// Apply every rule of `framework` against its staging tree under `root`.
///
/// Requires the destination directories to already exist (layout step) —
/// extraction never creates ad-hoc destination directories. A missing
/// staging tree degrades to every rule being skipped.
pub fn extract(root: &Path, framework: Framework) -> Result<Vec<RuleReport>> {
    let staging = root.join(descriptor(framework).staging_path);
    let mut reports = Vec::new();

    for rule in rules_for(framework) {
        let src = staging.join(rule.source);
        if !src.exists() {
            reports.push(RuleReport {
                label: rule.label,
                dest: rule.dest,
                outcome: RuleOutcome::SkippedMissing,
            });
            continue;
        }
        let copied = apply_rule(&src, &root.join(rule.dest), &rule.pattern)?;
        reports.push(RuleReport {
            label: rule.label,
            dest: rule.dest,
            outcome: RuleOutcome::Applied { copied },
        });
    }

    Ok(reports)
}

fn apply_rule(src: &Path, dest_dir: &Path, pattern: &RulePattern) -> Result<usize> {
    match pattern {
        RulePattern::Named(names) => {
            let mut copied = 0;
            for name in *names {
                let file = src.join(name);
                if file.exists() {
                    io::copy_file(&file, &dest_dir.join(name))?;
                    copied += 1;
                }
            }
            Ok(copied)
        }
        RulePattern::Glob(glob) => {
            let re = glob_regex(glob);
            let mut copied = 0;
            for entry in std::fs::read_dir(src)? {
                let entry = entry?;
                if !entry.file_type()?.is_file() {
                    continue;
                }
                let name = entry.file_name();
                let Some(name) = name.to_str() else { continue };
                if re.is_match(name) {
                    io::copy_file(&entry.path(), &dest_dir.join(name))?;
                    copied += 1;
                }
            }
            Ok(copied)
        }
        RulePattern::Tree => io::copy_tree(src, dest_dir),
    }
}

/// Compile a file-name glob (`*` = any run of characters) into an anchored
/// regex. Patterns are authored in the static rule tables, so compilation
/// cannot fail on user input.
fn glob_regex(glob: &str) -> Regex {
    let body = glob
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");
    Regex::new(&format!("^{body}$")).expect("static glob compiles")
}
