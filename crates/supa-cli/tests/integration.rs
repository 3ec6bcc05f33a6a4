use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

fn supa(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("supa").unwrap();
    cmd.current_dir(dir.path()).env("SUPA_ROOT", dir.path());
    cmd
}

fn touch(path: &Path, content: &str) {
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

/// Minimal staging trees holding exactly the files named by the extraction
/// rules, stood in for the shallow clones the retrieval step would produce.
fn stage_fixtures(dir: &TempDir) {
    let bmad = dir.path().join("temp/bmad-method/bmad-core");
    touch(&bmad.join("agents/analyst.md"), "# Analyst\n");
    touch(&bmad.join("agents/pm.md"), "# PM\n");
    touch(&bmad.join("agents/architect.md"), "# Architect\n");
    touch(&bmad.join("agents/po.md"), "# PO\n");
    touch(&bmad.join("agents/qa.md"), "# QA\n");
    touch(&bmad.join("workflows/greenfield.yaml"), "steps: []\n");
    touch(&bmad.join("templates/prd-template.md"), "# PRD\n");

    let xtext = dir.path().join("temp/xtext-prp");
    touch(&xtext.join("src/contexts/engineering.md"), "# Context\n");
    touch(&xtext.join("templates/base-prp.md"), "# PRP\n");
    touch(&xtext.join("templates/workflow.md"), "not a prp\n");
    touch(&xtext.join("flosho/index.js"), "module.exports = {};\n");
    touch(&xtext.join("flosho/lib/flow.js"), "// flow\n");

    let sc = dir.path().join("temp/superclaude/.claude");
    touch(&sc.join("personas/frontend.md"), "# Frontend\n");
    touch(&sc.join("commands/build.md"), "# Build\n");
}

fn install_offline(dir: &TempDir) -> Command {
    let mut cmd = supa(dir);
    cmd.args(["install", "--offline", "--skip-preflight"]);
    cmd
}

// ---------------------------------------------------------------------------
// End-to-end install
// ---------------------------------------------------------------------------

#[test]
fn install_creates_the_full_manifest_tree() {
    let dir = TempDir::new().unwrap();
    stage_fixtures(&dir);
    install_offline(&dir).assert().success();

    for rel in [
        "planning/agents",
        "planning/workflows",
        "planning/templates",
        "planning/checklists",
        "contexts/engineering",
        "contexts/prp",
        "contexts/sharding",
        "implementation/personas",
        "implementation/commands",
        "implementation/mcp",
        "testing/flosho/core",
        "testing/flosho/flows",
        "testing/flosho/documentation",
        "orchestration/unified-workflow",
        "orchestration/conflict-resolution",
        "orchestration/optimization",
        ".claude/commands",
        ".claude/agents",
        "docs/guides",
        "docs/examples",
        "setup/profiles",
        "data/knowledge-base",
        "data/preferences",
    ] {
        assert!(dir.path().join(rel).is_dir(), "missing directory {rel}");
    }
}

#[test]
fn install_copies_fixture_files_byte_identical() {
    let dir = TempDir::new().unwrap();
    stage_fixtures(&dir);
    install_offline(&dir).arg("--keep-staging").assert().success();

    for (staged, dest) in [
        (
            "temp/bmad-method/bmad-core/agents/analyst.md",
            "planning/agents/analyst.md",
        ),
        (
            "temp/bmad-method/bmad-core/workflows/greenfield.yaml",
            "planning/workflows/greenfield.yaml",
        ),
        (
            "temp/bmad-method/bmad-core/templates/prd-template.md",
            "planning/templates/prd-template.md",
        ),
        (
            "temp/xtext-prp/src/contexts/engineering.md",
            "contexts/engineering/engineering.md",
        ),
        ("temp/xtext-prp/templates/base-prp.md", "contexts/prp/base-prp.md"),
        ("temp/xtext-prp/flosho/index.js", "testing/flosho/core/index.js"),
        (
            "temp/xtext-prp/flosho/lib/flow.js",
            "testing/flosho/core/lib/flow.js",
        ),
        (
            "temp/superclaude/.claude/personas/frontend.md",
            "implementation/personas/frontend.md",
        ),
        (
            "temp/superclaude/.claude/commands/build.md",
            "implementation/commands/build.md",
        ),
    ] {
        assert_eq!(
            std::fs::read(dir.path().join(staged)).unwrap(),
            std::fs::read(dir.path().join(dest)).unwrap(),
            "content mismatch for {dest}"
        );
    }
}

#[test]
fn install_respects_name_filters() {
    let dir = TempDir::new().unwrap();
    stage_fixtures(&dir);
    install_offline(&dir).assert().success();

    assert!(dir.path().join("contexts/prp/base-prp.md").exists());
    assert!(!dir.path().join("contexts/prp/workflow.md").exists());
}

#[test]
fn install_removes_staging_area_by_default() {
    let dir = TempDir::new().unwrap();
    stage_fixtures(&dir);
    install_offline(&dir).assert().success();

    assert!(!dir.path().join("temp").exists());
}

#[test]
fn keep_staging_preserves_the_staging_area() {
    let dir = TempDir::new().unwrap();
    stage_fixtures(&dir);
    install_offline(&dir).arg("--keep-staging").assert().success();

    assert!(dir.path().join("temp/bmad-method").is_dir());
}

#[test]
fn install_is_idempotent() {
    let dir = TempDir::new().unwrap();
    stage_fixtures(&dir);
    install_offline(&dir).arg("--keep-staging").assert().success();
    install_offline(&dir).arg("--keep-staging").assert().success();

    assert!(dir.path().join("planning/agents/analyst.md").exists());
    assert!(dir.path().join(".claude/supa-config.json").exists());
}

// ---------------------------------------------------------------------------
// Degraded paths
// ---------------------------------------------------------------------------

#[test]
fn missing_subtrees_are_skipped_not_fatal() {
    let dir = TempDir::new().unwrap();
    // Only one framework staged, and only part of its layout.
    touch(
        &dir.path().join("temp/bmad-method/bmad-core/agents/analyst.md"),
        "# Analyst\n",
    );

    install_offline(&dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("skipped:"));

    assert!(dir.path().join("planning/agents/analyst.md").exists());
    // Nothing written for the absent rules.
    assert!(std::fs::read_dir(dir.path().join("planning/workflows"))
        .unwrap()
        .next()
        .is_none());
    assert!(std::fs::read_dir(dir.path().join("implementation/personas"))
        .unwrap()
        .next()
        .is_none());
}

#[test]
fn fully_absent_staging_still_installs() {
    let dir = TempDir::new().unwrap();
    install_offline(&dir).assert().success();

    assert!(dir.path().join(".claude/supa-config.json").exists());
    assert!(dir
        .path()
        .join(".claude/commands/unified-commands.json")
        .exists());
}

// ---------------------------------------------------------------------------
// Synthesized documents
// ---------------------------------------------------------------------------

#[test]
fn command_registry_contains_exactly_the_fixed_set() {
    let dir = TempDir::new().unwrap();
    install_offline(&dir).assert().success();

    let registry: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(dir.path().join(".claude/commands/unified-commands.json"))
            .unwrap(),
    )
    .unwrap();
    let names: Vec<&str> = registry.as_object().unwrap().keys().map(String::as_str).collect();
    let mut expected = vec![
        "supa:init",
        "supa:plan",
        "supa:implement",
        "supa:test",
        "supa:optimize",
    ];
    expected.sort_unstable();
    assert_eq!(names, expected);
    assert_eq!(
        registry["supa:plan"]["triggers"],
        serde_json::json!(["bmad:plan", "xt:context", "auto-shard"])
    );
}

#[test]
fn unified_config_marks_all_frameworks_enabled() {
    let dir = TempDir::new().unwrap();
    install_offline(&dir).assert().success();

    let config: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(dir.path().join(".claude/supa-config.json")).unwrap(),
    )
    .unwrap();
    for framework in ["bmad", "xtext", "superclaude", "flosho"] {
        assert_eq!(
            config["frameworks"][framework]["enabled"], true,
            "{framework} should be enabled"
        );
    }
    assert_eq!(config["name"], "SupaBMADFloSho");
    assert_eq!(config["orchestration"]["routing"], "automatic");
}

#[test]
fn narrative_artifacts_are_written() {
    let dir = TempDir::new().unwrap();
    install_offline(&dir).assert().success();

    for rel in [
        "orchestration/master-orchestrator.md",
        "testing/integration-tests.md",
        "docs/examples/team-collaboration-example.md",
        "docs/guides/quickstart.md",
    ] {
        assert!(dir.path().join(rel).is_file(), "missing {rel}");
    }
}

#[test]
fn rerun_overwrites_synthesized_documents_wholesale() {
    let dir = TempDir::new().unwrap();
    install_offline(&dir).assert().success();
    std::fs::write(
        dir.path().join(".claude/supa-config.json"),
        b"{\"tampered\": true}",
    )
    .unwrap();

    install_offline(&dir).assert().success();

    let content =
        std::fs::read_to_string(dir.path().join(".claude/supa-config.json")).unwrap();
    assert!(!content.contains("tampered"));
}

// ---------------------------------------------------------------------------
// Preflight
// ---------------------------------------------------------------------------

#[test]
fn preflight_failure_aborts_before_any_mutation() {
    let dir = TempDir::new().unwrap();
    // Empty PATH: no tool resolves, and `supa` with no subcommand runs the
    // full install by default.
    supa(&dir)
        .env("PATH", "")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required tools"));

    assert!(!dir.path().join("planning").exists());
    assert!(!dir.path().join(".claude").exists());
}

#[test]
fn check_reports_not_ready_with_empty_path() {
    let dir = TempDir::new().unwrap();
    supa(&dir)
        .arg("check")
        .env("PATH", "")
        .assert()
        .failure()
        .stdout(predicate::str::contains("missing:"));
}

#[test]
fn check_json_emits_a_tool_report() {
    let dir = TempDir::new().unwrap();
    let output = supa(&dir)
        .args(["check", "--json"])
        .env("PATH", "")
        .output()
        .unwrap();

    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("check --json prints valid JSON");
    assert_eq!(report["tools"].as_array().unwrap().len(), 3);
}
