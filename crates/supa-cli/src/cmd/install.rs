use anyhow::Context;
use std::path::Path;
use supa_core::driver::{self, InstallOptions, Stage};
use supa_core::extract::{self, RuleOutcome};
use supa_core::retrieve::{self, CleanupOutcome, RetrieveOutcome};
use supa_core::source::SOURCES;
use supa_core::{layout, paths, preflight, synth, InstallError};

const BANNER: &str = "\
SupaBMADFloSho Unified Installer

Merging the best of:
  BMAD-METHOD  - agentic planning & workflows
  xText-PRP    - context engineering
  SuperClaude  - enhanced commands & personas
  FloSho       - visual testing & documentation
";

/// The install driver: preflight → layout → (retrieve, extract) per
/// framework → synthesize → cleanup. Strictly sequential and forward-only;
/// the first failure aborts the run with its stage recorded in the error
/// chain. Completed steps are left on disk — re-running converges through
/// idempotent directory creation and overwrite-on-copy.
pub fn run(root: &Path, opts: InstallOptions) -> anyhow::Result<()> {
    println!("{BANNER}");
    println!("Installing into: {}", root.display());

    // Manifest/rule co-design audit — before any filesystem mutation.
    driver::validate_destinations().context("destination audit failed")?;

    // Preflight
    println!("\nChecking dependencies:");
    if opts.skip_preflight {
        println!("  skipped (--skip-preflight)");
    } else {
        let report = preflight::check_environment();
        for tool in &report.tools {
            match &tool.version {
                Some(version) => println!("  ok:      {} {version}", tool.name),
                None => println!("  missing: {} — {}", tool.name, tool.hint),
            }
        }
        if !report.ready() {
            return Err(InstallError::EnvironmentNotReady(report.missing().join(", ")))
                .with_context(|| format!("{} failed", Stage::Preflight));
        }
    }

    // Layout
    println!("\nCreating workspace layout:");
    layout::build_layout(root).with_context(|| format!("{} failed", Stage::Layout))?;
    println!(
        "  ensured {} directories",
        layout::WORKSPACE_MANIFEST.len()
    );

    // Retrieval + extraction, one framework at a time
    for descriptor in &SOURCES {
        let framework = descriptor.framework;
        println!("\nIntegrating {}:", framework.display_name());

        if opts.offline {
            println!("  offline: using {} as-is", descriptor.staging_path);
        } else {
            let outcome = retrieve::retrieve(root, descriptor)
                .with_context(|| format!("{} failed", Stage::Retrieve(framework)))?;
            match outcome {
                RetrieveOutcome::Cloned => {
                    println!("  cloned:  {} -> {}", descriptor.repo_url, descriptor.staging_path)
                }
                RetrieveOutcome::AlreadyStaged => {
                    println!("  staged:  {} (already present)", descriptor.staging_path)
                }
            }
        }

        let reports = extract::extract(root, framework)
            .with_context(|| format!("{} failed", Stage::Extract(framework)))?;
        for report in reports {
            match report.outcome {
                RuleOutcome::Applied { copied } => {
                    println!("  copied:  {} file(s) — {} -> {}", copied, report.label, report.dest)
                }
                RuleOutcome::SkippedMissing => {
                    println!("  skipped: {} (source subtree absent)", report.label)
                }
            }
        }
    }

    // Synthesis
    println!("\nSynthesizing unified configuration:");
    let written =
        synth::synthesize(root).with_context(|| format!("{} failed", Stage::Synthesize))?;
    for rel in written {
        println!("  wrote:   {rel}");
    }

    // Cleanup
    if opts.keep_staging {
        println!("\nKeeping staging area: {}/", paths::STAGING_DIR);
    } else {
        let outcome = retrieve::cleanup_staging(root, opts.cleanup)
            .with_context(|| format!("{} failed", Stage::Cleanup))?;
        match outcome {
            CleanupOutcome::Removed => println!("\nRemoved staging area: {}/", paths::STAGING_DIR),
            CleanupOutcome::NotPresent => {}
            CleanupOutcome::FailedNonFatal(reason) => {
                println!(
                    "\nwarning: could not remove staging area {}/: {reason}",
                    paths::STAGING_DIR
                )
            }
        }
    }

    println!("\nInstallation complete.");
    println!("Next: read {} to get started.", paths::QUICKSTART_FILE);

    Ok(())
}
