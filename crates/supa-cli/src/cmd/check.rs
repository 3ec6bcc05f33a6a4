use crate::output::print_json;
use supa_core::preflight;

/// `supa check` — probe for required external tools without touching the
/// filesystem. Exits non-zero when the environment is not ready.
pub fn run(json: bool) -> anyhow::Result<()> {
    let report = preflight::check_environment();

    if json {
        print_json(&report)?;
    } else {
        for tool in &report.tools {
            match &tool.version {
                Some(version) => println!("ok:      {} {version}", tool.name),
                None => println!("missing: {} — {}", tool.name, tool.hint),
            }
        }
    }

    if !report.ready() {
        anyhow::bail!(
            "environment not ready: missing required tools: {}",
            report.missing().join(", ")
        );
    }

    if !json {
        println!("environment ready");
    }
    Ok(())
}
