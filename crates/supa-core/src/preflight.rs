use serde::Serialize;
use std::process::Command;

/// An external tool the installer requires before mutating anything.
#[derive(Debug, Clone, Copy)]
pub struct ToolProbe {
    /// Human-facing name, shown in status lines.
    pub name: &'static str,
    /// Executable to look up and invoke.
    pub command: &'static str,
    /// Operator hint printed when the tool is missing.
    pub hint: &'static str,
}

/// The fixed preflight set: a JavaScript runtime, its package manager, and a
/// version-control client (retrieval shells out to git).
pub const REQUIRED_TOOLS: [ToolProbe; 3] = [
    ToolProbe {
        name: "Node.js",
        command: "node",
        hint: "install Node.js 20+",
    },
    ToolProbe {
        name: "npm",
        command: "npm",
        hint: "install npm (ships with Node.js)",
    },
    ToolProbe {
        name: "git",
        command: "git",
        hint: "install git",
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct ToolStatus {
    pub name: &'static str,
    /// First line of `<tool> --version` output, or None when the tool is
    /// missing or refused the version query.
    pub version: Option<String>,
    pub hint: &'static str,
}

impl ToolStatus {
    pub fn found(&self) -> bool {
        self.version.is_some()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PreflightReport {
    pub tools: Vec<ToolStatus>,
}

impl PreflightReport {
    /// The "environment ready" signal: every required tool answered.
    pub fn ready(&self) -> bool {
        self.tools.iter().all(ToolStatus::found)
    }

    pub fn missing(&self) -> Vec<&'static str> {
        self.tools
            .iter()
            .filter(|t| !t.found())
            .map(|t| t.name)
            .collect()
    }
}

/// Probe the fixed required-tool set.
pub fn check_environment() -> PreflightReport {
    probe(&REQUIRED_TOOLS)
}

/// Probe an explicit tool set. A tool counts as present only when it both
/// resolves on PATH and exits zero from a `--version` query.
pub fn probe(tools: &[ToolProbe]) -> PreflightReport {
    let tools = tools
        .iter()
        .map(|tool| ToolStatus {
            name: tool.name,
            version: query_version(tool.command),
            hint: tool.hint,
        })
        .collect();
    PreflightReport { tools }
}

fn query_version(command: &str) -> Option<String> {
    which::which(command).ok()?;
    let output = Command::new(command).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    Some(stdout.lines().next().unwrap_or_default().trim().to_string())
}
