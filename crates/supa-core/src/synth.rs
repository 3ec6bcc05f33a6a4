use crate::commands::unified_commands;
use crate::config::UnifiedConfig;
use crate::error::Result;
use crate::{io, paths};
use std::path::Path;

/// Workspace-relative paths of every file the synthesizer writes. Used by the
/// driver's destination audit before any mutation happens.
pub const OUTPUT_FILES: [&str; 6] = [
    paths::COMMANDS_FILE,
    paths::CONFIG_FILE,
    paths::ORCHESTRATOR_FILE,
    paths::INTEGRATION_FLOW_FILE,
    paths::EXAMPLE_FILE,
    paths::QUICKSTART_FILE,
];

/// Write the unified command registry, the unified configuration, and the
/// narrative artifacts. Operates purely from static defaults — nothing here
/// depends on what extraction actually copied. Every file is overwritten
/// wholesale on each run.
pub fn synthesize(root: &Path) -> Result<Vec<&'static str>> {
    let mut written = Vec::with_capacity(OUTPUT_FILES.len());

    let registry = serde_json::to_string_pretty(&unified_commands())?;
    io::atomic_write(&paths::commands_path(root), registry.as_bytes())?;
    written.push(paths::COMMANDS_FILE);

    let config = serde_json::to_string_pretty(&UnifiedConfig::new())?;
    io::atomic_write(&paths::config_path(root), config.as_bytes())?;
    written.push(paths::CONFIG_FILE);

    let narratives: [(&'static str, &str); 4] = [
        (paths::ORCHESTRATOR_FILE, MASTER_ORCHESTRATOR_MD),
        (paths::INTEGRATION_FLOW_FILE, INTEGRATION_TESTS_MD),
        (paths::EXAMPLE_FILE, EXAMPLE_PROJECT_MD),
        (paths::QUICKSTART_FILE, QUICKSTART_MD),
    ];
    for (rel, content) in narratives {
        io::atomic_write(&root.join(rel), content.as_bytes())?;
        written.push(rel);
    }

    Ok(written)
}

// ---------------------------------------------------------------------------
// Narrative artifact templates
// ---------------------------------------------------------------------------

const MASTER_ORCHESTRATOR_MD: &str = r#"# SupaBMADFloSho Master Orchestrator

## Role

I am the Master Orchestrator for SupaBMADFloSho, coordinating between:

- BMAD planning agents
- xText context engineering
- SuperClaude implementation personas
- FloSho testing framework

## Core Responsibilities

### 1. Workflow Management

- Route tasks to the appropriate framework
- Maintain context across all agents
- Optimize parallel execution
- Resolve conflicts between frameworks

### 2. Context Preservation

- Cache and distribute PRP documents
- Maintain technical preferences
- Track project state
- Share test results

### 3. Task Routing

| Task type | Delegated to |
|---|---|
| research, planning, architecture | BMAD |
| context, requirements, sharding | xText |
| implement, build, develop | SuperClaude |
| test, document, validate | FloSho |
| anything else | unified handling |

### 4. Quality Assurance

- Ensure all frameworks follow the PRP
- Validate outputs against requirements
- Coordinate testing across components
- Generate unified documentation

## Startup Sequence

1. Load the project PRP (if one exists)
2. Initialize all framework agents
3. Establish communication channels
4. Begin the orchestrated workflow

## Commands

- `/supa:status` - Show all active agents and tasks
- `/supa:route [task]` - Manually route a task
- `/supa:optimize` - Optimize the current workflow
- `/supa:report` - Generate a unified progress report
"#;

const INTEGRATION_TESTS_MD: &str = r#"# SupaBMADFloSho Integration Test Flow

## Test: Complete Project Lifecycle

### 1. Initialization

`supa:init` on a fresh project must produce all four framework outputs:
a BMAD brief, an xText PRP skeleton, SuperClaude persona assignments, and
a FloSho test scaffold.

### 2. Planning Integration

BMAD planning feeds the xText PRP: the PRP's requirements must match the
PRD's feature list, and its context must carry the PRD's technical
requirements forward.

### 3. Implementation Integration

SuperClaude personas must implement against the loaded PRP context: the
implementation matches the stated requirements and uses the project's
recorded technical preferences.

### 4. Testing Integration

FloSho generates tests from the PRP: test scenarios cover the PRP's user
stories, and flow coverage stays above 90%.
"#;

const EXAMPLE_PROJECT_MD: &str = r#"# Example: Building a Team Collaboration Platform

## Using SupaBMADFloSho

### 1. Initialize Project

```bash
/supa:init "Team collaboration platform with real-time features"
```

This triggers:

- BMAD Analyst researches the collaboration-tools market
- xText generates the initial PRP structure
- SuperClaude assigns specialized personas
- FloSho sets up the test framework

### 2. Planning Phase

```bash
/supa:plan collaborative
```

Results in a comprehensive PRD from the BMAD PM, a technical architecture
from the BMAD Architect, an enhanced PRP with full context from xText,
persona assignments from SuperClaude, and test scenarios from FloSho.

### 3. Implementation Phase

```bash
/supa:implement parallel
```

Frontend, backend, database, and DevOps personas work in parallel, all
reading from the same PRP context.

### 4. Testing & Documentation

```bash
/supa:test comprehensive
```

Generates visual regression tests, API endpoint tests, an integration test
suite, complete documentation, and a deployment guide.

## Key Advantages Demonstrated

1. **No context loss**: every agent knows the full picture
2. **Parallel execution**: multiple personas work simultaneously
3. **Automatic quality**: tests are generated from requirements
4. **Living documentation**: updates automatically with the code
"#;

const QUICKSTART_MD: &str = r#"# SupaBMADFloSho Quickstart

The installer has merged BMAD-METHOD, xText-PRP, and SuperClaude into this
workspace. Where things landed:

| Layer | Path |
|---|---|
| Planning (BMAD) | `planning/` |
| Context engineering (xText) | `contexts/` |
| Implementation (SuperClaude) | `implementation/` |
| Testing (FloSho) | `testing/flosho/` |
| Orchestration | `orchestration/` |
| Unified commands | `.claude/commands/unified-commands.json` |
| Unified configuration | `.claude/supa-config.json` |

## Next Steps

1. Read the orchestrator role: `orchestration/master-orchestrator.md`
2. Try the worked example: `docs/examples/team-collaboration-example.md`
3. Start a project:

```bash
/supa:init "your idea"
```

## Command Reference

- `/supa:init` - initialize a new project across all frameworks
- `/supa:plan` - run the unified planning workflow
- `/supa:implement` - context-aware implementation
- `/supa:test` - unified testing and documentation
- `/supa:optimize` - optimize workflow and resolve conflicts

Re-running the installer is safe: directory creation is idempotent and
every synthesized file is overwritten wholesale.
"#;
