use crate::source::Framework;
use crate::SUPA_VERSION;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Per-framework settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmadSettings {
    pub enabled: bool,
    pub agents: Vec<String>,
    pub planning_mode: PlanningMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlanningMode {
    Collaborative,
    Autonomous,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XtextSettings {
    pub enabled: bool,
    pub auto_prp: bool,
    pub context_engineering: bool,
    pub smart_sharding: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuperclaudeSettings {
    pub enabled: bool,
    pub personas: PersonaMode,
    pub parallel_execution: bool,
    pub mcp_integration: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PersonaMode {
    ContextAware,
    Fixed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloshoSettings {
    pub enabled: bool,
    pub auto_test: bool,
    pub visual_testing: bool,
    pub auto_documentation: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameworkSettings {
    pub bmad: BmadSettings,
    pub xtext: XtextSettings,
    pub superclaude: SuperclaudeSettings,
    /// FloSho ships inside the xText tree but is configured as its own layer.
    pub flosho: FloshoSettings,
}

// ---------------------------------------------------------------------------
// Orchestration policy
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrchestrationMode {
    Intelligent,
    Passive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutingMode {
    Automatic,
    Manual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContextPreservation {
    Maximum,
    Balanced,
    Minimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictResolution {
    Smart,
    Manual,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrchestrationPolicy {
    pub mode: OrchestrationMode,
    pub routing: RoutingMode,
    pub context_preservation: ContextPreservation,
    pub conflict_resolution: ConflictResolution,
    pub performance_optimization: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowDefaults {
    pub workflow: String,
    pub planning_first: bool,
    pub test_driven: bool,
    pub documentation: DocumentationMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentationMode {
    Automatic,
    Manual,
}

// ---------------------------------------------------------------------------
// UnifiedConfig
// ---------------------------------------------------------------------------

/// The single synthesized configuration record. Built fresh from defaults on
/// every run and written wholesale — never merged with a prior run's file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnifiedConfig {
    pub name: String,
    pub version: String,
    pub installed_at: DateTime<Utc>,
    pub frameworks: FrameworkSettings,
    pub orchestration: OrchestrationPolicy,
    pub defaults: WorkflowDefaults,
}

impl UnifiedConfig {
    pub fn new() -> Self {
        Self {
            name: "SupaBMADFloSho".to_string(),
            version: SUPA_VERSION.to_string(),
            installed_at: Utc::now(),
            frameworks: FrameworkSettings {
                bmad: BmadSettings {
                    enabled: true,
                    agents: ["analyst", "pm", "architect", "po", "qa", "sm", "dev"]
                        .iter()
                        .map(|a| a.to_string())
                        .collect(),
                    planning_mode: PlanningMode::Collaborative,
                },
                xtext: XtextSettings {
                    enabled: true,
                    auto_prp: true,
                    context_engineering: true,
                    smart_sharding: true,
                },
                superclaude: SuperclaudeSettings {
                    enabled: true,
                    personas: PersonaMode::ContextAware,
                    parallel_execution: true,
                    mcp_integration: true,
                },
                flosho: FloshoSettings {
                    enabled: true,
                    auto_test: true,
                    visual_testing: true,
                    auto_documentation: true,
                },
            },
            orchestration: OrchestrationPolicy {
                mode: OrchestrationMode::Intelligent,
                routing: RoutingMode::Automatic,
                context_preservation: ContextPreservation::Maximum,
                conflict_resolution: ConflictResolution::Smart,
                performance_optimization: true,
            },
            defaults: WorkflowDefaults {
                workflow: "unified".to_string(),
                planning_first: true,
                test_driven: true,
                documentation: DocumentationMode::Automatic,
            },
        }
    }

    /// Whether a source framework is marked enabled.
    pub fn framework_enabled(&self, framework: Framework) -> bool {
        match framework {
            Framework::Bmad => self.frameworks.bmad.enabled,
            Framework::Xtext => self.frameworks.xtext.enabled,
            Framework::Superclaude => self.frameworks.superclaude.enabled,
        }
    }
}

impl Default for UnifiedConfig {
    fn default() -> Self {
        Self::new()
    }
}
