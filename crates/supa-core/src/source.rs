use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three external source frameworks being merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Framework {
    Bmad,
    Xtext,
    Superclaude,
}

impl Framework {
    pub const ALL: [Framework; 3] = [Framework::Bmad, Framework::Xtext, Framework::Superclaude];

    pub fn id(&self) -> &'static str {
        match self {
            Framework::Bmad => "bmad",
            Framework::Xtext => "xtext",
            Framework::Superclaude => "superclaude",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Framework::Bmad => "BMAD-METHOD",
            Framework::Xtext => "xText-PRP",
            Framework::Superclaude => "SuperClaude",
        }
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Static description of where a framework comes from and where its
/// retrieved source tree is staged. Constructed once, never mutated.
#[derive(Debug, Clone, Copy)]
pub struct FrameworkDescriptor {
    pub framework: Framework,
    /// Remote retrieval location, shallow-cloned by the retrieval step.
    pub repo_url: &'static str,
    /// Workspace-relative staging path holding the retrieved tree.
    pub staging_path: &'static str,
}

/// The source descriptor table. Order here is the extraction order.
pub const SOURCES: [FrameworkDescriptor; 3] = [
    FrameworkDescriptor {
        framework: Framework::Bmad,
        repo_url: "https://github.com/bmadcode/BMAD-METHOD.git",
        staging_path: "temp/bmad-method",
    },
    FrameworkDescriptor {
        framework: Framework::Xtext,
        repo_url: "https://github.com/a2thalex/xtext-prp.git",
        staging_path: "temp/xtext-prp",
    },
    FrameworkDescriptor {
        framework: Framework::Superclaude,
        repo_url: "https://github.com/NomenAK/SuperClaude.git",
        staging_path: "temp/superclaude",
    },
];

pub fn descriptor(framework: Framework) -> &'static FrameworkDescriptor {
    SOURCES
        .iter()
        .find(|d| d.framework == framework)
        .expect("every framework has a descriptor")
}
