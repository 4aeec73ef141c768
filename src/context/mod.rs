use serde::{Deserialize, Serialize};
use std::fmt;

/// Closed set of project types the classifier understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    General,
    React,
    Nodejs,
    Python,
    Mobile,
    Web,
    Ai,
}

impl ProjectType {
    /// Maps a raw keyword to a project type. Unknown values map to `None`,
    /// which the normalizer turns into `General` rather than an error.
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "general" => Some(Self::General),
            "react" => Some(Self::React),
            "nodejs" => Some(Self::Nodejs),
            "python" => Some(Self::Python),
            "mobile" => Some(Self::Mobile),
            "web" => Some(Self::Web),
            "ai" => Some(Self::Ai),
            _ => None,
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::General => "general",
            Self::React => "react",
            Self::Nodejs => "nodejs",
            Self::Python => "python",
            Self::Mobile => "mobile",
            Self::Web => "web",
            Self::Ai => "ai",
        };
        f.write_str(s)
    }
}

/// `None` means "unspecified" and must never surface in generated prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Framework {
    None,
    Nextjs,
    Vite,
    Express,
    Django,
    Fastapi,
    ReactNative,
}

impl Framework {
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "none" => Some(Self::None),
            "nextjs" => Some(Self::Nextjs),
            "vite" => Some(Self::Vite),
            "express" => Some(Self::Express),
            "django" => Some(Self::Django),
            "fastapi" => Some(Self::Fastapi),
            "react-native" => Some(Self::ReactNative),
            _ => None,
        }
    }

    pub fn is_specified(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for Framework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::None => "none",
            Self::Nextjs => "nextjs",
            Self::Vite => "vite",
            Self::Express => "express",
            Self::Django => "django",
            Self::Fastapi => "fastapi",
            Self::ReactNative => "react-native",
        };
        f.write_str(s)
    }
}

/// Enhancement depth. Controls how many execution-plan steps surface and
/// which closing notes the composer appends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Quick,
    Smart,
    Comprehensive,
}

impl Level {
    /// Unrecognized or missing values default to `Smart`.
    pub fn from_keyword(s: Option<&str>) -> Self {
        match s.map(|v| v.trim().to_lowercase()) {
            Some(v) if v == "quick" => Self::Quick,
            Some(v) if v == "comprehensive" => Self::Comprehensive,
            _ => Self::Smart,
        }
    }

    /// Maximum number of execution-plan steps surfaced at this depth.
    pub fn max_steps(&self) -> usize {
        match self {
            Self::Quick => 5,
            Self::Smart => 8,
            Self::Comprehensive => 12,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Quick => "quick",
            Self::Smart => "smart",
            Self::Comprehensive => "comprehensive",
        };
        f.write_str(s)
    }
}

/// Contextual hints as they arrive from the outside: any field may be
/// missing or hold an unrecognized value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawContext {
    #[serde(default)]
    pub project_type: Option<String>,
    #[serde(default)]
    pub framework: Option<String>,
    #[serde(default)]
    pub team_conventions: Option<String>,
}

/// Fully-populated context. No field is absent after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    pub project_type: ProjectType,
    pub framework: Framework,
    pub team_conventions: String,
}

impl Default for Context {
    fn default() -> Self {
        Self {
            project_type: ProjectType::General,
            framework: Framework::None,
            team_conventions: String::new(),
        }
    }
}

impl Context {
    /// Applies defaults to a possibly-partial context. Never fails; malformed
    /// fields degrade to their defaults.
    pub fn normalize(raw: &RawContext) -> Self {
        Self {
            project_type: raw
                .project_type
                .as_deref()
                .and_then(ProjectType::from_keyword)
                .unwrap_or(ProjectType::General),
            framework: raw
                .framework
                .as_deref()
                .and_then(Framework::from_keyword)
                .unwrap_or(Framework::None),
            team_conventions: raw
                .team_conventions
                .as_deref()
                .map(|s| s.trim().to_string())
                .unwrap_or_default(),
        }
    }
}
