use serde::Serialize;

use crate::context::ProjectType;

/// Resilience vocabulary that routes a prompt onto the abstract path.
/// Keep this list tight: broadening it makes ordinary requests derail into
/// the resilience template.
const ABSTRACT_TERMS: &[&str] = &[
    "self-healing",
    "regenerative",
    "fault tolerant",
    "graceful degradation",
    "gracefully",
    "fail safe",
    "circuit breaker",
    "resilience",
    "mttr",
];

/// Web-stack signal terms (framework/tooling names).
const WEB_TERMS: &[&str] = &["nextjs", "next.js", "tailwind", "framer", "clerk", "supabase", "vercel"];

/// Backend/infra signal terms.
const BACKEND_TERMS: &[&str] = &["api", "backend", "server", "db", "schema", "supabase", "postgres", "redis"];

/// UI/UX signal terms.
const UI_TERMS: &[&str] = &["ui", "ux", "landing", "dashboard", "page", "component", "layout", "animation", "motion"];

fn contains_any(haystack: &str, terms: &[&str]) -> bool {
    terms.iter().any(|t| haystack.contains(t))
}

/// Coarse flags derived purely from the prompt text and the project type.
/// The three stack flags are independent: a prompt may be web, backend and
/// UI at the same time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub is_abstract: bool,
    pub is_web: bool,
    pub is_backend: bool,
    pub is_ui: bool,
}

/// Classifies a prompt. `prompt` is expected raw; case-folding happens here
/// so every downstream keyword check sees the same text.
pub fn classify(prompt: &str, project_type: ProjectType) -> Classification {
    let folded = prompt.to_lowercase();
    Classification {
        is_abstract: contains_any(&folded, ABSTRACT_TERMS),
        is_web: matches!(project_type, ProjectType::React | ProjectType::Web | ProjectType::Nodejs)
            || contains_any(&folded, WEB_TERMS),
        is_backend: matches!(project_type, ProjectType::Nodejs | ProjectType::Python)
            || contains_any(&folded, BACKEND_TERMS),
        is_ui: matches!(project_type, ProjectType::React | ProjectType::Web | ProjectType::Mobile)
            || contains_any(&folded, UI_TERMS),
    }
}

/// Sub-topics of an abstract (resilience-oriented) prompt. Detection is
/// independent per topic; matching blocks are additive in this fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Subtopic {
    Visualizer,
    SelfHealing,
    SmoothDegradation,
    FailSafe,
}

impl Subtopic {
    const RULES: &'static [(Subtopic, &'static [&'static str])] = &[
        (Subtopic::Visualizer, &["visualizer"]),
        (Subtopic::SelfHealing, &["self-healing", "regenerative"]),
        (Subtopic::SmoothDegradation, &["smooth", "gracefully"]),
        (Subtopic::FailSafe, &["failing", "fail safe"]),
    ];

    /// All sub-topics triggered by the case-folded prompt, in rule order.
    pub fn detect(folded_prompt: &str) -> Vec<Subtopic> {
        Self::RULES
            .iter()
            .filter(|(_, terms)| contains_any(folded_prompt, terms))
            .map(|(topic, _)| *topic)
            .collect()
    }
}

/// The request's intent as an explicit tagged variant. Concrete families are
/// checked in priority order; the first match wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Abstract(Vec<Subtopic>),
    BugFix,
    Test,
    Feature,
    General,
}

pub fn intent(prompt: &str, classification: &Classification) -> Intent {
    let folded = prompt.to_lowercase();
    if classification.is_abstract {
        return Intent::Abstract(Subtopic::detect(&folded));
    }
    // Priority order: bug/fix, test, feature/add, fallback.
    if contains_any(&folded, &["bug", "fix"]) {
        Intent::BugFix
    } else if folded.contains("test") {
        Intent::Test
    } else if contains_any(&folded, &["feature", "add"]) {
        Intent::Feature
    } else {
        Intent::General
    }
}
