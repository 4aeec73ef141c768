use crate::context::{Context, Level};
use crate::generate::GeneratedLists;

/// Per-field cap applied to free-text context fields before they enter a
/// remote system instruction. Values beyond the cap are truncated, never
/// rejected.
pub const MAX_CONTEXT_FIELD_CHARS: usize = 1_000;

fn depth_extras(level: Level) -> &'static [&'static str] {
    match level {
        Level::Quick => {
            &["Keep it concise. Deliver the minimal working implementation that satisfies the acceptance criteria."]
        }
        Level::Smart => {
            &["Ship a clean, production-grade solution. Avoid overengineering but do not cut core quality."]
        }
        Level::Comprehensive => &[
            "Include hardening: edge cases, security notes, and basic observability (logging/metrics) where appropriate.",
            "Include a quick verification checklist.",
        ],
    }
}

fn context_line(ctx: &Context) -> String {
    if ctx.project_type == crate::context::ProjectType::General {
        "Context: general".to_string()
    } else if ctx.framework.is_specified() {
        format!("Context: {} ({})", ctx.project_type, ctx.framework)
    } else {
        format!("Context: {}", ctx.project_type)
    }
}

/// Assembles the final enhanced block from the normalized context, the depth
/// and the generated lists. Byte-identical output for identical inputs: no
/// randomness, no timestamps.
///
/// `raw_prompt` must already be trimmed; it is echoed verbatim.
pub fn compose(raw_prompt: &str, ctx: &Context, level: Level, lists: &GeneratedLists) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push("ROLE".into());
    parts.push("You are a senior full-stack engineer + product designer. You build shippable systems, not demos.".into());
    parts.push(String::new());

    parts.push("NON-NEGOTIABLE RULES".into());
    parts.push("1) Do NOT ask follow-up questions. Make best assumptions and proceed.".into());
    parts.push("2) Do NOT output placeholder code or placeholder copy.".into());
    parts.push("3) If an API key/secret is missing, the app must still run with graceful degradation and a clear setup banner.".into());
    parts.push("4) Output must be directly usable: provide file paths + code (or patch) + exact commands to run.".into());
    parts.push(String::new());

    parts.push(context_line(ctx));
    if !ctx.team_conventions.is_empty() {
        parts.push(format!("Team conventions to follow: {}", ctx.team_conventions));
    }
    parts.push(String::new());

    parts.push("USER INTENT (RAW)".into());
    parts.push(raw_prompt.to_string());
    parts.push(String::new());

    parts.push("ASSUMPTIONS (PROCEED UNDER THESE DEFAULTS)".into());
    for a in &lists.assumptions {
        parts.push(format!("- {a}"));
    }
    parts.push(String::new());

    parts.push("DELIVERABLES".into());
    for d in &lists.deliverables {
        parts.push(format!("- {d}"));
    }
    parts.push(String::new());

    parts.push("ACCEPTANCE CRITERIA".into());
    for a in &lists.acceptance {
        parts.push(format!("- {a}"));
    }
    parts.push(String::new());

    parts.push("EXECUTION PLAN".into());
    for (i, step) in lists.steps.iter().take(level.max_steps()).enumerate() {
        parts.push(format!("{}. {}", i + 1, step));
    }
    parts.push(String::new());

    parts.push("CONSIDERATIONS".into());
    for c in &lists.considerations {
        parts.push(format!("- {c}"));
    }
    parts.push(String::new());

    for extra in depth_extras(level) {
        parts.push(format!("NOTE: {extra}"));
    }
    parts.push(String::new());

    parts.push("OUTPUT FORMAT".into());
    parts.push("- Start with a short summary of what you are changing.".into());
    parts.push("- Then provide a file tree of changed/added files.".into());
    parts.push("- Then provide code grouped by file path.".into());
    parts.push("- End with exact run/deploy commands and a verification checklist.".into());

    parts.join("\n")
}

fn cap_field(s: &str) -> String {
    s.chars().take(MAX_CONTEXT_FIELD_CHARS).collect()
}

/// System instruction for the remote-LLM path. Unlike the local composer this
/// renders unspecified fields explicitly ("unspecified" / "none provided") so
/// the upstream model never has to guess.
pub fn system_instruction(ctx: &Context, level: Level) -> String {
    let framework = if ctx.framework.is_specified() {
        ctx.framework.to_string()
    } else {
        "unspecified".to_string()
    };
    let conventions = if ctx.team_conventions.is_empty() {
        "Team conventions: none provided.".to_string()
    } else {
        format!("Team conventions: {}.", cap_field(&ctx.team_conventions))
    };

    [
        "You are an expert prompt enhancement assistant.".to_string(),
        "Your job is to rewrite a user prompt into a clearer, more actionable prompt while preserving user intent.".to_string(),
        "Return only the final enhanced prompt text with no markdown fences and no extra commentary.".to_string(),
        format!("Enhancement level: {level}."),
        format!("Project type: {}.", ctx.project_type),
        format!("Framework: {framework}."),
        conventions,
        "Focus on structure, specificity, constraints, acceptance criteria, and expected output format when relevant.".to_string(),
    ]
    .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify;
    use crate::context::{Framework, ProjectType, RawContext};
    use crate::generate;

    fn build(prompt: &str, ctx: &Context, level: Level) -> String {
        let classification = classify::classify(prompt, ctx.project_type);
        let intent = classify::intent(prompt, &classification);
        let lists = generate::lists(&intent, &classification, ctx);
        compose(prompt, ctx, level, &lists)
    }

    fn numbered_steps(output: &str) -> Vec<&str> {
        output
            .lines()
            .skip_while(|l| *l != "EXECUTION PLAN")
            .skip(1)
            .take_while(|l| !l.is_empty())
            .collect()
    }

    #[test]
    fn composition_is_deterministic() {
        let ctx = Context::normalize(&RawContext {
            project_type: Some("react".into()),
            framework: Some("nextjs".into()),
            team_conventions: Some("use snake_case".into()),
        });
        let a = build("Add a settings page", &ctx, Level::Smart);
        let b = build("Add a settings page", &ctx, Level::Smart);
        assert_eq!(a, b);
    }

    #[test]
    fn raw_intent_is_echoed_verbatim() {
        let ctx = Context::default();
        let out = build("Fix the login bug", &ctx, Level::Smart);
        assert!(out.contains("Fix the login bug"));
    }

    #[test]
    fn framework_none_never_appears_in_the_context_line() {
        let ctx = Context::default();
        let out = build("Add a button", &ctx, Level::Quick);
        let line = out.lines().find(|l| l.starts_with("Context:")).unwrap();
        assert_eq!(line, "Context: general");
        assert!(!line.contains("none"));
    }

    #[test]
    fn context_line_shows_type_and_framework() {
        let ctx = Context {
            project_type: ProjectType::React,
            framework: Framework::Nextjs,
            team_conventions: String::new(),
        };
        let out = build("Add a button", &ctx, Level::Quick);
        assert!(out.contains("Context: react (nextjs)"));
    }

    #[test]
    fn conventions_line_present_only_when_supplied() {
        let with = Context {
            team_conventions: "use snake_case".into(),
            ..Context::default()
        };
        let out = build("Add a button", &with, Level::Smart);
        assert!(out.contains("Team conventions to follow: use snake_case"));

        let without = build("Add a button", &Context::default(), Level::Smart);
        assert!(!without.contains("Team conventions to follow:"));
    }

    #[test]
    fn depth_scales_the_execution_plan() {
        let ctx = Context {
            project_type: ProjectType::Web,
            ..Context::default()
        };
        let prompt = "We need a self-healing visualizer";
        // 7 (visualizer) + 5 (self-healing) + 3 (closing) = 15 raw steps.
        for (level, expected) in [(Level::Quick, 5), (Level::Smart, 8), (Level::Comprehensive, 12)] {
            let out = build(prompt, &ctx, level);
            assert_eq!(numbered_steps(&out).len(), expected, "{level}");
        }
    }

    #[test]
    fn short_plans_are_not_padded() {
        let out = build("Fix the login bug", &Context::default(), Level::Smart);
        let steps = numbered_steps(&out);
        assert_eq!(steps.len(), 5);
        assert!(steps[0].ends_with("Identify the root cause of the issue"));
    }

    #[test]
    fn depth_notes_match_the_level() {
        let ctx = Context::default();
        let quick = build("Add a button", &ctx, Level::Quick);
        assert!(quick.contains("NOTE: Keep it concise."));

        let smart = build("Add a button", &ctx, Level::Smart);
        assert!(smart.contains("NOTE: Ship a clean, production-grade solution."));

        let full = build("Add a button", &ctx, Level::Comprehensive);
        assert!(full.contains("NOTE: Include hardening"));
        assert!(full.contains("NOTE: Include a quick verification checklist."));
    }

    #[test]
    fn sections_appear_in_fixed_order() {
        let out = build("Add a button", &Context::default(), Level::Smart);
        let order = [
            "ROLE",
            "NON-NEGOTIABLE RULES",
            "Context:",
            "USER INTENT (RAW)",
            "ASSUMPTIONS (PROCEED UNDER THESE DEFAULTS)",
            "DELIVERABLES",
            "ACCEPTANCE CRITERIA",
            "EXECUTION PLAN",
            "CONSIDERATIONS",
            "OUTPUT FORMAT",
        ];
        let mut last = 0;
        for marker in order {
            let pos = out.find(marker).unwrap_or_else(|| panic!("missing {marker}"));
            assert!(pos >= last, "{marker} out of order");
            last = pos;
        }
    }

    #[test]
    fn system_instruction_renders_unspecified_fields_explicitly() {
        let ins = system_instruction(&Context::default(), Level::Smart);
        assert!(ins.contains("Framework: unspecified."));
        assert!(ins.contains("Team conventions: none provided."));
        assert!(ins.contains("Enhancement level: smart."));
    }

    #[test]
    fn system_instruction_caps_long_conventions() {
        let ctx = Context {
            team_conventions: "x".repeat(5_000),
            ..Context::default()
        };
        let ins = system_instruction(&ctx, Level::Quick);
        assert!(!ins.contains(&"x".repeat(MAX_CONTEXT_FIELD_CHARS + 1)));
        assert!(ins.contains(&"x".repeat(MAX_CONTEXT_FIELD_CHARS)));
    }
}
