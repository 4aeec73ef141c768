use crate::classify::{Intent, Subtopic};
use crate::context::{Context, ProjectType};

/// General resilience considerations that lead every abstract list.
const ABSTRACT_GENERAL: &[&str] = &[
    "Design for resilience - expect failures and plan recovery strategies",
    "Prioritize user experience during error states and transitions",
    "Implement comprehensive monitoring and observability",
    "Follow defensive programming principles",
    "Consider the blast radius of failures and implement isolation",
];

/// Closing considerations appended after the topic blocks.
const ABSTRACT_CLOSING: &[&str] = &[
    "Document all assumptions and failure scenarios",
    "Test resilience with chaos engineering practices",
    "Measure and optimize for mean time to recovery (MTTR)",
];

fn subtopic_considerations(topic: Subtopic) -> &'static [&'static str] {
    match topic {
        Subtopic::Visualizer => &[
            "Ensure graceful degradation when data sources fail",
            "Implement progressive loading for large datasets",
            "Design fallback visualizations for edge cases",
            "Consider performance impact of real-time updates",
        ],
        Subtopic::SelfHealing => &[
            "Implement exponential backoff for retry mechanisms",
            "Design idempotent operations to handle duplicate executions",
            "Use circuit breakers to prevent cascade failures",
            "Monitor system health metrics proactively",
        ],
        Subtopic::SmoothDegradation => &[
            "Design user-centric error messages and recovery flows",
            "Implement loading states that provide feedback",
            "Consider accessibility in error scenarios",
            "Maintain functionality even with partial failures",
        ],
        Subtopic::FailSafe => &[
            "Implement the principle of least surprise in failure modes",
            "Design for graceful degradation, not catastrophic failure",
            "Add comprehensive input validation and sanitization",
            "Create emergency procedures and runbooks",
        ],
    }
}

fn project_considerations(project_type: ProjectType) -> &'static [&'static str] {
    match project_type {
        ProjectType::React => &[
            "Maintain component reusability and separation of concerns",
            "Follow React hooks best practices and rules",
            "Consider performance implications and optimization opportunities",
        ],
        ProjectType::Nodejs => &[
            "Ensure proper error handling and async/await patterns",
            "Follow RESTful API design principles if applicable",
            "Consider security implications and input validation",
        ],
        ProjectType::Python => &[
            "Follow PEP 8 style guidelines and Python best practices",
            "Consider type hints for better code clarity",
            "Ensure proper exception handling and logging",
        ],
        _ => &[
            "Maintain code quality and readability",
            "Follow established patterns and conventions",
            "Consider maintainability and future extensibility",
        ],
    }
}

/// Produces the ordered consideration list for an intent and context.
///
/// Abstract: general block, then one block per matched sub-topic in rule
/// order, then the closing block. Concrete: one project-type set, plus a
/// framework line when a framework is declared.
pub fn considerations_for(intent: &Intent, ctx: &Context) -> Vec<String> {
    match intent {
        Intent::Abstract(topics) => {
            let mut out: Vec<String> = ABSTRACT_GENERAL.iter().map(|s| s.to_string()).collect();
            for topic in topics {
                out.extend(subtopic_considerations(*topic).iter().map(|s| s.to_string()));
            }
            out.extend(ABSTRACT_CLOSING.iter().map(|s| s.to_string()));
            out
        }
        _ => {
            let mut out: Vec<String> = project_considerations(ctx.project_type)
                .iter()
                .map(|s| s.to_string())
                .collect();
            if ctx.framework.is_specified() {
                out.push(format!(
                    "Leverage {} specific features and conventions",
                    ctx.framework
                ));
            }
            out
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Framework;

    fn ctx(project_type: ProjectType, framework: Framework) -> Context {
        Context {
            project_type,
            framework,
            team_conventions: String::new(),
        }
    }

    #[test]
    fn concrete_lists_key_off_project_type() {
        let react = considerations_for(&Intent::General, &ctx(ProjectType::React, Framework::None));
        assert!(react[0].contains("component reusability"));

        let python = considerations_for(&Intent::General, &ctx(ProjectType::Python, Framework::None));
        assert!(python[0].contains("PEP 8"));

        let other = considerations_for(&Intent::General, &ctx(ProjectType::Ai, Framework::None));
        assert!(other[0].contains("code quality"));
    }

    #[test]
    fn framework_line_appended_only_when_specified() {
        let with = considerations_for(&Intent::Feature, &ctx(ProjectType::React, Framework::Nextjs));
        assert_eq!(with.last().unwrap(), "Leverage nextjs specific features and conventions");

        let without = considerations_for(&Intent::Feature, &ctx(ProjectType::React, Framework::None));
        assert!(!without.iter().any(|c| c.contains("Leverage")));
    }

    #[test]
    fn abstract_list_has_general_topic_and_closing_blocks_in_order() {
        let list = considerations_for(
            &Intent::Abstract(vec![Subtopic::SelfHealing]),
            &ctx(ProjectType::Web, Framework::None),
        );
        assert_eq!(list.len(), 5 + 4 + 3);
        assert_eq!(list[0], ABSTRACT_GENERAL[0]);
        assert!(list[5].contains("exponential backoff"));
        assert_eq!(list.last().map(String::as_str), ABSTRACT_CLOSING.last().copied());
    }
}
