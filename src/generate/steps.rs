use crate::classify::{Intent, Subtopic};

const BUGFIX_STEPS: &[&str] = &[
    "Identify the root cause of the issue",
    "Review relevant code files and dependencies",
    "Implement the fix following best practices",
    "Test the solution thoroughly",
    "Update documentation if needed",
];

const TEST_STEPS: &[&str] = &[
    "Analyze the existing test coverage",
    "Design comprehensive test cases",
    "Implement tests following the testing framework",
    "Ensure tests are isolated and repeatable",
    "Run tests and verify they pass",
];

const FEATURE_STEPS: &[&str] = &[
    "Review requirements and specifications",
    "Design the implementation approach",
    "Implement the feature incrementally",
    "Add appropriate tests",
    "Update documentation",
];

const GENERAL_STEPS: &[&str] = &[
    "Analyze the current implementation",
    "Identify areas for improvement",
    "Implement the necessary changes",
    "Test and validate the solution",
];

/// Closing steps appended to every abstract plan, after the topic blocks.
const ABSTRACT_CLOSING_STEPS: &[&str] = &[
    "Create chaos engineering tests to validate resilience",
    "Implement continuous monitoring for system health metrics",
    "Document all failure scenarios and recovery procedures",
];

fn subtopic_steps(topic: Subtopic) -> &'static [&'static str] {
    match topic {
        Subtopic::Visualizer => &[
            "Conduct comprehensive analysis of the current visualizer implementation",
            "Identify all failure points and edge cases in the visualization pipeline",
            "Design a resilient architecture with error boundaries and fallback states",
            "Implement self-healing mechanisms with automatic error recovery",
            "Add graceful degradation for unsupported scenarios",
            "Create comprehensive testing for failure scenarios and recovery",
            "Implement monitoring and alerting for system health",
        ],
        Subtopic::SelfHealing => &[
            "Design autonomous error detection and correction systems",
            "Implement circuit breaker patterns to prevent cascade failures",
            "Create automated recovery procedures with rollback capabilities",
            "Add health checks and self-diagnostic mechanisms",
            "Build redundancy and failover strategies",
        ],
        Subtopic::SmoothDegradation => &[
            "Analyze user experience during error states and transitions",
            "Design smooth degradation paths that maintain core functionality",
            "Implement progressive enhancement strategies",
            "Add loading states and skeleton screens for better UX",
            "Create user-friendly error messages and recovery options",
        ],
        Subtopic::FailSafe => &[
            "Implement comprehensive error handling at every layer",
            "Design fail-safe mechanisms with default fallback behaviors",
            "Add input validation and sanitization throughout the system",
            "Create emergency shutdown and recovery procedures",
            "Build monitoring systems to detect failures before they impact users",
        ],
    }
}

/// Produces the full, untruncated execution-step list for an intent.
/// Depth-dependent truncation is the composer's job, not ours.
pub fn steps_for(intent: &Intent) -> Vec<String> {
    let template: Vec<&str> = match intent {
        Intent::Abstract(topics) => {
            let mut out: Vec<&str> = Vec::new();
            for topic in topics {
                out.extend_from_slice(subtopic_steps(*topic));
            }
            out.extend_from_slice(ABSTRACT_CLOSING_STEPS);
            out
        }
        Intent::BugFix => BUGFIX_STEPS.to_vec(),
        Intent::Test => TEST_STEPS.to_vec(),
        Intent::Feature => FEATURE_STEPS.to_vec(),
        Intent::General => GENERAL_STEPS.to_vec(),
    };
    template.into_iter().map(String::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concrete_families_have_fixed_templates() {
        assert_eq!(steps_for(&Intent::BugFix).len(), 5);
        assert_eq!(steps_for(&Intent::Test).len(), 5);
        assert_eq!(steps_for(&Intent::Feature).len(), 5);
        assert_eq!(steps_for(&Intent::General).len(), 4);
    }

    #[test]
    fn abstract_blocks_are_additive() {
        let one = steps_for(&Intent::Abstract(vec![Subtopic::Visualizer]));
        let two = steps_for(&Intent::Abstract(vec![Subtopic::Visualizer, Subtopic::SelfHealing]));
        assert_eq!(one.len(), 7 + 3);
        assert_eq!(two.len(), 7 + 5 + 3);
        // Topic order is preserved: the visualizer block comes first in both.
        assert_eq!(one[0], two[0]);
    }

    #[test]
    fn abstract_plans_end_with_the_three_closing_steps() {
        let steps = steps_for(&Intent::Abstract(vec![Subtopic::FailSafe]));
        let tail: Vec<&str> = steps.iter().rev().take(3).rev().map(String::as_str).collect();
        assert_eq!(tail, ABSTRACT_CLOSING_STEPS);
    }

    #[test]
    fn abstract_with_no_subtopics_still_closes() {
        let steps = steps_for(&Intent::Abstract(vec![]));
        assert_eq!(steps.len(), 3);
    }
}
