use async_trait::async_trait;

use crate::errors::EnhanceError;

pub mod deepseek;

/// Hard rejection boundary for the user prompt. Prompts beyond this length
/// are refused before dispatch, not truncated.
pub const MAX_PROMPT_CHARS: usize = 12_000;

/// Transport collaborator for the remote-LLM enhancement path. Enforces a
/// bounded timeout and surfaces the failure taxonomy from `EnhanceError`.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Sends one system instruction + user prompt and returns the upstream
    /// text, or a classified failure.
    async fn send(&self, system_instruction: &str, user_prompt: &str) -> Result<String, EnhanceError>;
}

pub type DynProvider = Box<dyn Provider + Send + Sync>;

/// Validates size limits before any network dispatch.
pub fn check_prompt_len(user_prompt: &str) -> Result<(), EnhanceError> {
    if user_prompt.chars().count() > MAX_PROMPT_CHARS {
        return Err(EnhanceError::PromptTooLong { limit: MAX_PROMPT_CHARS });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_at_the_cap_is_accepted() {
        let prompt = "x".repeat(MAX_PROMPT_CHARS);
        assert!(check_prompt_len(&prompt).is_ok());
    }

    #[test]
    fn oversized_prompt_is_a_hard_rejection() {
        let prompt = "x".repeat(MAX_PROMPT_CHARS + 1);
        assert!(matches!(
            check_prompt_len(&prompt),
            Err(EnhanceError::PromptTooLong { limit: MAX_PROMPT_CHARS })
        ));
    }
}
