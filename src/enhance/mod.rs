use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::Serialize;

use crate::classify::{self, Classification};
use crate::context::{Context, Level, RawContext};
use crate::errors::EnhanceError;
use crate::generate::{self, GeneratedLists};
use crate::prompt;

/// Cooperative cancellation handle. The pipeline is synchronous, so
/// cancellation is only observed at the orchestrator boundary: a token
/// cancelled mid-flight discards the result, it does not interrupt work.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// One enhancement result with the intermediate stages kept for artifact
/// logging and debug output. The composed text is built atomically; callers
/// never observe a partial block.
#[derive(Debug, Clone, Serialize)]
pub struct Enhancement {
    pub text: String,
    pub context: Context,
    pub level: Level,
    pub classification: Classification,
    pub lists: GeneratedLists,
}

/// Runs the full local pipeline: normalize, classify, generate, compose.
///
/// Fails with `EmptyInput` when the prompt trims to empty; malformed context
/// degrades via defaulting and never fails.
pub fn enhance_with_details(
    raw_prompt: &str,
    raw_ctx: &RawContext,
    level: Level,
    cancel: &CancelToken,
) -> Result<Enhancement, EnhanceError> {
    let trimmed = raw_prompt.trim();
    if trimmed.is_empty() {
        return Err(EnhanceError::EmptyInput);
    }
    if cancel.is_cancelled() {
        return Err(EnhanceError::Cancelled);
    }

    let context = Context::normalize(raw_ctx);
    let classification = classify::classify(trimmed, context.project_type);
    let intent = classify::intent(trimmed, &classification);
    let lists = generate::lists(&intent, &classification, &context);
    let text = prompt::compose(trimmed, &context, level, &lists);

    // A cancellation that lands after composition still discards the result.
    if cancel.is_cancelled() {
        return Err(EnhanceError::Cancelled);
    }

    Ok(Enhancement {
        text,
        context,
        level,
        classification,
        lists,
    })
}

/// Façade returning only the composed text.
pub fn enhance(raw_prompt: &str, raw_ctx: &RawContext, level: Level) -> Result<String, EnhanceError> {
    enhance_with_details(raw_prompt, raw_ctx, level, &CancelToken::new()).map(|e| e.text)
}
