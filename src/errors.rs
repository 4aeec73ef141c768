use thiserror::Error;

/// Failure taxonomy for the enhancement pipeline and its transport collaborator.
///
/// The local pipeline can only fail with `EmptyInput` (or `Cancelled` at the
/// orchestrator boundary); every other variant originates in the remote
/// provider and is relayed unchanged to the caller.
#[derive(Error, Debug)]
pub enum EnhanceError {
    #[error("prompt is required")]
    EmptyInput,
    #[error("prompt exceeds the {limit}-character limit")]
    PromptTooLong { limit: usize },
    #[error("missing {0} in server environment")]
    MissingCredential(&'static str),
    #[error("upstream rejected the request ({status}): {message}")]
    UpstreamRejected { status: u16, message: String },
    #[error("upstream returned an empty response")]
    EmptyUpstreamResponse,
    #[error("request timed out after {0}s")]
    Timeout(u64),
    #[error("request cancelled")]
    Cancelled,
    #[error("transport failure: {0}")]
    TransportFailure(String),
}
