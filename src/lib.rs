//! Deterministic prompt-enhancement engine.
//!
//! Given a raw free-text request plus contextual hints (project type,
//! framework, team conventions, depth), the pipeline classifies the request
//! and composes a structured, execution-ready instruction block for a
//! downstream coding agent. The core pipeline is synchronous, pure, and
//! byte-deterministic; the DeepSeek transport and the history store are
//! separate collaborators behind narrow interfaces.

pub mod classify;
pub mod cli;
pub mod config;
pub mod context;
pub mod enhance;
pub mod errors;
pub mod generate;
pub mod history;
pub mod log;
pub mod prompt;
pub mod provider;
pub mod ux;

pub use enhance::enhance;
pub use errors::EnhanceError;
