use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::context::Level;

/// Which path answers a request: the deterministic local pipeline or the
/// remote DeepSeek-backed rewrite.
#[derive(ValueEnum, Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeKind {
    Local,
    Deepseek,
}

#[derive(Parser, Debug)]
#[command(name = "prompt_enhancer", version, about = "Turn a vague request into an execution-ready prompt for a coding agent")]
pub struct Args {
    /// Raw prompt to enhance.
    #[arg(long)]
    pub prompt: Option<String>,

    #[arg(long, default_value = ".")]
    pub root: String,

    #[arg(long, value_enum, default_value_t = ModeKind::Local)]
    pub mode: ModeKind,

    /// Project type hint (react, nodejs, python, mobile, web, ai).
    /// Unrecognized values fall back to "general".
    #[arg(long)]
    pub project_type: Option<String>,

    /// Framework hint (nextjs, vite, express, django, fastapi, react-native).
    #[arg(long)]
    pub framework: Option<String>,

    /// Free-text team conventions to carry into the enhanced prompt.
    #[arg(long)]
    pub conventions: Option<String>,

    #[arg(long, value_enum, default_value_t = Level::Smart)]
    pub level: Level,

    /// Model used in deepseek mode.
    #[arg(long, default_value = "deepseek-chat")]
    pub model: String,

    #[arg(long, default_value = "https://api.deepseek.com")]
    pub api_base: String,

    #[arg(long, default_value_t = 120)]
    pub timeout_secs: u64,

    /// Print the stored enhancement history and exit.
    #[arg(long, default_value_t = false)]
    pub history: bool,

    /// Clear the stored history and exit.
    #[arg(long, default_value_t = false)]
    pub clear_history: bool,

    /// Skip the confirmation prompt for --clear-history.
    #[arg(long, default_value_t = false)]
    pub yes: bool,

    #[arg(long, default_value_t = false)]
    pub save_request: bool,

    #[arg(long, default_value_t = false)]
    pub save_response: bool,

    #[arg(long, default_value_t = false)]
    pub debug: bool,
}
