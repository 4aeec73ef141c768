use serde::{Deserialize, Serialize};

use crate::cli::ModeKind;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub root: String,
    /// Directory (under root) for history and transaction artifacts.
    pub out_dir: String,
    pub mode: ModeKind,
    pub model: String,
    pub api_base: String,
    pub timeout_secs: u64,
    pub save_request: bool,
    pub save_response: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: ".".into(),
            out_dir: ".enhancer".into(),
            mode: ModeKind::Local,
            model: "deepseek-chat".into(),
            api_base: "https://api.deepseek.com".into(),
            timeout_secs: 120,
            save_request: false,
            save_response: false,
        }
    }
}
