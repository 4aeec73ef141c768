use fs_err as fs;
use serde::Serialize;
use serde_json::to_string_pretty;
use std::io::Write;
use std::path::{Path, PathBuf};
use uuid::Uuid;

use crate::config::Config;
use crate::context::{Level, RawContext};
use crate::enhance::Enhancement;

pub struct SavedPaths {
    pub dir: PathBuf,
    pub request: Option<PathBuf>,
    pub response: Option<PathBuf>,
}

#[derive(Serialize)]
struct RequestArtifact<'a> {
    prompt: &'a str,
    context: &'a RawContext,
    level: Level,
}

fn tx_dir(root: &Path, out_dir: &str, tx: Uuid) -> PathBuf {
    root.join(out_dir).join("tx").join(tx.to_string())
}

/// Persists the request and/or the full enhancement (classification and
/// generated lists included) as pretty JSON under the transaction directory.
pub fn save_enhancement(
    prompt: &str,
    raw_ctx: &RawContext,
    level: Level,
    result: &Enhancement,
    tx: Uuid,
    cfg: &Config,
) -> anyhow::Result<SavedPaths> {
    let dir = tx_dir(Path::new(&cfg.root), &cfg.out_dir, tx);
    fs::create_dir_all(&dir)?;

    let mut request_path = None;
    let mut response_path = None;

    if cfg.save_request {
        let p = dir.join("enhance.request.json");
        let artifact = RequestArtifact { prompt, context: raw_ctx, level };
        fs::write(&p, to_string_pretty(&artifact)?)?;
        request_path = Some(p);
    }

    if cfg.save_response {
        let p = dir.join("enhance.response.json");
        fs::write(&p, to_string_pretty(result)?)?;
        response_path = Some(p);
    }

    Ok(SavedPaths { dir, request: request_path, response: response_path })
}

pub fn print_saved_paths(saved: &SavedPaths) {
    println!("debug: artifacts directory: {}", saved.dir.display());
    if let Some(p) = &saved.request {
        println!("debug: request saved at: {}", p.display());
    }
    if let Some(p) = &saved.response {
        println!("debug: response saved at: {}", p.display());
    }
    std::io::stdout().flush().ok();
}
