use clap::Parser;
use std::path::Path;
use uuid::Uuid;

use prompt_enhancer::cli::{self, ModeKind};
use prompt_enhancer::context::{Context, RawContext};
use prompt_enhancer::errors::EnhanceError;
use prompt_enhancer::history::{self, HistoryStore};
use prompt_enhancer::provider::{self, Provider};
use prompt_enhancer::{config, enhance, log, prompt, ux};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = cli::Args::parse();

    let cfg = config::Config {
        root: args.root.clone(),
        mode: args.mode,
        model: args.model.clone(),
        api_base: args.api_base.clone(),
        timeout_secs: args.timeout_secs,
        save_request: args.save_request,
        save_response: args.save_response,
        ..config::Config::default()
    };

    let history_path = Path::new(&cfg.root).join(&cfg.out_dir).join("history.json");
    let mut store = history::FileHistory::new(history_path);

    if args.history {
        ux::print_history(&store.load()?);
        return Ok(());
    }
    if args.clear_history {
        if args.yes || ux::confirm("Clear all enhancement history?") {
            store.clear()?;
            ux::notify("History cleared");
        } else {
            println!("Aborted.");
        }
        return Ok(());
    }

    let raw_prompt = args.prompt.clone().unwrap_or_default();
    let raw_ctx = RawContext {
        project_type: args.project_type.clone(),
        framework: args.framework.clone(),
        team_conventions: args.conventions.clone(),
    };
    let txid = Uuid::new_v4();

    match cfg.mode {
        ModeKind::Local => {
            let cancel = enhance::CancelToken::new();
            let result = enhance::enhance_with_details(&raw_prompt, &raw_ctx, args.level, &cancel)?;

            if args.debug {
                eprintln!(
                    "debug: classification: {}",
                    serde_json::to_string(&result.classification)?
                );
                eprintln!(
                    "debug: considerations: {}",
                    serde_json::to_string_pretty(&result.lists.considerations)?
                );
            }

            ux::print_enhanced(&result.text);
            store.append(raw_prompt.trim(), &result.text, &result.context)?;

            let saved = log::save_enhancement(raw_prompt.trim(), &raw_ctx, args.level, &result, txid, &cfg)?;
            if args.debug {
                log::print_saved_paths(&saved);
            }
        }
        ModeKind::Deepseek => {
            let trimmed = raw_prompt.trim();
            if trimmed.is_empty() {
                return Err(EnhanceError::EmptyInput.into());
            }

            let ctx = Context::normalize(&raw_ctx);
            let system = prompt::system_instruction(&ctx, args.level);
            let prov = provider::deepseek::DeepSeek::new(
                cfg.model.clone(),
                cfg.api_base.clone(),
                cfg.timeout_secs,
            );

            if args.debug {
                eprintln!("debug[deepseek]: system instruction:\n{system}");
            }

            // Ctrl-C aborts the in-flight request; an already-printed result
            // is unaffected.
            let enhanced = tokio::select! {
                res = prov.send(&system, trimmed) => res?,
                _ = tokio::signal::ctrl_c() => {
                    ux::notify_error("Enhancement cancelled");
                    return Err(EnhanceError::Cancelled.into());
                }
            };

            ux::print_enhanced(&enhanced);
            store.append(trimmed, &enhanced, &ctx)?;
        }
    }

    Ok(())
}
