use serde::Serialize;

use crate::classify::{Classification, Intent};
use crate::context::Context;

pub mod considerations;
pub mod steps;

/// Everything the composer needs beyond the raw prompt and context. List
/// order is significant and preserved exactly as produced.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedLists {
    pub assumptions: Vec<String>,
    pub deliverables: Vec<String>,
    pub acceptance: Vec<String>,
    pub steps: Vec<String>,
    pub considerations: Vec<String>,
}

/// Opinionated defaults that prevent one-sentence sites and broken builds.
fn assumptions(c: &Classification) -> Vec<String> {
    let mut out = Vec::new();
    if c.is_web {
        out.push("Use Next.js App Router + TypeScript + TailwindCSS.".to_string());
        out.push("Use shadcn/ui for base components and Framer Motion for animations.".to_string());
        out.push(
            "Deliver a multi-page marketing site + auth + dashboard (no single-page placeholder builds)."
                .to_string(),
        );
        out.push(
            "If auth/DB keys are missing, app must still run with a safe local/dev fallback (no white screen)."
                .to_string(),
        );
    }
    if c.is_backend {
        out.push("Implement robust error handling, input validation, and structured logging.".to_string());
        out.push(
            "No mock endpoints that pretend to work - use real code paths with graceful fallbacks when secrets are absent."
                .to_string(),
        );
    }
    if out.is_empty() {
        out.push(
            "Proceed with best-practice defaults and make reasonable assumptions without asking follow-up questions."
                .to_string(),
        );
    }
    out
}

fn deliverables(c: &Classification) -> Vec<String> {
    let mut out = Vec::new();
    if c.is_web {
        out.push("A clear file tree (what files are created/modified).".to_string());
        out.push("Copy-pasteable code for each file you change (or a unified patch).".to_string());
        out.push(
            "A production-safe env strategy: required vs optional env vars, with runtime guards.".to_string(),
        );
        out.push("A \"Run locally\" section: exact commands.".to_string());
    }
    if c.is_ui {
        out.push(
            "UI structure with sections, components, and motion interactions (scroll/hover/entrance)."
                .to_string(),
        );
        out.push("No low-content pages: each page must include meaningful copy + sections.".to_string());
    }
    if c.is_backend {
        out.push("API endpoints, request/response shapes, and validation.".to_string());
        out.push("Persistence layer schema/migrations if applicable.".to_string());
    }
    if out.is_empty() {
        out.push(
            "Concrete steps + the actual artifacts needed to ship (code, config, tests if relevant)."
                .to_string(),
        );
    }
    out
}

fn acceptance(c: &Classification) -> Vec<String> {
    let mut out = vec![
        "Must run without crashing even when optional third-party API keys are missing (show a clear in-app setup banner instead)."
            .to_string(),
        "No placeholder copy like \"Lorem ipsum\" or \"TODO\".".to_string(),
        "No stubs that fake success; if a feature is unavailable due to missing creds, it must degrade gracefully."
            .to_string(),
    ];
    if c.is_web {
        out.push(
            "Site has at least: Home, Features/Product, Pricing, Auth (login/signup), Dashboard pages."
                .to_string(),
        );
        out.push(
            "Animations are tasteful, fast, and do not block usability; motion reduced when prefers-reduced-motion is enabled."
                .to_string(),
        );
    }
    out
}

/// Drives the step/consideration generators and the flag-derived list
/// assembly for one request.
pub fn lists(intent: &Intent, classification: &Classification, ctx: &Context) -> GeneratedLists {
    GeneratedLists {
        assumptions: assumptions(classification),
        deliverables: deliverables(classification),
        acceptance: acceptance(classification),
        steps: steps::steps_for(intent),
        considerations: considerations::considerations_for(intent, ctx),
    }
}
