use chrono::{DateTime, Utc};
use colored::Colorize;
use std::io::{self, Write};

use crate::history::HistoryEntry;

pub fn print_enhanced(text: &str) {
    println!("\n{}", "=== ENHANCED PROMPT ===".bold());
    println!("{text}");
    println!();
}

pub fn print_history(entries: &[HistoryEntry]) {
    if entries.is_empty() {
        println!("No enhancement history yet.");
        return;
    }
    println!("\n{}", "=== HISTORY ===".bold());
    for (i, e) in entries.iter().enumerate() {
        let preview: String = e.original.chars().take(80).collect();
        let ellipsis = if e.original.chars().count() > 80 { "..." } else { "" };
        println!(
            "{} {}  {}",
            format!("#{}", entries.len() - i).dimmed(),
            relative_time(e.timestamp, Utc::now()).dimmed(),
            format!("{preview}{ellipsis}").bold()
        );
        println!("   context: {} | {}", e.context.project_type, e.context.framework);
    }
    println!();
}

pub fn notify(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

pub fn notify_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

pub fn confirm(prompt: &str) -> bool {
    print!("{} [y/N]: ", prompt);
    let _ = io::stdout().flush();
    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        let ans = s.trim().to_lowercase();
        ans == "y" || ans == "yes"
    } else {
        false
    }
}

fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let diff = now.signed_duration_since(then);
    if diff.num_seconds() < 60 {
        "just now".to_string()
    } else if diff.num_minutes() < 60 {
        format!("{}m ago", diff.num_minutes())
    } else if diff.num_hours() < 24 {
        format!("{}h ago", diff.num_hours())
    } else {
        then.format("%Y-%m-%d").to_string()
    }
}
