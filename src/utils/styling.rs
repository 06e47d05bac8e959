//! Terminal styling utilities

use console::{style, Emoji};
use std::path::Path;
use std::time::Duration;

// Emoji icons with fallbacks for terminals that don't support them
pub static INFO: Emoji<'_, '_> = Emoji("ℹ️  ", "[*] ");
pub static WARN: Emoji<'_, '_> = Emoji("⚠️  ", "[!] ");
pub static SHIP: Emoji<'_, '_> = Emoji("🚢 ", ">> ");
pub static FOLDER: Emoji<'_, '_> = Emoji("📂 ", "");
pub static SAVE: Emoji<'_, '_> = Emoji("💾 ", "");
pub static GAUGE: Emoji<'_, '_> = Emoji("📐 ", "");

/// Print the application banner
pub fn print_banner(version: &str) {
    let banner = r#"
    ╔═╗╦ ╦╦╔═╗  ╦ ╦╔╗╔╦╔═╗╦ ╦
    ╚═╗╠═╣║╠═╝  ║ ║║║║║╠╣ ╚╦╝
    ╚═╝╩ ╩╩╩    ╚═╝╝╚╝╩╚  ╩
    "#;

    println!();
    println!("{}", style(banner).cyan().bold());
    println!(
        "    {} {}",
        style("⚓").magenta().bold(),
        style("One clean fleet ledger from many messy years").dim()
    );
    println!("    {}", style(format!("v{}", version)).dim());
    println!("    {}", style("━".repeat(50)).dim());
    println!();
}

/// Print configuration card
pub fn print_config(sources: usize, output: &Path, min_training_rows: usize) {
    let box_width = 56;
    let line = "─".repeat(box_width - 2);

    println!("    ┌{}┐", line);
    println!(
        "    │ {}{}│",
        style("⚙️  Configuration").cyan().bold(),
        " ".repeat(box_width - 20)
    );
    println!("    ├{}┤", line);
    println!(
        "    │  {} Sources: {:<38}│",
        FOLDER,
        format!("{} file(s)", sources)
    );
    println!(
        "    │  {} Output:  {:<38}│",
        SAVE,
        truncate_path(output, 37)
    );
    println!(
        "    │  {} Min training rows: {:<28}│",
        GAUGE,
        style(min_training_rows).yellow()
    );
    println!("    └{}┘", line);
    println!();
}

/// Print a step header with styling
pub fn print_step_header(step_num: u8, title: &str) {
    println!();
    println!(
        "    {} {} {}",
        style(format!("STEP {}", step_num)).cyan().bold(),
        style("│").dim(),
        style(title).white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("    {} {}", style("✓").green().bold(), style(message).green());
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("    {} {}", INFO, message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("    {} {}", WARN, style(message).yellow());
}

/// Print a styled count message
pub fn print_count(description: &str, count: usize) {
    println!(
        "      {} {}",
        style(count).yellow().bold(),
        description
    );
}

/// Print the elapsed time of a step
pub fn print_step_time(elapsed: Duration) {
    println!(
        "      {}",
        style(format!("done in {:.2}s", elapsed.as_secs_f64())).dim()
    );
}

/// Print the final completion message
pub fn print_completion() {
    println!();
    println!(
        "    {} {}",
        SHIP,
        style("Shipunify consolidation complete!").green().bold()
    );
    println!();
}

// Helper functions

fn truncate_path(path: &Path, max_len: usize) -> String {
    let path_str = path.display().to_string();
    truncate_string(&path_str, max_len)
}

fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("...{}", &s[s.len() - max_len + 3..])
    }
}
