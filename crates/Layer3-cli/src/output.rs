//! Output rendering for the status envelope

use clap::ValueEnum;
use plugin_status_core::StatusResponse;

/// 출력 형식
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON
    Json,
    /// Indented JSON
    Pretty,
    /// Human-readable table
    Text,
}

pub fn print(response: &StatusResponse, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(response)?),
        OutputFormat::Pretty => println!("{}", serde_json::to_string_pretty(response)?),
        OutputFormat::Text => print!("{}", render_text(response)),
    }
    Ok(())
}

/// 표 형태 출력
pub fn render_text(response: &StatusResponse) -> String {
    let status = &response.plugin_status;
    let mut lines = Vec::new();

    lines.push(response.simple.clone());
    lines.push(String::new());
    lines.push(format!(
        "{:<32} {:<24} {:<10} {:<8} {:<8}",
        "File", "Name", "Version", "Active", "Health"
    ));
    lines.push("-".repeat(86));

    for plugin in &status.plugins {
        let health = match &plugin.health {
            Some(h) if h.is_healthy() => "ok".to_string(),
            Some(h) => h
                .issues()
                .iter()
                .map(|i| i.as_str())
                .collect::<Vec<_>>()
                .join(","),
            None => "-".to_string(),
        };
        lines.push(format!(
            "{:<32} {:<24} {:<10} {:<8} {}",
            truncate(&plugin.plugin_file, 32),
            truncate(&plugin.name, 24),
            truncate(&plugin.version, 10),
            if plugin.active { "yes" } else { "no" },
            health
        ));
    }

    if let Some(summary) = &status.health_summary {
        lines.push(String::new());
        lines.push(format!(
            "Health: {}/{} healthy ({}%), {} bytes total",
            summary.healthy_plugins,
            summary.total_checked,
            summary.health_percentage,
            summary.total_size_bytes
        ));
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Truncate a string for display
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let head: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
