//! Text and JSON rendering of the current state
//!
//! Rendering only reads: `store.all()` through [`QueueView`], the composer
//! fields, and the platform registry.

use chrono::NaiveDateTime;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Write;

use libpostplan::{Platform, Post, QueueView};

use crate::app::reducer::short_id;
use crate::app::{AppState, Screen};
use crate::command::help_text;

/// Output format for screens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// What one command produces
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Frame {
    /// For stdout
    pub output: Option<String>,
    /// For stderr
    pub error: Option<String>,
}

pub fn render(state: &AppState, format: OutputFormat) -> Frame {
    let mut output = String::new();

    if let Some(message) = &state.status.message {
        let _ = writeln!(output, "> {}", message);
    }

    if let Some(screen) = state.screen {
        let body = match format {
            OutputFormat::Text => render_text(state, screen),
            OutputFormat::Json => render_json(state, screen),
        };
        output.push_str(&body);
        if !body.ends_with('\n') {
            output.push('\n');
        }
    }

    Frame {
        output: (!output.is_empty()).then_some(output),
        error: state.error.as_ref().map(|e| format!("Error: {}", e)),
    }
}

fn render_text(state: &AppState, screen: Screen) -> String {
    match screen {
        Screen::Draft => draft_text(state),
        Screen::Queue => queue_text(state),
        Screen::Stats => stats_text(state),
        Screen::Platforms => platforms_text(),
        Screen::Help => help_text(),
    }
}

fn draft_text(state: &AppState) -> String {
    let composer = &state.composer;
    let mut out = String::new();

    let content = if composer.content().is_empty() {
        "(empty)"
    } else {
        composer.content()
    };
    let _ = writeln!(out, "Content:   {}", content);
    let _ = writeln!(out, "           {} characters", composer.char_count());

    let platforms: Vec<String> = Platform::ALL
        .iter()
        .map(|p| {
            let mark = if composer.is_selected(*p) { 'x' } else { ' ' };
            format!("[{}] {}", mark, p.metadata().label)
        })
        .collect();
    let _ = writeln!(out, "Platforms: {}", platforms.join("  "));
    let _ = writeln!(out, "Date:      {}", composer.date().format("%Y-%m-%d"));
    let _ = writeln!(out, "Time:      {}", composer.time().format("%H:%M"));
    out
}

fn queue_text(state: &AppState) -> String {
    let posts = QueueView::new(&state.store).ordered();
    if posts.is_empty() {
        return "No scheduled posts yet\n".to_string();
    }

    let now = state.clock.now();
    let mut out = String::new();
    for post in posts {
        let labels: Vec<&str> = post.platforms().iter().map(|p| p.metadata().label).collect();
        let hint = if post.is_posted() {
            "done".to_string()
        } else {
            format_time_until(now, post.scheduled_at())
        };
        let _ = writeln!(
            out,
            "{} | {} | {} | {} | {} | {}",
            short_id(&post.id()),
            format_schedule(post.scheduled_at()),
            labels.join(", "),
            post.status(),
            truncate_content(post.content(), 50),
            hint
        );
    }
    out
}

fn stats_text(state: &AppState) -> String {
    let stats = QueueView::new(&state.store).stats();
    format!(
        "Total Posts: {}\nScheduled:   {}\nPosted:      {}\nPlatforms:   {}\n",
        stats.total, stats.pending, stats.posted, stats.distinct_platforms
    )
}

fn platforms_text() -> String {
    let mut out = String::new();
    for platform in Platform::ALL {
        let meta = platform.metadata();
        let _ = writeln!(out, "{:<10} {:<10} {}", platform, meta.label, meta.color);
    }
    out
}

#[derive(Serialize)]
struct DraftJson<'a> {
    content: &'a str,
    char_count: usize,
    platforms: Vec<Platform>,
    date: String,
    time: String,
}

#[derive(Serialize)]
struct PlatformJson {
    id: Platform,
    label: &'static str,
    icon: &'static str,
    color: &'static str,
}

fn render_json(state: &AppState, screen: Screen) -> String {
    let value = match screen {
        Screen::Draft => {
            let composer = &state.composer;
            serde_json::to_value(DraftJson {
                content: composer.content(),
                char_count: composer.char_count(),
                platforms: composer.selected_platforms().iter().collect(),
                date: composer.date().format("%Y-%m-%d").to_string(),
                time: composer.time().format("%H:%M").to_string(),
            })
        }
        Screen::Queue => {
            let posts: Vec<&Post> = QueueView::new(&state.store).ordered();
            serde_json::to_value(posts)
        }
        Screen::Stats => serde_json::to_value(QueueView::new(&state.store).stats()),
        Screen::Platforms => {
            let platforms: Vec<PlatformJson> = Platform::ALL
                .iter()
                .map(|p| {
                    let meta = p.metadata();
                    PlatformJson {
                        id: *p,
                        label: meta.label,
                        icon: meta.icon,
                        color: meta.color,
                    }
                })
                .collect();
            serde_json::to_value(platforms)
        }
        Screen::Help => return help_text(),
    };

    pretty_json(value)
}

fn pretty_json(value: serde_json::Result<serde_json::Value>) -> String {
    match value.and_then(|v| serde_json::to_string_pretty(&v)) {
        Ok(json) => json,
        Err(e) => serde_json::json!({ "error": e.to_string() }).to_string(),
    }
}

/// `Oct 19, 2026 9:05 PM`
fn format_schedule(at: NaiveDateTime) -> String {
    at.format("%b %d, %Y %-I:%M %p").to_string()
}

/// Truncate content to `max_chars` characters with an ellipsis
fn truncate_content(content: &str, max_chars: usize) -> String {
    let single_line = content.replace('\n', " ");
    if single_line.chars().count() <= max_chars {
        single_line
    } else {
        let head: String = single_line.chars().take(max_chars).collect();
        format!("{}...", head)
    }
}

/// Human-readable distance from `now` to `scheduled_at`
fn format_time_until(now: NaiveDateTime, scheduled_at: NaiveDateTime) -> String {
    let diff = (scheduled_at - now).num_seconds();

    if diff < 0 {
        return "overdue".to_string();
    }

    let minutes = diff / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    if days > 0 {
        format!("in {} day{}", days, if days == 1 { "" } else { "s" })
    } else if hours > 0 {
        format!("in {} hour{}", hours, if hours == 1 { "" } else { "s" })
    } else if minutes > 0 {
        format!("in {} minute{}", minutes, if minutes == 1 { "" } else { "s" })
    } else {
        "in <1 minute".to_string()
    }
}
