//! Shell command parsing
//!
//! Each input line is parsed by clap (without a binary name) and turned into
//! an [`Action`]. Blank lines and `#` comments produce nothing.

use clap::{CommandFactory, Parser, Subcommand};
use libpostplan::Platform;

use crate::app::{Action, Screen};

#[derive(Parser, Debug)]
#[command(
    name = "postplan",
    no_binary_name = true,
    disable_help_flag = true,
    disable_help_subcommand = true,
    disable_version_flag = true
)]
struct CommandLine {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Debug)]
enum ShellCommand {
    /// Set the draft content
    Content {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true, num_args = 0..)]
        text: Vec<String>,
    },

    /// Replace the draft content with a random suggestion
    Suggest,

    /// Select or deselect a platform (twitter, facebook, instagram, linkedin)
    Toggle { platform: Platform },

    /// Set the draft date (YYYY-MM-DD, today, tomorrow, next friday, ...)
    Date {
        #[arg(trailing_var_arg = true, num_args = 1..)]
        when: Vec<String>,
    },

    /// Set the draft time (HH:MM, 24-hour)
    Time { time: String },

    /// Schedule the draft
    Submit,

    /// Mark a post as posted (full id or a prefix of at least 4 characters)
    Posted { id: String },

    /// Delete a post (full id or a prefix of at least 4 characters)
    #[command(alias = "rm")]
    Delete { id: String },

    /// List posts in chronological order
    #[command(alias = "ls")]
    List,

    /// Show queue statistics
    Stats,

    /// Show the current draft
    Draft,

    /// Show available platforms
    Platforms,

    /// Show this help
    Help,

    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

/// Parse one input line
///
/// Returns `Ok(None)` for blank lines and comments.
///
/// # Errors
///
/// Returns clap's rendered message for unknown commands or bad arguments.
pub fn parse_line(line: &str) -> Result<Option<Action>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let parsed = CommandLine::try_parse_from(line.split_whitespace())
        .map_err(|e| e.to_string().trim_end().to_string())?;

    let action = match parsed.command {
        ShellCommand::Content { text } if text.is_empty() => {
            Action::ComposerSetContent(String::new())
        }
        ShellCommand::Content { .. } => Action::ComposerSetContent(raw_argument(line)),
        ShellCommand::Suggest => Action::ComposerSuggest,
        ShellCommand::Toggle { platform } => Action::ComposerTogglePlatform(platform),
        ShellCommand::Date { when } => Action::ComposerSetDate(when.join(" ")),
        ShellCommand::Time { time } => Action::ComposerSetTime(time),
        ShellCommand::Submit => Action::ComposerSubmit,
        ShellCommand::Posted { id } => Action::QueueMarkPosted(id),
        ShellCommand::Delete { id } => Action::QueueDelete(id),
        ShellCommand::List => Action::NavigateTo(Screen::Queue),
        ShellCommand::Stats => Action::NavigateTo(Screen::Stats),
        ShellCommand::Draft => Action::NavigateTo(Screen::Draft),
        ShellCommand::Platforms => Action::NavigateTo(Screen::Platforms),
        ShellCommand::Help => Action::NavigateTo(Screen::Help),
        ShellCommand::Quit => Action::Quit,
    };

    Ok(Some(action))
}

/// Everything after the command word, spacing intact
fn raw_argument(line: &str) -> String {
    line.split_once(char::is_whitespace)
        .map(|(_, rest)| rest.trim_start().to_string())
        .unwrap_or_default()
}

/// Command reference, rendered by clap
pub fn help_text() -> String {
    CommandLine::command().render_help().to_string()
}
