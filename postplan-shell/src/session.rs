//! Read-eval-render loop
//!
//! One line in, one frame out. Parse failures and rejected commands are
//! written to the error stream and the loop carries on; only I/O failures
//! end the session early.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::app::{reduce, Action, AppState};
use crate::command::parse_line;
use crate::error::Result;
use crate::render::{render, OutputFormat};

pub struct Session<W, E> {
    out: W,
    err: E,
    format: OutputFormat,
    prompt: Option<String>,
}

impl<W: Write, E: Write> Session<W, E> {
    pub fn new(out: W, err: E, format: OutputFormat) -> Self {
        Self {
            out,
            err,
            format,
            prompt: None,
        }
    }

    /// Print `prompt` before reading each line (interactive use)
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    /// Run until `quit` or end of input, returning the final state
    pub fn run<R: BufRead>(&mut self, input: R, mut state: AppState) -> Result<AppState> {
        let mut lines = input.lines();

        loop {
            if let Some(prompt) = &self.prompt {
                write!(self.out, "{}", prompt)?;
                self.out.flush()?;
            }

            let Some(line) = lines.next() else {
                debug!("End of input");
                break;
            };
            let line = line?;

            let action = match parse_line(&line) {
                Ok(Some(action)) => action,
                Ok(None) => continue,
                Err(message) => Action::ShowError(message),
            };

            state = reduce(state, action);
            self.emit(&state)?;
            state.end_frame();

            if state.should_quit {
                break;
            }
        }

        Ok(state)
    }

    fn emit(&mut self, state: &AppState) -> Result<()> {
        let frame = render(state, self.format);
        if let Some(output) = frame.output {
            write!(self.out, "{}", output)?;
        }
        if let Some(error) = frame.error {
            writeln!(self.err, "{}", error)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use libpostplan::{Composer, FixedClock, Suggestions};
    use std::sync::Arc;

    fn state() -> AppState {
        let now = NaiveDate::from_ymd_opt(2026, 10, 19)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap();
        let clock = Arc::new(FixedClock(now));
        AppState::with_parts(clock.clone(), Composer::with_clock(clock), Suggestions::seeded(9))
    }

    fn run(script: &str) -> (AppState, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let state = Session::new(&mut out, &mut err, OutputFormat::Text)
            .run(script.as_bytes(), state())
            .unwrap();
        (
            state,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_quit_stops_reading() {
        let (state, out, _) = run("quit\ncontent never seen\n");
        assert!(state.should_quit);
        assert!(!out.contains("Content set"));
    }

    #[test]
    fn test_parse_error_goes_to_err_and_loop_continues() {
        let (state, out, err) = run("bogus\ncontent hi\n");
        assert!(err.starts_with("Error: "));
        assert!(out.contains("Content set (2 characters)"));
        assert_eq!(state.composer.content(), "hi");
    }

    #[test]
    fn test_status_cleared_between_commands() {
        let (_, out, _) = run("content hi\nstats\n");
        assert_eq!(out.matches("Content set").count(), 1);
        assert!(out.contains("Total Posts: 0"));
    }
}
