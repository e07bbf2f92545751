// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

use crate::{app::AppState, theme::Theme};

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    Theme(String),
    /// Unlock private mode with a code.
    Private(String),
    /// Leave private mode.
    Lock,
    Owned,
    Dupes,
    Clear,
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Err("")` for empty input, meaning "close without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" | "q!" | "quit!" => Ok(Command::Quit),
            "help" => Ok(Command::Help),
            "owned" => Ok(Command::Owned),
            "dupes" => Ok(Command::Dupes),
            "clear" => Ok(Command::Clear),
            "lock" => Ok(Command::Lock),
            "theme" if rest.is_empty() => Err("usage: theme <default|gruvbox>".to_string()),
            "theme" => Ok(Command::Theme(rest.to_string())),
            "private" if rest.is_empty() => Err("usage: private <code>".to_string()),
            "private" => Ok(Command::Private(rest.to_string())),
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Execute a parsed [`Command`] against the application state.
pub fn execute_command(s: &mut AppState, cmd: Command) {
    match cmd {
        Command::Quit => s.quit = true,
        Command::Help => s.show_help = !s.show_help,
        Command::Theme(name) => {
            s.theme = Theme::by_name(&name);
            s.notice = Some(format!("theme: {}", s.theme.name));
        }
        Command::Private(code) => {
            if s.gate.unlock(&mut s.session, &code) {
                s.notice = Some("Private mode on".to_string());
            } else {
                s.notice = Some("Incorrect code.".to_string());
            }
            s.refresh();
        }
        Command::Lock => {
            s.gate.lock(&mut s.session);
            s.notice = Some("Private mode off".to_string());
            s.refresh();
        }
        Command::Owned => {
            s.query.owned_only = !s.query.owned_only;
            s.refresh();
        }
        Command::Dupes => {
            s.query.dupes_only = !s.query.dupes_only;
            s.refresh();
        }
        Command::Clear => {
            s.query.clear();
            s.refresh();
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
