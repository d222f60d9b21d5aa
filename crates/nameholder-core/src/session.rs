//! Line-oriented command scripts driving a single name holder.
//!
//! ```text
//! # comments and blank lines are skipped
//! get
//! set alice
//! get
//! ```
//!
//! Everything after the single space (U+0020) following `set` is the new
//! name, taken verbatim. Any other character directly after a keyword, a tab
//! included, makes the line an unknown command. `set` on its own sets the
//! empty name. `GetName` and `SetName` are accepted as aliases, and keywords
//! are case-insensitive.
//!
//! Line endings are handled by [`str::lines`]; any other `\r` is part of the
//! value.

use crate::errors::{HolderError, Result};
use crate::module::{Module, NameHolderModule};
use crate::record::NameHolder;
use tracing::{debug, info, trace};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Get,
    Set(String),
}

impl Command {
    /// Parse one script line. `line_no` is 1-based and only used for errors.
    /// Returns `Ok(None)` for blank and comment lines.
    pub fn parse(line_no: usize, line: &str) -> Result<Option<Command>> {
        let body = line.trim_start();
        if body.is_empty() || body.starts_with('#') {
            return Ok(None);
        }

        let (keyword, rest) = match body.split_once(' ') {
            Some((keyword, rest)) => (keyword, Some(rest)),
            None => (body, None),
        };

        match keyword.to_ascii_lowercase().as_str() {
            "get" | "getname" if rest.map_or(true, |r| r.trim_matches(' ').is_empty()) => {
                Ok(Some(Command::Get))
            }
            "set" | "setname" => Ok(Some(Command::Set(rest.unwrap_or("").to_string()))),
            _ => Err(HolderError::UnknownCommand {
                line: line_no,
                command: body.to_string(),
            }),
        }
    }

    /// Command keyword, without its value
    pub fn kind(&self) -> &'static str {
        match self {
            Command::Get => "get",
            Command::Set(_) => "set",
        }
    }
}

/// Runs commands against one record produced by the name-holder factory
#[derive(Debug, Default)]
pub struct Session {
    holder: NameHolder,
    echo: bool,
}

impl Session {
    pub fn new() -> Self {
        Self::with_holder(NameHolderModule::instantiate())
    }

    /// Run commands against an existing record
    pub fn with_holder(holder: NameHolder) -> Self {
        Self {
            holder,
            echo: false,
        }
    }

    /// Log every executed command at info level. Only the command kind is
    /// logged at info; the value goes to trace.
    pub fn echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Execute one command. `Get` yields the current name.
    pub fn execute(&mut self, command: Command) -> Option<String> {
        if self.echo {
            info!("Executing {}", command.kind());
            trace!("{:?}", command);
        }
        match command {
            Command::Get => Some(self.holder.get_name().to_string()),
            Command::Set(value) => {
                self.holder.set_name(value);
                None
            }
        }
    }

    /// Execute every command in `script` in order and collect the output of
    /// each `get`. Stops at the first line that fails to parse; commands
    /// before it remain applied.
    pub fn run_script(&mut self, script: &str) -> Result<Vec<String>> {
        let mut outputs = Vec::new();
        let mut executed = 0usize;

        for (idx, line) in script.lines().enumerate() {
            let Some(command) = Command::parse(idx + 1, line)? else {
                continue;
            };
            executed += 1;
            if let Some(name) = self.execute(command) {
                outputs.push(name);
            }
        }

        debug!("Executed {} command(s), {} output(s)", executed, outputs.len());
        Ok(outputs)
    }

    pub fn holder(&self) -> &NameHolder {
        &self.holder
    }

    pub fn into_holder(self) -> NameHolder {
        self.holder
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_get() {
        assert_eq!(Command::parse(1, "get").unwrap(), Some(Command::Get));
        assert_eq!(Command::parse(1, "  GET  ").unwrap(), Some(Command::Get));
        assert_eq!(Command::parse(1, "GetName").unwrap(), Some(Command::Get));
    }

    #[test]
    fn test_parse_set_keeps_value_verbatim() {
        assert_eq!(
            Command::parse(1, "set  padded ").unwrap(),
            Some(Command::Set(" padded ".to_string()))
        );
        assert_eq!(
            Command::parse(1, "SetName alice").unwrap(),
            Some(Command::Set("alice".to_string()))
        );
    }

    #[test]
    fn test_parse_bare_set_is_empty_name() {
        assert_eq!(
            Command::parse(1, "set").unwrap(),
            Some(Command::Set(String::new()))
        );
    }

    #[test]
    fn test_parse_keeps_carriage_return_in_value() {
        assert_eq!(
            Command::parse(1, "set bob\r").unwrap(),
            Some(Command::Set("bob\r".to_string()))
        );
    }

    #[test]
    fn test_run_script_strips_only_line_ending() {
        let mut session = Session::new();
        let outputs = session.run_script("set a\r\r\nget\r\n").unwrap();
        assert_eq!(outputs, vec!["a\r"]);
    }

    #[test]
    fn test_parse_separator_is_single_space() {
        assert!(Command::parse(1, "set\talice").is_err());
        assert!(Command::parse(1, "set\u{a0}bob").is_err());
        assert!(Command::parse(1, "get\t").is_err());
        assert_eq!(
            Command::parse(1, "set \u{a0}bob").unwrap(),
            Some(Command::Set("\u{a0}bob".to_string()))
        );
        assert_eq!(
            Command::parse(1, "set \talice").unwrap(),
            Some(Command::Set("\talice".to_string()))
        );
    }

    #[test]
    fn test_command_kind() {
        assert_eq!(Command::Get.kind(), "get");
        assert_eq!(Command::Set("secret".to_string()).kind(), "set");
    }

    #[test]
    fn test_parse_skips_blank_and_comments() {
        assert_eq!(Command::parse(1, "").unwrap(), None);
        assert_eq!(Command::parse(1, "   ").unwrap(), None);
        assert_eq!(Command::parse(1, "# set x").unwrap(), None);
    }

    #[test]
    fn test_parse_unknown_command() {
        let err = Command::parse(7, "delete").unwrap_err();
        match err {
            HolderError::UnknownCommand { line, command } => {
                assert_eq!(line, 7);
                assert_eq!(command, "delete");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_parse_get_with_argument_is_unknown() {
        assert!(Command::parse(1, "get alice").is_err());
    }

    #[test]
    fn test_execute() {
        let mut session = Session::new();
        assert_eq!(session.execute(Command::Get), Some("king".to_string()));
        assert_eq!(session.execute(Command::Set("alice".to_string())), None);
        assert_eq!(session.holder().get_name(), "alice");
    }

    #[test]
    fn test_with_holder() {
        let mut holder = NameHolder::new();
        holder.set_name("preset");
        let mut session = Session::with_holder(holder);
        assert_eq!(session.execute(Command::Get), Some("preset".to_string()));
    }
}
