//! Line-oriented stack scripts.
//!
//! One command per line. Blank lines and `#` comments are skipped:
//!
//! ```text
//! # plates
//! push 1
//! push 2
//! pop
//! show
//! ```

use std::fmt;
use thiserror::Error;
use tracing::debug;

/// A single stack command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Push the rest of the line, trimmed.
    Push(String),
    Pop,
    Peek,
    Size,
    Empty,
    Clear,
    /// Display form, bottom to top.
    Show,
    /// Values top to bottom.
    List,
}

impl Command {
    pub fn keyword(&self) -> &'static str {
        match self {
            Command::Push(_) => "push",
            Command::Pop => "pop",
            Command::Peek => "peek",
            Command::Size => "size",
            Command::Empty => "empty",
            Command::Clear => "clear",
            Command::Show => "show",
            Command::List => "list",
        }
    }

    fn without_argument(keyword: &str) -> Option<Self> {
        let command = match keyword {
            "pop" => Command::Pop,
            "peek" => Command::Peek,
            "size" => Command::Size,
            "empty" => Command::Empty,
            "clear" => Command::Clear,
            "show" => Command::Show,
            "list" => Command::List,
            _ => return None,
        };
        Some(command)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Push(value) => write!(f, "push {value}"),
            other => f.write_str(other.keyword()),
        }
    }
}

/// A parsed command with its 1-based source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptLine {
    pub line: usize,
    pub command: Command,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    pub lines: Vec<ScriptLine>,
}

impl Script {
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command `{keyword}`")]
    UnknownCommand { line: usize, keyword: String },

    #[error("line {line}: `push` needs a value")]
    MissingValue { line: usize },

    #[error("line {line}: `{keyword}` takes no arguments")]
    UnexpectedArgument { line: usize, keyword: String },
}

impl ScriptError {
    pub fn line(&self) -> usize {
        match self {
            ScriptError::UnknownCommand { line, .. }
            | ScriptError::MissingValue { line }
            | ScriptError::UnexpectedArgument { line, .. } => *line,
        }
    }
}

/// Parse a script, stopping at the first malformed line.
pub fn parse_script(source: &str) -> Result<Script, ScriptError> {
    let mut lines = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let text = raw.trim();
        if text.is_empty() || text.starts_with('#') {
            continue;
        }
        lines.push(ScriptLine {
            line,
            command: parse_line(line, text)?,
        });
    }

    debug!(commands = lines.len(), "parsed script");
    Ok(Script { lines })
}

fn parse_line(line: usize, text: &str) -> Result<Command, ScriptError> {
    let (keyword, rest) = match text.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (text, ""),
    };

    if keyword == "push" {
        if rest.is_empty() {
            return Err(ScriptError::MissingValue { line });
        }
        return Ok(Command::Push(rest.to_string()));
    }

    let command = Command::without_argument(keyword).ok_or_else(|| {
        ScriptError::UnknownCommand {
            line,
            keyword: keyword.to_string(),
        }
    })?;
    if !rest.is_empty() {
        return Err(ScriptError::UnexpectedArgument {
            line,
            keyword: keyword.to_string(),
        });
    }
    Ok(command)
}
