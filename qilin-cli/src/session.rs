//! Executes parsed scripts against a stack backend.

use crate::script::{Command, Script, ScriptError};
use qilin_stack::{ArrayStack, LinkedStack, Stack, StackError};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, warn};

/// Which stack implementation a session runs on.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    #[default]
    Array,
    Linked,
}

impl Backend {
    pub fn as_str(self) -> &'static str {
        match self {
            Backend::Array => "array",
            Backend::Linked => "linked",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOptions {
    pub backend: Backend,
    /// Record stack errors and continue instead of stopping.
    pub keep_going: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Ok {
        #[serde(skip_serializing_if = "Option::is_none")]
        value: Option<String>,
    },
    Error {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    pub line: usize,
    pub command: String,
    pub outcome: Outcome,
}

/// Result of running a whole script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub backend: Backend,
    pub steps: Vec<Step>,
    /// Remaining contents, bottom to top.
    #[serde(rename = "final")]
    pub final_stack: Vec<String>,
}

impl Report {
    pub fn error_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s.outcome, Outcome::Error { .. }))
            .count()
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    /// A stack error stopped a strict run.
    #[error("line {line}: {source}")]
    Underflow { line: usize, source: StackError },

    #[error(transparent)]
    Script(#[from] ScriptError),
}

impl SessionError {
    /// Returns the recommended exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            SessionError::Underflow { .. } => 2,
            SessionError::Script(_) => 1,
        }
    }
}

/// Run `script` on a fresh stack of the configured backend.
pub fn run_script(script: &Script, options: SessionOptions) -> Result<Report, SessionError> {
    debug!(backend = %options.backend, keep_going = options.keep_going, "starting session");
    match options.backend {
        Backend::Array => Session::new(ArrayStack::new(), options).run(script),
        Backend::Linked => Session::new(LinkedStack::new(), options).run(script),
    }
}

struct Session<S> {
    stack: S,
    options: SessionOptions,
}

impl<S> Session<S>
where
    S: Stack<String> + fmt::Display,
{
    fn new(stack: S, options: SessionOptions) -> Self {
        Self { stack, options }
    }

    fn run(mut self, script: &Script) -> Result<Report, SessionError> {
        let mut steps = Vec::with_capacity(script.len());
        for entry in &script.lines {
            debug!(line = entry.line, command = %entry.command, "execute");
            let outcome = match self.execute(&entry.command) {
                Ok(value) => Outcome::Ok { value },
                Err(source) if self.options.keep_going => {
                    warn!(line = entry.line, error = %source, "stack error, continuing");
                    Outcome::Error {
                        message: source.to_string(),
                    }
                }
                Err(source) => {
                    return Err(SessionError::Underflow {
                        line: entry.line,
                        source,
                    });
                }
            };
            steps.push(Step {
                line: entry.line,
                command: entry.command.to_string(),
                outcome,
            });
        }

        let mut final_stack: Vec<String> = self.stack.iter().cloned().collect();
        final_stack.reverse();
        Ok(Report {
            backend: self.options.backend,
            steps,
            final_stack,
        })
    }

    fn execute(&mut self, command: &Command) -> Result<Option<String>, StackError> {
        let value = match command {
            Command::Push(value) => {
                self.stack.push(value.clone());
                None
            }
            Command::Pop => Some(self.stack.pop()?),
            Command::Peek => Some(self.stack.peek()?.clone()),
            Command::Size => Some(self.stack.size().to_string()),
            Command::Empty => Some(self.stack.is_empty().to_string()),
            Command::Clear => {
                self.stack.clear();
                None
            }
            Command::Show => Some(self.stack.to_string()),
            Command::List => {
                let values: Vec<&str> = self.stack.iter().map(String::as_str).collect();
                Some(format!("[{}]", values.join(", ")))
            }
        };
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::parse_script;
    use pretty_assertions::assert_eq;

    fn run(source: &str, backend: Backend, keep_going: bool) -> Result<Report, SessionError> {
        let script = parse_script(source).unwrap();
        run_script(
            &script,
            SessionOptions {
                backend,
                keep_going,
            },
        )
    }

    fn values(report: &Report) -> Vec<Option<String>> {
        report
            .steps
            .iter()
            .map(|s| match &s.outcome {
                Outcome::Ok { value } => value.clone(),
                Outcome::Error { message } => Some(format!("!{message}")),
            })
            .collect()
    }

    #[test]
    fn runs_plates_script() {
        let report = run(
            "push 1\npush 2\npush 3\npop\npeek\nsize\nshow\nlist\n",
            Backend::Array,
            false,
        )
        .unwrap();
        assert_eq!(
            values(&report),
            vec![
                None,
                None,
                None,
                Some("3".to_string()),
                Some("2".to_string()),
                Some("2".to_string()),
                Some("ArrayStack([1, 2])".to_string()),
                Some("[2, 1]".to_string()),
            ]
        );
        assert_eq!(report.final_stack, vec!["1", "2"]);
    }

    #[test]
    fn linked_backend_renders_its_own_name() {
        let report = run("push a\nshow\nempty\nclear\nempty\n", Backend::Linked, false).unwrap();
        assert_eq!(
            values(&report),
            vec![
                None,
                Some("LinkedStack([a])".to_string()),
                Some("false".to_string()),
                None,
                Some("true".to_string()),
            ]
        );
        assert_eq!(report.backend, Backend::Linked);
        assert!(report.final_stack.is_empty());
    }

    #[test]
    fn strict_mode_stops_at_first_underflow() {
        let err = run("push 1\npop\n\npop\npush 2\n", Backend::Array, false).unwrap_err();
        match &err {
            SessionError::Underflow { line, source } => {
                assert_eq!(*line, 4);
                assert_eq!(source.to_string(), "pop from an empty stack");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "line 4: pop from an empty stack");
    }

    #[test]
    fn keep_going_records_errors() {
        let report = run("peek\npush x\npop\npop\n", Backend::Linked, true).unwrap();
        assert_eq!(report.error_count(), 2);
        assert_eq!(
            report.steps[0].outcome,
            Outcome::Error {
                message: "peek from an empty stack".to_string()
            }
        );
        assert_eq!(report.steps[2].outcome, Outcome::Ok { value: Some("x".to_string()) });
    }

    #[test]
    fn backends_produce_same_values() {
        let source = "push a\npush b\nlist\npop\npeek\nsize\npop\nempty\n";
        let array = run(source, Backend::Array, true).unwrap();
        let linked = run(source, Backend::Linked, true).unwrap();
        assert_eq!(values(&array), values(&linked));
        assert_eq!(array.final_stack, linked.final_stack);
    }

    #[test]
    fn script_error_exit_code_is_one() {
        let err = SessionError::from(parse_script("bogus").unwrap_err());
        assert_eq!(err.exit_code(), 1);
    }
}
