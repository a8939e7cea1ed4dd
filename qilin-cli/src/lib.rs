//! Script runner for qilin stacks.
//!
//! A script is a line-oriented list of stack commands (`push x`, `pop`,
//! `peek`, ...). [`script`] parses it, [`session`] executes it against a
//! chosen backend and [`render`] turns the resulting report into text or
//! JSON. [`config`] loads `qilin.toml` defaults for the binary.

pub mod config;
pub mod render;
pub mod script;
pub mod session;

pub use script::{Command, Script, ScriptError, ScriptLine, parse_script};
pub use session::{Backend, Outcome, Report, SessionError, SessionOptions, Step, run_script};
