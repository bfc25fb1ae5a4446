//! Rewind front-end - CLI, settings, scripted replay and terminal UI.
//!
//! Everything here is a projection of [`rewind_core::HistoryStore`]; no game
//! rules live in this crate.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod script;
pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, Settings};
pub use script::{Rejection, ReplayReport, ScriptError, Step};
