//! Termfolio: a terminal-style portfolio shell.
//!
//! Visitors type one of a small, closed set of commands at a `$ ` prompt
//! and get canned text back, optionally revealing a static content section
//! or opening a resume document. The crate separates the pure command
//! interpreter and history navigator ([`shell`]) from configuration
//! ([`config`]), side effects ([`opener`]), and the crossterm frontend
//! ([`tui`]).
//!
//! # Quick start
//!
//! ```
//! use termfolio::config::Config;
//! use termfolio::shell::{ActiveSection, Session};
//!
//! let (mut session, _startup_help) = Session::start(Config::default().interpreter());
//! let result = session.submit("certs").unwrap();
//! assert_eq!(result.section, ActiveSection::Certs);
//! assert_eq!(session.recall_previous(), Some("certs"));
//! ```

pub mod config;
pub mod error;
pub mod opener;
pub mod shell;
#[cfg(test)]
pub mod testsupport;
pub mod tui;
