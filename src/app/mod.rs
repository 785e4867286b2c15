//! Binary-local application orchestration helpers.
//!
//! `main.rs` keeps process wiring; this module hosts mode dispatch and the
//! helpers shared by the one-shot and interactive paths.

pub(crate) mod entry;
pub(crate) mod exec_mode;
pub(crate) mod repl_mode;
pub(crate) mod startup;

use termfolio::opener::ResourceOpener;
use termfolio::shell::{Effect, Interpretation};

/// Carry out the side effect an interpretation asks for, if any.
pub(crate) fn perform_effect(interpretation: &Interpretation, opener: &dyn ResourceOpener) {
    if let Some(Effect::OpenResource(locator)) = &interpretation.effect {
        opener.open(locator);
    }
}
