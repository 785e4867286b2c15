//! Terminal user-interface building blocks.
//!
//! This module hosts the prompt line editor and the output renderer. Input
//! editing, layout math, and output styling live in separate files so the
//! shell state in [`crate::shell`] never touches the terminal directly.

pub mod input;
mod input_buffer;
mod input_layout;
mod prompt;
pub mod renderer;
pub mod settings;
pub mod text;

pub use input::{read_command_line, ReadOutcome};
pub use input_layout::terminal_columns;
pub use renderer::Renderer;
