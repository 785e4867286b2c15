//! Centralized, hardcoded UI settings for the terminal interface.
//!
//! This is the single place to tweak prompt strings, glyphs, colors, and
//! indentation.

use crossterm::style::Color;

// ---------------------------------------------------------------------------
// Layout / indentation
// ---------------------------------------------------------------------------

pub const INDENT_1: &str = "  ";
pub const FALLBACK_COLUMNS: usize = 80;

// ---------------------------------------------------------------------------
// Prompt strings
// ---------------------------------------------------------------------------

pub const PROMPT_SYMBOL: &str = "$";
pub const PROMPT_SPACER: &str = " ";
pub const PROMPT_PRIMARY: &str = "$ ";

// ---------------------------------------------------------------------------
// Sections / labels
// ---------------------------------------------------------------------------

pub const LABEL_ERROR: &str = "error:";

pub const GLYPH_SECTION_BULLET: &str = "•";
pub const GLYPH_SECTION_BULLET_PLAIN: &str = "-";

// ---------------------------------------------------------------------------
// Autocomplete UI
// ---------------------------------------------------------------------------

pub const AUTOCOMPLETE_PREFIX: &str = INDENT_1;
pub const AUTOCOMPLETE_MARKER_COLOR: &str = "·";
pub const AUTOCOMPLETE_MARKER_PLAIN: &str = "-";

pub const REPL_EVENT_POLL_MS: u64 = 80;

// ---------------------------------------------------------------------------
// Colors (monokai)
// ---------------------------------------------------------------------------

pub const COLOR_MONOKAI_GREEN: Color = Color::Rgb {
    r: 166,
    g: 226,
    b: 46,
};
pub const COLOR_MONOKAI_YELLOW: Color = Color::Rgb {
    r: 230,
    g: 219,
    b: 116,
};
pub const COLOR_MONOKAI_ORANGE: Color = Color::Rgb {
    r: 253,
    g: 151,
    b: 31,
};

pub const COLOR_PROMPT_SYMBOL: Color = COLOR_MONOKAI_YELLOW;
pub const COLOR_TRANSCRIPT: Color = COLOR_MONOKAI_GREEN;
pub const COLOR_BANNER: Color = COLOR_MONOKAI_GREEN;
pub const COLOR_SECTION_TITLE: Color = COLOR_MONOKAI_ORANGE;
pub const COLOR_SECTION_BULLET: Color = Color::DarkGrey;
pub const COLOR_SECTION_ITEM: Color = COLOR_MONOKAI_GREEN;
pub const COLOR_INPUT: Color = COLOR_MONOKAI_GREEN;

pub const COLOR_ERROR: Color = Color::Red;

pub const COLOR_AUTOCOMPLETE_MARKER: Color = Color::DarkGrey;
pub const COLOR_AUTOCOMPLETE_COMMAND: Color = COLOR_MONOKAI_YELLOW;
pub const COLOR_AUTOCOMPLETE_DESCRIPTION: Color = Color::DarkGrey;

pub fn suggestion_marker(color: bool) -> &'static str {
    if color {
        AUTOCOMPLETE_MARKER_COLOR
    } else {
        AUTOCOMPLETE_MARKER_PLAIN
    }
}

pub fn section_bullet(color: bool) -> &'static str {
    if color {
        GLYPH_SECTION_BULLET
    } else {
        GLYPH_SECTION_BULLET_PLAIN
    }
}
