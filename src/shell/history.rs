//! Submitted-command history with arrow-key style recall.

use tracing::debug;

/// Ordered log of submitted commands plus a recall cursor.
///
/// The cursor is `None` while the user is typing freely and `Some(i)` while
/// walking the log. When set it always indexes a valid entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submitted line.
    ///
    /// Blank input is ignored entirely and leaves the cursor untouched.
    pub fn submit(&mut self, raw: &str) {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return;
        }
        self.entries.push(trimmed.to_string());
        self.cursor = None;
        debug!(len = self.entries.len(), "history entry recorded");
    }

    /// Step toward older entries, clamping at the oldest.
    ///
    /// Returns `None` when there is nothing to recall, in which case the
    /// caller keeps its current input.
    pub fn recall_previous(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let idx = match self.cursor {
            None => self.entries.len() - 1,
            Some(idx) => idx.saturating_sub(1),
        };
        self.cursor = Some(idx);
        self.entries.get(idx).map(String::as_str)
    }

    /// Step toward newer entries, clamping at the newest.
    ///
    /// Does nothing while the cursor is unset.
    pub fn recall_next(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let idx = self.cursor?;
        let idx = (idx + 1).min(self.entries.len() - 1);
        self.cursor = Some(idx);
        Some(self.entries.get(idx).map(String::as_str).unwrap_or(""))
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc() -> History {
        let mut history = History::new();
        history.submit("a");
        history.submit("b");
        history.submit("c");
        history
    }

    #[test]
    fn previous_walks_back_and_clamps_at_oldest() {
        let mut history = abc();
        assert_eq!(history.recall_previous(), Some("c"));
        assert_eq!(history.recall_previous(), Some("b"));
        assert_eq!(history.recall_previous(), Some("a"));
        assert_eq!(history.recall_previous(), Some("a"));
        assert_eq!(history.cursor(), Some(0));
    }

    #[test]
    fn next_walks_forward_and_clamps_at_newest() {
        let mut history = abc();
        for _ in 0..4 {
            history.recall_previous();
        }
        assert_eq!(history.recall_next(), Some("b"));
        assert_eq!(history.recall_next(), Some("c"));
        assert_eq!(history.recall_next(), Some("c"));
        assert_eq!(history.cursor(), Some(2));
    }

    #[test]
    fn next_is_a_no_op_while_unset() {
        let mut history = abc();
        assert_eq!(history.recall_next(), None);
        assert_eq!(history.cursor(), None);
    }

    #[test]
    fn empty_history_recalls_nothing() {
        let mut history = History::new();
        assert_eq!(history.recall_previous(), None);
        assert_eq!(history.recall_next(), None);
        assert_eq!(history.cursor(), None);
    }

    #[test]
    fn blank_submissions_are_ignored_and_keep_the_cursor() {
        let mut history = abc();
        history.recall_previous();
        history.submit("");
        history.submit("   ");
        assert_eq!(history.len(), 3);
        assert_eq!(history.cursor(), Some(2));
    }

    #[test]
    fn submit_trims_allows_duplicates_and_resets_cursor() {
        let mut history = History::new();
        history.submit("  help ");
        history.submit("help");
        assert_eq!(history.entries(), &["help".to_string(), "help".to_string()]);
        history.recall_previous();
        history.submit("certs");
        assert_eq!(history.cursor(), None);
        assert_eq!(history.recall_previous(), Some("certs"));
    }

    #[cfg(feature = "fuzz-tests")]
    mod fuzz {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Op {
            Submit(String),
            Previous,
            Next,
        }

        fn op() -> impl Strategy<Value = Op> {
            prop_oneof![
                proptest::string::string_regex("[ a-z]{0,6}")
                    .expect("regex")
                    .prop_map(Op::Submit),
                Just(Op::Previous),
                Just(Op::Next),
            ]
        }

        proptest! {
            #[test]
            fn cursor_always_indexes_a_valid_entry(ops in proptest::collection::vec(op(), 0..64)) {
                let mut history = History::new();
                for op in ops {
                    match op {
                        Op::Submit(raw) => history.submit(&raw),
                        Op::Previous => { history.recall_previous(); }
                        Op::Next => { history.recall_next(); }
                    }
                    if let Some(idx) = history.cursor() {
                        prop_assert!(idx < history.len());
                    }
                    prop_assert!(history.entries().iter().all(|e| !e.trim().is_empty()));
                }
            }
        }
    }
}
