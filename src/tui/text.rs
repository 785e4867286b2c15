//! Shared text helpers used by terminal rendering.

/// Clip a string to at most `max_width` visible characters.
pub fn clip_to_width(s: &str, max_width: usize) -> String {
    s.chars().take(max_width).collect()
}

/// Clip with a trailing `...` when the text does not fit.
pub fn ellipsize(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return clip_to_width(s, max_width);
    }
    format!("{}...", clip_to_width(s, max_width - 3))
}

/// Wrap a line into rows of at most `max_width` chars.
///
/// Breaks at whitespace when possible; words longer than a row are split.
pub fn wrap_to_width(line: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return Vec::new();
    }

    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in line.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        let separator = usize::from(current_len > 0);
        if current_len + separator + word.len() <= max_width {
            if separator == 1 {
                current.push(' ');
            }
            current.extend(word.iter());
            current_len += separator + word.len();
            continue;
        }

        if current_len > 0 {
            rows.push(std::mem::take(&mut current));
            current_len = 0;
        }
        while word.len() > max_width {
            let rest = word.split_off(max_width);
            rows.push(word.iter().collect());
            word = rest;
        }
        current.extend(word.iter());
        current_len = word.len();
    }

    if current_len > 0 || rows.is_empty() {
        rows.push(current);
    }
    rows
}
