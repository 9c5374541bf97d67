//! Width-aware string helpers shared by the diagram widgets.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn width(s: &str) -> u16 {
    u16::try_from(s.width()).unwrap_or(u16::MAX)
}

/// Cut `s` to at most `max` columns, ending in `…` when something was dropped.
pub fn truncate(s: &str, max: u16) -> String {
    let max = usize::from(max);
    if s.width() <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// Greedy word wrap to `max` columns. Words longer than a line are split.
pub fn wrap(s: &str, max: u16) -> Vec<String> {
    let max = usize::from(max.max(1));
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in s.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed <= max {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        // Hard-split words wider than a line
        for c in word.chars() {
            let w = c.width().unwrap_or(0);
            if current.width() + w > max {
                lines.push(std::mem::take(&mut current));
            }
            current.push(c);
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Pack whole tokens into lines of at most `max` columns, joined by `sep`.
/// A token wider than a line sits alone on its line, truncated.
pub fn pack<S: AsRef<str>>(tokens: &[S], sep: &str, max: u16) -> Vec<String> {
    let max = max.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for token in tokens {
        let token = token.as_ref();
        if !current.is_empty() && width(&current) + width(sep) + width(token) <= max {
            current.push_str(sep);
            current.push_str(token);
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        current = truncate(token, max);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}
