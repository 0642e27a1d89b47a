//! Unicode-aware text measurement helpers for fixed-width cell layout.
//!
//! Grid cells are laid out against a per-column width vector, so every piece
//! of cell text has to be measured, truncated, and padded in terminal display
//! columns rather than bytes or chars. Splitting on grapheme clusters keeps
//! combining sequences intact, and `unicode-width` accounts for wide (CJK,
//! emoji) glyphs.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Returns the display width of a string in terminal columns.
///
/// # Examples
///
/// ```rust
/// use bubbletea_datagrid::runeutil::display_width;
///
/// assert_eq!(display_width("abc"), 3);
/// assert_eq!(display_width("日本"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncates a string to at most `max_width` display columns.
///
/// When truncation happens, `tail` (typically an ellipsis) is appended and
/// its own width is accounted for. Grapheme clusters are never split.
///
/// # Examples
///
/// ```rust
/// use bubbletea_datagrid::runeutil::truncate;
///
/// assert_eq!(truncate("hello world", 8, "…"), "hello w…");
/// assert_eq!(truncate("short", 8, "…"), "short");
/// ```
pub fn truncate(s: &str, max_width: usize, tail: &str) -> String {
    if display_width(s) <= max_width {
        return s.to_string();
    }
    let tail_width = display_width(tail);
    let avail = max_width.saturating_sub(tail_width);

    let mut out = String::new();
    let mut used = 0;
    for grapheme in s.graphemes(true) {
        let w = display_width(grapheme);
        if used + w > avail {
            break;
        }
        out.push_str(grapheme);
        used += w;
    }
    out.push_str(tail);
    out
}

/// Left-aligns a string within `width` columns, padding with spaces.
pub fn pad_right(s: &str, width: usize) -> String {
    let gap = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(gap))
}

/// Right-aligns a string within `width` columns, padding with spaces.
pub fn pad_left(s: &str, width: usize) -> String {
    let gap = width.saturating_sub(display_width(s));
    format!("{}{}", " ".repeat(gap), s)
}

/// Centers a string within `width` columns; a leftover column goes right.
pub fn pad_center(s: &str, width: usize) -> String {
    let gap = width.saturating_sub(display_width(s));
    let left = gap / 2;
    format!("{}{}{}", " ".repeat(left), s, " ".repeat(gap - left))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_respects_wide_glyphs() {
        // Each CJK glyph is two columns; the tail needs one.
        assert_eq!(truncate("日本語", 5, "…"), "日本…");
    }

    #[test]
    fn truncate_is_noop_when_it_fits() {
        assert_eq!(truncate("abc", 3, "…"), "abc");
    }

    #[test]
    fn padding_reaches_exact_width() {
        assert_eq!(pad_right("ab", 5), "ab   ");
        assert_eq!(pad_left("ab", 5), "   ab");
        assert_eq!(pad_center("ab", 5), " ab  ");
        assert_eq!(display_width(&pad_center("日", 5)), 5);
    }
}
