use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of a string in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…`
/// if anything was cut. Truncation happens on grapheme boundaries so wide
/// characters are never split.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1;
    let mut out = String::new();
    let mut used = 0;
    for g in s.graphemes(true) {
        let w = UnicodeWidthStr::width(g);
        if used + w > budget {
            break;
        }
        used += w;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Byte offset of the grapheme boundary before `at`. None at the start.
pub fn prev_grapheme_boundary(s: &str, at: usize) -> Option<usize> {
    let at = at.min(s.len());
    s[..at].grapheme_indices(true).last().map(|(i, _)| i)
}

/// Byte offset of the grapheme boundary after `at`. None at the end.
pub fn next_grapheme_boundary(s: &str, at: usize) -> Option<usize> {
    if at >= s.len() {
        return None;
    }
    s[at..].graphemes(true).next().map(|g| at + g.len())
}

/// Start of the word to the left of `at` (whitespace-delimited): skip any
/// whitespace run, then the word before it.
pub fn word_boundary_left(s: &str, at: usize) -> usize {
    let at = at.min(s.len());
    let graphemes: Vec<(usize, &str)> = s[..at].grapheme_indices(true).collect();
    let mut i = graphemes.len();
    while i > 0 && graphemes[i - 1].1.trim().is_empty() {
        i -= 1;
    }
    while i > 0 && !graphemes[i - 1].1.trim().is_empty() {
        i -= 1;
    }
    graphemes.get(i).map_or(0, |(b, _)| *b)
}
