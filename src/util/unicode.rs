use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Cut `s` to at most `max_cells` cells, ending in `…` when anything was cut.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1;
    let mut width = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let gw = display_width(g);
        if width + gw > budget {
            break;
        }
        width += gw;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Start of the grapheme before `offset`, or None at the start.
pub fn prev_grapheme_boundary(s: &str, offset: usize) -> Option<usize> {
    s[..offset].grapheme_indices(true).next_back().map(|(i, _)| i)
}

/// End of the grapheme at `offset`, or None at the end.
pub fn next_grapheme_boundary(s: &str, offset: usize) -> Option<usize> {
    s[offset..]
        .graphemes(true)
        .next()
        .map(|g| offset + g.len())
}

/// Start of the word before `offset`, skipping whitespace first.
pub fn word_start_before(s: &str, offset: usize) -> usize {
    let mut start = offset;
    let mut in_word = false;
    for (i, g) in s[..offset].grapheme_indices(true).rev() {
        let blank = g.chars().all(char::is_whitespace);
        if blank && in_word {
            break;
        }
        in_word |= !blank;
        start = i;
    }
    start
}
