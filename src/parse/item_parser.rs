use crate::model::item::{CheckedOrder, Item};

/// Marker that flags a line as checked. Any other leading character is unchecked.
pub const CHECKED_MARKER: char = 'x';

/// Result of parsing a checklist file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedItems {
    /// Items laid out in list order (groups per [`CheckedOrder`])
    pub items: Vec<Item>,
    /// Non-blank source lines that carried a marker but no text
    pub dropped: Vec<String>,
}

/// Parse a checklist file.
///
/// Each non-blank line is trimmed and its first character read as the marker.
/// The rest of the line, trimmed again, is the item text. Checked and unchecked
/// lines are collected separately so that file order survives within each
/// group, then the groups are laid out according to `order`.
pub fn parse_items(source: &str, order: CheckedOrder) -> ParsedItems {
    let mut checked = Vec::new();
    let mut unchecked = Vec::new();
    let mut dropped = Vec::new();

    for raw in source.lines() {
        let line = raw.trim();
        let mut chars = line.chars();
        let Some(marker) = chars.next() else {
            continue;
        };

        let text = chars.as_str().trim();
        if text.is_empty() {
            dropped.push(raw.to_string());
            continue;
        }

        if marker == CHECKED_MARKER {
            checked.push(Item::checked(text));
        } else {
            unchecked.push(Item::unchecked(text));
        }
    }

    let items = match order {
        CheckedOrder::Last => unchecked.into_iter().chain(checked).collect(),
        CheckedOrder::First => checked.into_iter().chain(unchecked).collect(),
    };

    ParsedItems { items, dropped }
}
