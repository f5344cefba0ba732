use serde::Serialize;

use crate::model::item::Item;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct ItemJson {
    /// 1-based position in the list
    pub index: usize,
    pub text: String,
    pub checked: bool,
}

impl ItemJson {
    pub fn new(index: usize, item: &Item) -> Self {
        ItemJson {
            index: index + 1,
            text: item.text.clone(),
            checked: item.checked,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListJson {
    pub file: String,
    pub items: Vec<ItemJson>,
}

/// Result of a mutating command
#[derive(Debug, Serialize)]
pub struct ChangeJson {
    pub action: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<ItemJson>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed: Option<usize>,
    pub saved: bool,
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// Checkbox shown for an item
pub fn checkbox(checked: bool) -> &'static str {
    if checked { "[x]" } else { "[ ]" }
}

/// One list line: right-aligned number, checkbox, text
pub fn format_item_line(index: usize, item: &Item) -> String {
    format!("{:>3}  {} {}", index + 1, checkbox(item.checked), item.text)
}
