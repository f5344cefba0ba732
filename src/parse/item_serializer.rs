use crate::model::item::Item;

/// Line prefix written for a checked item
pub const CHECKED_PREFIX: &str = " x ";
/// Line prefix written for an unchecked item
pub const UNCHECKED_PREFIX: &str = " - ";

/// Serialize items in list order, one per line. Items with empty text are skipped.
/// Text is written raw; callers keep line breaks out of item text.
pub fn serialize_items(items: &[Item]) -> String {
    let mut out = String::new();
    for item in items {
        if item.text.is_empty() {
            continue;
        }
        out.push_str(if item.checked {
            CHECKED_PREFIX
        } else {
            UNCHECKED_PREFIX
        });
        out.push_str(&item.text);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::item::CheckedOrder;
    use crate::parse::item_parser::parse_items;
    use pretty_assertions::assert_eq;

    #[test]
    fn writes_markers_in_list_order() {
        let items = vec![
            Item::unchecked("call the plumber"),
            Item::checked("bought milk"),
        ];
        assert_eq!(
            serialize_items(&items),
            " - call the plumber\n x bought milk\n"
        );
    }

    #[test]
    fn skips_empty_text() {
        let items = vec![Item::unchecked(""), Item::checked("kept")];
        assert_eq!(serialize_items(&items), " x kept\n");
    }

    #[test]
    fn empty_list_is_empty_file() {
        assert_eq!(serialize_items(&[]), "");
    }

    #[test]
    fn round_trip_reconciled_list() {
        let items = vec![
            Item::unchecked("first"),
            Item::unchecked("second one"),
            Item::checked("done, with a comma"),
            Item::checked("x marks"),
        ];
        let parsed = parse_items(&serialize_items(&items), CheckedOrder::Last);
        assert_eq!(parsed.items, items);
    }

    #[test]
    fn stable_across_repeated_serialization() {
        let items = vec![Item::unchecked("a"), Item::checked("b")];
        let once = serialize_items(&items);
        let reparsed = parse_items(&once, CheckedOrder::Last).items;
        assert_eq!(serialize_items(&reparsed), once);
    }
}
