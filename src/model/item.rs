use serde::{Deserialize, Serialize};

/// A single checklist entry. Its position is its index in the owning list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub text: String,
    pub checked: bool,
}

impl Item {
    pub fn new(text: impl Into<String>, checked: bool) -> Self {
        Item {
            text: text.into(),
            checked,
        }
    }

    pub fn unchecked(text: impl Into<String>) -> Self {
        Item::new(text, false)
    }

    pub fn checked(text: impl Into<String>) -> Self {
        Item::new(text, true)
    }
}

/// Where checked items sit relative to unchecked ones
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckedOrder {
    /// Unchecked items first, checked items below them
    #[default]
    Last,
    /// Checked items first, unchecked items below them
    First,
}

impl CheckedOrder {
    /// Sort rank of an item in this order (lower sorts earlier)
    pub fn rank(self, checked: bool) -> u8 {
        match (self, checked) {
            (CheckedOrder::Last, false) | (CheckedOrder::First, true) => 0,
            _ => 1,
        }
    }
}

/// How the list is re-partitioned after an edit
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReconcilePolicy {
    /// Stable sort of the existing list by checked state
    #[default]
    Incremental,
    /// Partition into two buffers and rebuild the list from scratch
    Rebuild,
}

/// How the backing file is rewritten
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteMode {
    /// Write a sibling temp file, then rename it over the target
    #[default]
    Atomic,
    /// Truncate the target and write in place
    Truncate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_orders_groups() {
        assert!(CheckedOrder::Last.rank(false) < CheckedOrder::Last.rank(true));
        assert!(CheckedOrder::First.rank(true) < CheckedOrder::First.rank(false));
    }

    #[test]
    fn enums_deserialize_lowercase() {
        #[derive(Deserialize)]
        struct Probe {
            order: CheckedOrder,
            policy: ReconcilePolicy,
            write: WriteMode,
        }
        let p: Probe =
            toml::from_str("order = \"first\"\npolicy = \"rebuild\"\nwrite = \"truncate\"\n")
                .unwrap();
        assert_eq!(p.order, CheckedOrder::First);
        assert_eq!(p.policy, ReconcilePolicy::Rebuild);
        assert_eq!(p.write, WriteMode::Truncate);
    }
}
