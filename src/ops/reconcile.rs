use crate::model::item::{CheckedOrder, Item, ReconcilePolicy};

/// Re-partition `items` so every item of one checked state precedes the other
/// (per `order`). Relative order within each group is kept. Both policies
/// produce the same list.
pub fn reconcile(items: Vec<Item>, policy: ReconcilePolicy, order: CheckedOrder) -> Vec<Item> {
    match policy {
        ReconcilePolicy::Incremental => {
            let mut items = items;
            // sort_by_key is stable
            items.sort_by_key(|item| order.rank(item.checked));
            items
        }
        ReconcilePolicy::Rebuild => {
            let (checked, unchecked): (Vec<Item>, Vec<Item>) =
                items.into_iter().partition(|item| item.checked);
            match order {
                CheckedOrder::Last => unchecked.into_iter().chain(checked).collect(),
                CheckedOrder::First => checked.into_iter().chain(unchecked).collect(),
            }
        }
    }
}

/// Index the item at `index` will occupy after [`reconcile`].
pub fn reconciled_index(items: &[Item], index: usize, order: CheckedOrder) -> usize {
    let rank = order.rank(items[index].checked);
    let same_before = items[..index]
        .iter()
        .filter(|item| order.rank(item.checked) == rank)
        .count();
    if rank == 0 {
        same_before
    } else {
        let leading = items
            .iter()
            .filter(|item| order.rank(item.checked) == 0)
            .count();
        leading + same_before
    }
}
