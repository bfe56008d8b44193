//! Hierarchical reordering of the item collection.
//!
//! Flat list widgets render trees by ordering: a child row drawn (and
//! indented) immediately after its parent reads as nested. [`sort_items`]
//! produces that ordering from a flat collection plus parent references.

use tracing::trace;

use crate::item::Item;
use crate::schema::Schema;

/// Reorder `items` so each child sits immediately after its anchor.
///
/// Roots (items with no parent reference) keep their original relative order.
/// Each child, taken in original order, is inserted immediately after the
/// first item already in the output whose value equals the child's parent or
/// whose own parent equals it (the parent item itself, or an already placed
/// sibling). Because the parent item precedes its placed children, later
/// children splice directly after the parent, ahead of earlier siblings.
///
/// A child whose parent reference matches nothing in the output is dropped
/// from the sorted view. The input is never mutated; the same input always
/// yields the same output.
pub fn sort_items(items: &[Item], schema: &Schema) -> Vec<Item> {
    let mut sorted: Vec<Item> = Vec::with_capacity(items.len());
    let mut children: Vec<(&Item, &crate::item::FieldValue)> = Vec::new();

    for item in items {
        match schema.parent_of(item) {
            Some(parent) => children.push((item, parent)),
            None => sorted.push(item.clone()),
        }
    }

    for (child, parent) in children {
        let anchor = sorted.iter().position(|placed| {
            schema.parent_of(placed) == Some(parent) || schema.value_of(placed) == parent
        });

        match anchor {
            Some(index) => sorted.insert(index + 1, child.clone()),
            None => {
                trace!(
                    target: "canopy_picker::sort",
                    parent = %parent,
                    "dropping child with unresolvable parent"
                );
            }
        }
    }

    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::FieldValue;

    fn labels(items: &[Item], schema: &Schema) -> Vec<String> {
        items.iter().map(|i| schema.label_of(i).to_string()).collect()
    }

    #[test]
    fn test_roots_keep_original_order() {
        let schema = Schema::default();
        let items = vec![
            Item::new("b", "Banana"),
            Item::new("a", "Apple"),
            Item::new("c", "Cherry"),
        ];
        let sorted = sort_items(&items, &schema);
        assert_eq!(labels(&sorted, &schema), ["Banana", "Apple", "Cherry"]);
    }

    #[test]
    fn test_child_placed_after_parent() {
        let schema = Schema::default();
        let items = vec![
            Item::new(1, "Fruit"),
            Item::new(2, "Apple").with_parent(1),
            Item::new(3, "Veg"),
        ];
        let sorted = sort_items(&items, &schema);
        assert_eq!(labels(&sorted, &schema), ["Fruit", "Apple", "Veg"]);
    }

    #[test]
    fn test_later_children_splice_directly_after_parent() {
        let schema = Schema::default();
        let items = vec![
            Item::new(1, "Fruit"),
            Item::new(2, "Apple").with_parent(1),
            Item::new(3, "Banana").with_parent(1),
        ];
        let sorted = sort_items(&items, &schema);
        // The parent is always the first anchor, so each new child lands
        // directly behind it, ahead of earlier siblings.
        assert_eq!(labels(&sorted, &schema), ["Fruit", "Banana", "Apple"]);
    }

    #[test]
    fn test_orphan_child_is_dropped() {
        let schema = Schema::default();
        let items = vec![
            Item::new(1, "Fruit"),
            Item::new(2, "Ghost").with_parent(99),
        ];
        let sorted = sort_items(&items, &schema);
        assert_eq!(labels(&sorted, &schema), ["Fruit"]);
    }

    #[test]
    fn test_child_preceding_parent_in_input_still_resolves() {
        let schema = Schema::default();
        let items = vec![
            Item::new(2, "Apple").with_parent(1),
            Item::new(1, "Fruit"),
        ];
        let sorted = sort_items(&items, &schema);
        // Roots are placed first, so the child still finds its anchor.
        assert_eq!(labels(&sorted, &schema), ["Fruit", "Apple"]);
    }

    #[test]
    fn test_deterministic_and_input_untouched() {
        let schema = Schema::default();
        let items = vec![
            Item::new(1, "Fruit"),
            Item::new(3, "Veg"),
            Item::new(2, "Apple").with_parent(1),
            Item::new(4, "Carrot").with_parent(3),
        ];
        let first = sort_items(&items, &schema);
        let second = sort_items(&items, &schema);
        assert_eq!(first, second);
        assert_eq!(items.len(), 4);
        assert_eq!(schema.value_of(&items[1]), &FieldValue::Int(3));
    }

    #[test]
    fn test_no_item_appears_twice() {
        let schema = Schema::default();
        let items = vec![
            Item::new(1, "Fruit"),
            Item::new(2, "Apple").with_parent(1),
            Item::new(3, "Banana").with_parent(1),
            Item::new(4, "Veg"),
            Item::new(5, "Carrot").with_parent(4),
        ];
        let sorted = sort_items(&items, &schema);
        assert_eq!(sorted.len(), items.len());
        for item in &items {
            let value = schema.value_of(item);
            let count = sorted.iter().filter(|s| schema.value_of(s) == value).count();
            assert_eq!(count, 1);
        }
    }
}
