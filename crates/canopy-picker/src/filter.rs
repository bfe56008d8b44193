//! Query-driven narrowing of the sorted item sequence.

use tracing::trace;

use crate::item::{FieldValue, Item};
use crate::schema::{Schema, fields};

/// Narrow `sorted` to the items matching `query`.
///
/// An empty query returns `sorted` unchanged. Otherwise matching is a
/// case-insensitive substring test against each item's label. Every match
/// keeps its sorted position; a matched child whose parent did not itself
/// match gets that parent pulled in from `sorted` and inserted immediately
/// before it, at most once per parent.
///
/// When nothing matches and `allow_custom` is true, the result is exactly one
/// synthesized item: label is the raw query, value is the query with only its
/// first space replaced by `-`, and the custom marker set. The synthesized
/// item joins the canonical collection only when the user selects it.
pub fn filter_items(sorted: &[Item], schema: &Schema, query: &str, allow_custom: bool) -> Vec<Item> {
    if query.is_empty() {
        return sorted.to_vec();
    }

    let needle = query.to_lowercase();
    let mut included: Vec<FieldValue> = Vec::new();
    let mut results: Vec<Item> = Vec::new();

    for item in sorted {
        if schema.label_of(item).to_lowercase().contains(&needle) {
            included.push(schema.value_of(item).clone());
            results.push(item.clone());
        }
    }

    trace!(
        target: "canopy_picker::filter",
        query,
        matches = results.len(),
        "filtered item collection"
    );

    // Pull unmatched parents in front of their first matching child.
    let mut i = 0;
    while i < results.len() {
        let parent = match schema.parent_of(&results[i]) {
            Some(parent) if !included.contains(parent) => parent.clone(),
            _ => {
                i += 1;
                continue;
            }
        };
        // Marked before the lookup so a missing parent is not searched for
        // again on behalf of a later sibling.
        included.push(parent.clone());
        match sorted.iter().find(|x| schema.value_of(x) == &parent) {
            Some(found) => {
                results.insert(i, found.clone());
                i += 2;
            }
            None => i += 1,
        }
    }

    if results.is_empty() && allow_custom {
        let value = query.replacen(' ', "-", 1);
        trace!(
            target: "canopy_picker::filter",
            value,
            "synthesizing custom item for unmatched query"
        );
        results.push(
            Item::default()
                .with_field(schema.value_field(), value)
                .with_field(schema.label_field(), query)
                .with_field(fields::CUSTOM, true),
        );
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sort::sort_items;

    fn labels(items: &[Item], schema: &Schema) -> Vec<String> {
        items.iter().map(|i| schema.label_of(i).to_string()).collect()
    }

    fn grocery() -> Vec<Item> {
        vec![
            Item::new("fruits", "Fruits"),
            Item::new("apple", "Apple").with_parent("fruits"),
            Item::new("pineapple", "Pineapple").with_parent("fruits"),
            Item::new("veg", "Vegetables"),
            Item::new("carrot", "Carrot").with_parent("veg"),
        ]
    }

    #[test]
    fn test_empty_query_passes_through() {
        let schema = Schema::default();
        let sorted = sort_items(&grocery(), &schema);
        let filtered = filter_items(&sorted, &schema, "", true);
        assert_eq!(filtered, sorted);
    }

    #[test]
    fn test_match_is_case_insensitive_substring() {
        let schema = Schema::default();
        let sorted = sort_items(&grocery(), &schema);
        let filtered = filter_items(&sorted, &schema, "CARR", false);
        assert_eq!(labels(&filtered, &schema), ["Vegetables", "Carrot"]);
    }

    #[test]
    fn test_unmatched_parent_inserted_before_child_once() {
        let schema = Schema::default();
        let sorted = sort_items(&grocery(), &schema);
        // Both children of Fruits match; the parent must appear exactly once,
        // ahead of the first matching child.
        let filtered = filter_items(&sorted, &schema, "apple", false);
        assert_eq!(labels(&filtered, &schema), ["Fruits", "Pineapple", "Apple"]);
    }

    #[test]
    fn test_matched_parent_not_duplicated() {
        let schema = Schema::default();
        let items = vec![
            Item::new("fruits", "Fresh fruits"),
            Item::new("apple", "Fresh apple").with_parent("fruits"),
        ];
        let sorted = sort_items(&items, &schema);
        let filtered = filter_items(&sorted, &schema, "fresh", false);
        assert_eq!(labels(&filtered, &schema), ["Fresh fruits", "Fresh apple"]);
    }

    #[test]
    fn test_missing_parent_searched_for_only_once() {
        let schema = Schema::default();
        // Children placed manually so their parent reference dangles.
        let sorted = vec![
            Item::new("a", "Match one").with_field("parent", "ghost"),
            Item::new("b", "Match two").with_field("parent", "ghost"),
        ];
        let filtered = filter_items(&sorted, &schema, "match", false);
        assert_eq!(labels(&filtered, &schema), ["Match one", "Match two"]);
    }

    #[test]
    fn test_custom_item_synthesized_with_first_space_replaced() {
        let schema = Schema::default();
        let sorted = sort_items(&grocery(), &schema);
        let filtered = filter_items(&sorted, &schema, "New Tag", true);

        assert_eq!(filtered.len(), 1);
        let custom = &filtered[0];
        assert_eq!(schema.label_of(custom), "New Tag");
        assert_eq!(schema.value_of(custom), &FieldValue::Str("New-Tag".into()));
        assert!(schema.is_custom(custom));
    }

    #[test]
    fn test_only_first_space_replaced_in_custom_value() {
        let schema = Schema::default();
        let filtered = filter_items(&[], &schema, "a b c", true);
        assert_eq!(
            schema.value_of(&filtered[0]),
            &FieldValue::Str("a-b c".into())
        );
    }

    #[test]
    fn test_no_match_without_custom_yields_empty() {
        let schema = Schema::default();
        let sorted = sort_items(&grocery(), &schema);
        let filtered = filter_items(&sorted, &schema, "zzz", false);
        assert!(filtered.is_empty());
    }
}
