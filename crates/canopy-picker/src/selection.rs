//! Selection state: the externally owned value and its resolved-item cache.
//!
//! The selected value lives with the caller conceptually; the engine mirrors
//! it in a [`SelectionValue`] and keeps a [`ResolvedSelection`] cache of the
//! full item records behind it, so the trigger label and selection chips can
//! render without re-scanning the collection. Two independent reconciliation
//! entry points keep the cache honest, and the toggle/removal mutators update
//! value and cache together in one step.

use tracing::{debug, trace};

use crate::item::{FieldValue, Item};
use crate::schema::Schema;

/// The selected value(s) of one picker instance.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionValue {
    /// Single-select mode: at most one value.
    Single(Option<FieldValue>),
    /// Multi-select mode: a sequence of values with set semantics.
    Multiple(Vec<FieldValue>),
}

impl SelectionValue {
    /// An empty single-select value.
    pub fn single() -> Self {
        Self::Single(None)
    }

    /// An empty multi-select value.
    pub fn multiple() -> Self {
        Self::Multiple(Vec::new())
    }

    /// Whether no value is selected.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(v) => v.is_none(),
            Self::Multiple(v) => v.is_empty(),
        }
    }

    /// Number of selected values. Duplicates in multi-select mode count.
    pub fn len(&self) -> usize {
        match self {
            Self::Single(None) => 0,
            Self::Single(Some(_)) => 1,
            Self::Multiple(v) => v.len(),
        }
    }

    /// Whether `value` is among the selected values.
    pub fn contains(&self, value: &FieldValue) -> bool {
        match self {
            Self::Single(v) => v.as_ref() == Some(value),
            Self::Multiple(v) => v.contains(value),
        }
    }

    /// The multi-select values with duplicates collapsed, first occurrence
    /// kept. Single-select yields zero or one value.
    pub fn deduplicated(&self) -> Vec<FieldValue> {
        match self {
            Self::Single(None) => Vec::new(),
            Self::Single(Some(v)) => vec![v.clone()],
            Self::Multiple(values) => {
                let mut unique: Vec<FieldValue> = Vec::with_capacity(values.len());
                for value in values {
                    if !unique.contains(value) {
                        unique.push(value.clone());
                    }
                }
                unique
            }
        }
    }
}

/// Outcome of a selection toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The item's value was added (or, single-select, became the value).
    Selected,
    /// The item's value was removed.
    Deselected,
    /// Removal refused: the selection is already at its minimum size.
    RefusedMin,
    /// Addition refused: the selection is already at its maximum size.
    RefusedMax,
}

impl ToggleOutcome {
    /// Whether the toggle changed any state.
    pub fn changed(&self) -> bool {
        matches!(self, Self::Selected | Self::Deselected)
    }
}

/// The resolved-item cache mirroring a [`SelectionValue`].
///
/// Entries hold full item records so display survives the selected items
/// momentarily vanishing from the collection. An entry whose value no longer
/// resolves keeps its stale fields until the value is deselected or resolves
/// again.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedSelection {
    entries: Vec<Item>,
}

impl ResolvedSelection {
    /// The cached entries, in selection order.
    pub fn entries(&self) -> &[Item] {
        &self.entries
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The resolved value of each cached entry.
    pub fn values(&self, schema: &Schema) -> Vec<FieldValue> {
        self.entries.iter().map(|e| schema.value_of(e).clone()).collect()
    }

    /// Reconcile the cache after the item collection changed.
    ///
    /// Each entry is looked up by value in the new collection; fresh fields
    /// win over stale ones when a match exists. Entries that no longer
    /// resolve are kept unchanged. Idempotent for fixed inputs.
    pub fn sync_items(&mut self, items: &[Item], schema: &Schema) {
        for entry in &mut self.entries {
            let value = schema.value_of(entry).clone();
            if let Some(fresh) = items.iter().find(|i| schema.value_of(i) == &value) {
                entry.merge_from(fresh);
            }
        }
        trace!(
            target: "canopy_picker::selection",
            entries = self.entries.len(),
            "reconciled cache against new item collection"
        );
    }

    /// Reconcile the cache after the external value changed.
    ///
    /// Single-select: the cache becomes the one resolvable item, or empty.
    /// Multi-select: the value is deduplicated, entries for departed values
    /// are dropped, and unrepresented values are resolved against `items`
    /// and appended (unresolvable ones are skipped until a matching item
    /// appears). Idempotent for fixed inputs.
    pub fn sync_value(&mut self, value: &SelectionValue, items: &[Item], schema: &Schema) {
        match value {
            SelectionValue::Single(None) => self.entries.clear(),
            SelectionValue::Single(Some(v)) => {
                self.entries = items
                    .iter()
                    .find(|i| schema.value_of(i) == v)
                    .cloned()
                    .into_iter()
                    .collect();
            }
            SelectionValue::Multiple(_) => {
                let wanted = value.deduplicated();
                self.entries.retain(|e| wanted.contains(schema.value_of(e)));
                for v in &wanted {
                    if self.entries.iter().any(|e| schema.value_of(e) == v) {
                        continue;
                    }
                    if let Some(item) = items.iter().find(|i| schema.value_of(i) == v) {
                        self.entries.push(item.clone());
                    }
                }
            }
        }
        trace!(
            target: "canopy_picker::selection",
            entries = self.entries.len(),
            "reconciled cache against selection value"
        );
    }
}

/// Toggle `item` in the selection.
///
/// Value and cache update together; a refused toggle leaves both untouched.
/// Single-select replaces the value unconditionally. Multi-select removes an
/// already selected value (refused at `min` entries) or appends a new one
/// (refused at `max` entries).
pub fn toggle_item(
    value: &mut SelectionValue,
    cache: &mut ResolvedSelection,
    item: &Item,
    schema: &Schema,
    min: Option<usize>,
    max: Option<usize>,
) -> ToggleOutcome {
    let item_value = schema.value_of(item).clone();

    match value {
        SelectionValue::Single(current) => {
            *current = Some(item_value);
            cache.entries = vec![item.clone()];
            ToggleOutcome::Selected
        }
        SelectionValue::Multiple(values) => {
            if values.contains(&item_value) {
                if min.is_some_and(|min| values.len() <= min) {
                    debug!(
                        target: "canopy_picker::selection",
                        len = values.len(),
                        "removal refused at minimum selection size"
                    );
                    return ToggleOutcome::RefusedMin;
                }
                values.retain(|v| v != &item_value);
                cache.entries.retain(|e| schema.value_of(e) != &item_value);
                ToggleOutcome::Deselected
            } else {
                if max.is_some_and(|max| values.len() >= max) {
                    debug!(
                        target: "canopy_picker::selection",
                        len = values.len(),
                        "addition refused at maximum selection size"
                    );
                    return ToggleOutcome::RefusedMax;
                }
                values.push(item_value);
                cache.entries.push(item.clone());
                ToggleOutcome::Selected
            }
        }
    }
}

/// Remove `target` from a multi-select selection by value alone.
///
/// Used by the "unpick" action on a selection chip. Excises the first
/// matching value and cache entry without an item lookup; refused at `min`
/// entries. Single-select selections are untouched. Returns whether state
/// changed.
pub fn remove_value(
    value: &mut SelectionValue,
    cache: &mut ResolvedSelection,
    target: &FieldValue,
    schema: &Schema,
    min: Option<usize>,
) -> bool {
    let SelectionValue::Multiple(values) = value else {
        return false;
    };
    if min.is_some_and(|min| values.len() <= min) {
        debug!(
            target: "canopy_picker::selection",
            len = values.len(),
            "badge removal refused at minimum selection size"
        );
        return false;
    }
    let Some(index) = values.iter().position(|v| v == target) else {
        return false;
    };
    values.remove(index);
    if let Some(entry) = cache.entries.iter().position(|e| schema.value_of(e) == target) {
        cache.entries.remove(entry);
    }
    true
}
