//! The picker engine facade.
//!
//! [`PickerState`] owns one picker instance's entire state: the item
//! collection, the selection value and its resolved cache, the search text,
//! the open flag, and the placement resolver. Presentation layers read the
//! derived views ([`sorted_items`](PickerState::sorted_items),
//! [`filtered_items`](PickerState::filtered_items),
//! [`display_label`](PickerState::display_label)) and drive mutations through
//! the methods here; [`PickerSignals`] reports every observable change.
//!
//! All transitions run synchronously to completion on the calling thread.
//! The sole asynchronous edge is viewport measurement for auto placement,
//! handled through [`MeasureRequest`] tokens (see [`crate::direction`]).

use tracing::debug;

use canopy_picker_core::Signal;

use crate::direction::{
    DirectionResolver, DropdownDirection, MeasureRequest, ResolvedDirection, ViewportMeasurement,
};
use crate::error::SchemaError;
use crate::filter::filter_items;
use crate::i18n::{self, TranslationKey, TranslationOverrides};
use crate::item::{FieldValue, IconRef, Item};
use crate::schema::{Schema, SchemaOverrides};
use crate::selection::{self, ResolvedSelection, SelectionValue, ToggleOutcome};
use crate::sort::sort_items;

/// Static configuration for one picker instance.
///
/// Built with the `with_*` methods; every knob has a sensible default.
/// Changing configuration on a live picker means constructing a new
/// [`PickerState`].
#[derive(Debug, Clone)]
pub struct PickerConfig {
    /// Multi-select mode.
    pub multiple: bool,
    /// Close the picker after a single-select pick.
    pub close_after_selecting: bool,
    /// Synthesize a selectable item from an unmatched search query.
    pub allow_custom_item: bool,
    /// Whether the query text narrows the list locally. Hosts doing remote
    /// search disable this and filter upstream.
    pub local_search: bool,
    /// Minimum selection size; removals below it are refused. Multi only.
    pub min: Option<usize>,
    /// Maximum selection size; additions beyond it are refused. Multi only.
    pub max: Option<usize>,
    /// Maximum rendered list height, used by auto placement.
    pub max_height: f32,
    /// Extra clearance required below the trigger in auto placement.
    pub bottom_offset: f32,
    /// Placement mode.
    pub direction: DropdownDirection,
    /// ISO 639-1 language code for fixed UI strings.
    pub language: String,
    /// Fixed-string overrides, beating the language table.
    pub translation: TranslationOverrides,
    /// Whether parent-less category rows may themselves be picked.
    pub category_selectable: bool,
    /// Field-name overrides for the item schema.
    pub schema: SchemaOverrides,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            multiple: false,
            close_after_selecting: true,
            allow_custom_item: false,
            local_search: true,
            min: None,
            max: None,
            max_height: 200.0,
            bottom_offset: 0.0,
            direction: DropdownDirection::Default,
            language: "en".to_string(),
            translation: TranslationOverrides::default(),
            category_selectable: true,
            schema: SchemaOverrides::default(),
        }
    }
}

impl PickerConfig {
    /// Enable multi-select mode.
    pub fn with_multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    /// Set whether a single-select pick closes the picker.
    pub fn with_close_after_selecting(mut self, close: bool) -> Self {
        self.close_after_selecting = close;
        self
    }

    /// Allow custom items synthesized from unmatched queries.
    pub fn with_allow_custom_item(mut self, allow: bool) -> Self {
        self.allow_custom_item = allow;
        self
    }

    /// Disable local narrowing of the list by the query text.
    pub fn with_local_search(mut self, local: bool) -> Self {
        self.local_search = local;
        self
    }

    /// Set the minimum selection size.
    pub fn with_min(mut self, min: usize) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the maximum selection size.
    pub fn with_max(mut self, max: usize) -> Self {
        self.max = Some(max);
        self
    }

    /// Set the maximum rendered list height.
    pub fn with_max_height(mut self, height: f32) -> Self {
        self.max_height = height;
        self
    }

    /// Set the extra clearance required below the trigger.
    pub fn with_bottom_offset(mut self, offset: f32) -> Self {
        self.bottom_offset = offset;
        self
    }

    /// Set the placement mode.
    pub fn with_direction(mut self, direction: DropdownDirection) -> Self {
        self.direction = direction;
        self
    }

    /// Set the language for fixed UI strings.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set fixed-string overrides.
    pub fn with_translation(mut self, translation: TranslationOverrides) -> Self {
        self.translation = translation;
        self
    }

    /// Set whether category rows may be picked.
    pub fn with_category_selectable(mut self, selectable: bool) -> Self {
        self.category_selectable = selectable;
        self
    }

    /// Set field-name overrides for the item schema.
    pub fn with_schema(mut self, schema: SchemaOverrides) -> Self {
        self.schema = schema;
        self
    }
}

/// Signals emitted by a [`PickerState`].
#[derive(Default)]
pub struct PickerSignals {
    /// The selection value changed. Carries the new value, emitted after the
    /// resolved cache is reconciled.
    pub value_changed: Signal<SelectionValue>,
    /// The user-visible search text changed.
    pub search_text_changed: Signal<String>,
    /// The picker opened or closed.
    pub open_changed: Signal<bool>,
    /// The item collection changed from inside the engine, which happens
    /// when a custom item is committed.
    pub items_changed: Signal<()>,
}

/// The state engine behind one dropdown picker.
pub struct PickerState {
    config: PickerConfig,
    schema: Schema,
    items: Vec<Item>,
    sorted: Vec<Item>,
    value: SelectionValue,
    cache: ResolvedSelection,
    search_text: String,
    open: bool,
    direction: DirectionResolver,
    signals: PickerSignals,
}

impl PickerState {
    /// Create an engine for `config`.
    ///
    /// Fails only when the schema overrides map two roles onto one field.
    pub fn new(config: PickerConfig) -> Result<Self, SchemaError> {
        let schema = Schema::resolve(&config.schema);
        schema.validate()?;
        let value = if config.multiple {
            SelectionValue::multiple()
        } else {
            SelectionValue::single()
        };
        let direction =
            DirectionResolver::new(config.direction, config.max_height, config.bottom_offset);
        Ok(Self {
            config,
            schema,
            items: Vec::new(),
            sorted: Vec::new(),
            value,
            cache: ResolvedSelection::default(),
            search_text: String::new(),
            open: false,
            direction,
            signals: PickerSignals::default(),
        })
    }

    /// The resolved field schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// The active configuration.
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// The engine's signals, for connecting observers.
    pub fn signals(&self) -> &PickerSignals {
        &self.signals
    }

    /// Replace the item collection.
    ///
    /// Resorts the derived view and refreshes the fields of every cached
    /// selection entry that resolves in the new collection; entries that no
    /// longer resolve keep their stale fields.
    pub fn set_items(&mut self, items: Vec<Item>) {
        self.items = items;
        self.sorted = sort_items(&self.items, &self.schema);
        self.cache.sync_items(&self.items, &self.schema);
    }

    /// Replace the selection value.
    ///
    /// Reconciles the resolved cache, then reports the new value through
    /// [`PickerSignals::value_changed`].
    pub fn set_value(&mut self, value: SelectionValue) {
        self.value = value;
        self.cache.sync_value(&self.value, &self.items, &self.schema);
        self.signals.value_changed.emit(self.value.clone());
    }

    /// The current selection value.
    pub fn value(&self) -> &SelectionValue {
        &self.value
    }

    /// The hierarchically ordered item collection.
    pub fn sorted_items(&self) -> &[Item] {
        &self.sorted
    }

    /// The sorted collection narrowed by the current search text.
    ///
    /// With local search disabled the query never narrows the list; hosts
    /// filtering remotely feed results back through
    /// [`set_items`](Self::set_items).
    pub fn filtered_items(&self) -> Vec<Item> {
        if !self.config.local_search {
            return self.sorted.clone();
        }
        filter_items(
            &self.sorted,
            &self.schema,
            &self.search_text,
            self.config.allow_custom_item,
        )
    }

    /// The resolved records behind the current selection, in pick order.
    pub fn selected_items(&self) -> &[Item] {
        self.cache.entries()
    }

    /// Whether nothing is effectively selected.
    ///
    /// True when the value is empty or when no selected value currently
    /// resolves to an item.
    pub fn is_empty_selection(&self) -> bool {
        self.value.is_empty() || self.cache.is_empty()
    }

    /// The single-select resolved item, if any.
    pub fn selected_item(&self) -> Option<&Item> {
        if self.config.multiple {
            return None;
        }
        self.cache.entries().first()
    }

    /// The selected item's icon, for the trigger. Single-select only.
    pub fn selected_icon(&self) -> Option<&IconRef> {
        self.selected_item().and_then(|i| self.schema.icon_of(i))
    }

    /// The text shown on the trigger.
    ///
    /// Empty selection shows the placeholder. Single-select shows the
    /// selected label (falling back to the rendered value when the label is
    /// blank); multi-select shows the localized count summary.
    pub fn display_label(&self) -> String {
        if self.is_empty_selection() {
            return self.placeholder().to_string();
        }
        if self.config.multiple {
            return i18n::selected_count_text(
                self.cache.len(),
                &self.config.language,
                &self.config.translation,
            );
        }
        match self.cache.entries().first() {
            Some(entry) => {
                let label = self.schema.label_of(entry);
                if label.is_empty() {
                    self.schema.value_of(entry).to_string()
                } else {
                    label.to_string()
                }
            }
            None => self.placeholder().to_string(),
        }
    }

    /// The trigger placeholder text.
    pub fn placeholder(&self) -> &str {
        i18n::translate(
            TranslationKey::Placeholder,
            &self.config.language,
            &self.config.translation,
        )
    }

    /// The search input hint text.
    pub fn search_placeholder(&self) -> &str {
        i18n::translate(
            TranslationKey::SearchPlaceholder,
            &self.config.language,
            &self.config.translation,
        )
    }

    /// The empty-state message for an unmatched search.
    pub fn empty_text(&self) -> &str {
        i18n::translate(
            TranslationKey::NothingToShow,
            &self.config.language,
            &self.config.translation,
        )
    }

    /// The current search text.
    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    /// Update the search text from user input.
    pub fn set_search_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.search_text {
            return;
        }
        self.search_text = text.clone();
        self.signals.search_text_changed.emit(text);
    }

    /// Whether `item` may be picked under the current policy hints.
    ///
    /// Advisory for presentation; [`toggle_item`](Self::toggle_item) does
    /// not enforce it.
    pub fn is_item_selectable(&self, item: &Item) -> bool {
        if self.schema.disabled_of(item) {
            return false;
        }
        if !self.schema.selectable_of(item) {
            return false;
        }
        self.config.category_selectable || self.schema.has_parent(item)
    }

    /// Toggle `item` in the selection.
    ///
    /// A custom item (synthesized by the search filter) is first committed to
    /// the item collection, announced through
    /// [`PickerSignals::items_changed`]. The value and resolved cache update
    /// together; [`PickerSignals::value_changed`] fires only when state
    /// actually changed, never on a refused toggle. A single-select pick
    /// closes the picker when configured to, clearing pending search text.
    pub fn toggle_item(&mut self, item: &Item) -> ToggleOutcome {
        if self.schema.is_custom(item) {
            debug!(
                target: "canopy_picker::picker",
                value = %self.schema.value_of(item),
                "committing custom item to the collection"
            );
            self.items.push(item.clone());
            self.sorted = sort_items(&self.items, &self.schema);
            self.signals.items_changed.emit(());
        }

        let outcome = selection::toggle_item(
            &mut self.value,
            &mut self.cache,
            item,
            &self.schema,
            self.config.min,
            self.config.max,
        );

        if outcome.changed() {
            self.signals.value_changed.emit(self.value.clone());
        }

        if !self.config.multiple
            && self.config.close_after_selecting
            && outcome == ToggleOutcome::Selected
        {
            self.close();
        }

        outcome
    }

    /// Remove `target` from a multi-select selection by value alone.
    ///
    /// The "unpick" action on a selection chip. Returns whether state
    /// changed; refusals at the minimum selection size leave everything
    /// untouched.
    pub fn remove_value(&mut self, target: &FieldValue) -> bool {
        let changed = selection::remove_value(
            &mut self.value,
            &mut self.cache,
            target,
            &self.schema,
            self.config.min,
        );
        if changed {
            self.signals.value_changed.emit(self.value.clone());
        }
        changed
    }

    /// Whether the dropdown is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the dropdown.
    ///
    /// Starts a new placement cycle; in auto mode the returned request must
    /// be answered with [`complete_measurement`](Self::complete_measurement)
    /// or [`fail_measurement`](Self::fail_measurement). Already open is a
    /// no-op.
    pub fn open(&mut self) -> Option<MeasureRequest> {
        if self.open {
            return None;
        }
        self.open = true;
        self.signals.open_changed.emit(true);
        self.direction.begin_open()
    }

    /// Close the dropdown, discarding pending search text.
    ///
    /// The search text reset is internal state cleanup and does not fire
    /// [`PickerSignals::search_text_changed`]. Already closed is a no-op.
    pub fn close(&mut self) {
        if !self.open {
            return;
        }
        self.open = false;
        self.search_text.clear();
        self.signals.open_changed.emit(false);
    }

    /// Open if closed, close if open. Returns a measurement request when a
    /// new auto-placement cycle started.
    pub fn toggle_open(&mut self) -> Option<MeasureRequest> {
        if self.open {
            self.close();
            None
        } else {
            self.open()
        }
    }

    /// Apply a finished viewport measurement for the given request.
    pub fn complete_measurement(&mut self, request: MeasureRequest, m: ViewportMeasurement) {
        self.direction.complete(request, m);
    }

    /// Record a failed viewport measurement for the given request.
    pub fn fail_measurement(&mut self, request: MeasureRequest) {
        self.direction.fail(request);
    }

    /// The placement for the current open cycle.
    pub fn direction(&self) -> ResolvedDirection {
        self.direction.direction()
    }
}
