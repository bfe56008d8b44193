//! Canopy Picker - the state engine behind a dropdown picker widget.
//!
//! This crate owns everything about a picker except its pixels: the item
//! collection and its hierarchical ordering, search narrowing, the selection
//! value with its resolved-item cache, open/close state, dropdown placement,
//! and the localized fixed strings. Presentation layers (native views, web
//! bindings, immediate-mode UIs) read the derived views and forward user
//! actions; state changes come back through signals.
//!
//! # Example
//!
//! ```
//! use canopy_picker::{Item, PickerConfig, PickerState};
//!
//! let mut picker = PickerState::new(PickerConfig::default())?;
//! picker.set_items(vec![
//!     Item::new("fruits", "Fruits"),
//!     Item::new("apple", "Apple").with_parent("fruits"),
//! ]);
//!
//! picker.open();
//! let apple = picker.sorted_items()[1].clone();
//! picker.toggle_item(&apple);
//! assert_eq!(picker.display_label(), "Apple");
//! # Ok::<(), canopy_picker::SchemaError>(())
//! ```

pub mod direction;
pub mod error;
pub mod filter;
pub mod i18n;
pub mod item;
pub mod picker;
pub mod schema;
pub mod selection;
pub mod sort;

pub use direction::{
    DirectionResolver, DropdownDirection, MeasureRequest, ResolvedDirection, ViewportMeasurement,
};
pub use error::SchemaError;
pub use filter::filter_items;
pub use i18n::{FALLBACK_LANGUAGE, TranslationKey, TranslationOverrides};
pub use item::{FieldValue, IconRef, Item};
pub use picker::{PickerConfig, PickerSignals, PickerState};
pub use schema::{Schema, SchemaOverrides};
pub use selection::{ResolvedSelection, SelectionValue, ToggleOutcome};
pub use sort::sort_items;

pub use canopy_picker_core::{ConnectionGuard, ConnectionId, Signal};
