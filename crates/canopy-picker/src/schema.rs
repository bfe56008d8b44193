//! Field schema resolution.
//!
//! The engine reads items through a [`Schema`]: a mapping from semantic roles
//! (value, label, parent, ...) to the field names that carry them. Hosts with
//! their own record shapes override individual roles; everything else keeps
//! the default names from [`fields`].

use tracing::debug;

use crate::error::SchemaError;
use crate::item::{FieldValue, IconRef, Item};

/// Default field names for each schema role.
pub mod fields {
    /// Unique comparable identifier.
    pub const VALUE: &str = "value";
    /// Display string, also the search-match target.
    pub const LABEL: &str = "label";
    /// Reference to a parent item's value.
    pub const PARENT: &str = "parent";
    /// Opaque renderable reference.
    pub const ICON: &str = "icon";
    /// Interaction policy hint.
    pub const DISABLED: &str = "disabled";
    /// Interaction policy hint.
    pub const SELECTABLE: &str = "selectable";
    /// Marks an item synthesized from free-text search. Fixed name, not a
    /// schema role.
    pub const CUSTOM: &str = "custom";
}

/// Per-instance overrides for schema roles.
///
/// Roles left as `None` keep their default field name. Built with the
/// `with_*` methods:
///
/// ```
/// use canopy_picker::SchemaOverrides;
///
/// let overrides = SchemaOverrides::default()
///     .with_value("id")
///     .with_label("name");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaOverrides {
    value: Option<String>,
    label: Option<String>,
    parent: Option<String>,
    icon: Option<String>,
    disabled: Option<String>,
    selectable: Option<String>,
}

impl SchemaOverrides {
    /// Override the field name for the value role.
    pub fn with_value(mut self, field: impl Into<String>) -> Self {
        self.value = Some(field.into());
        self
    }

    /// Override the field name for the label role.
    pub fn with_label(mut self, field: impl Into<String>) -> Self {
        self.label = Some(field.into());
        self
    }

    /// Override the field name for the parent role.
    pub fn with_parent(mut self, field: impl Into<String>) -> Self {
        self.parent = Some(field.into());
        self
    }

    /// Override the field name for the icon role.
    pub fn with_icon(mut self, field: impl Into<String>) -> Self {
        self.icon = Some(field.into());
        self
    }

    /// Override the field name for the disabled role.
    pub fn with_disabled(mut self, field: impl Into<String>) -> Self {
        self.disabled = Some(field.into());
        self
    }

    /// Override the field name for the selectable role.
    pub fn with_selectable(mut self, field: impl Into<String>) -> Self {
        self.selectable = Some(field.into());
        self
    }
}

/// A resolved role-to-field-name mapping.
///
/// Resolved once per engine instance and never mutated afterwards; changing
/// the schema of a live picker means constructing a new engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    value: String,
    label: String,
    parent: String,
    icon: String,
    disabled: String,
    selectable: String,
}

impl Default for Schema {
    fn default() -> Self {
        Self {
            value: fields::VALUE.to_string(),
            label: fields::LABEL.to_string(),
            parent: fields::PARENT.to_string(),
            icon: fields::ICON.to_string(),
            disabled: fields::DISABLED.to_string(),
            selectable: fields::SELECTABLE.to_string(),
        }
    }
}

impl Schema {
    /// Merge `overrides` over the default field names.
    ///
    /// A pure field-by-field merge with no failure mode; collisions are
    /// caught separately by [`validate`](Self::validate).
    pub fn resolve(overrides: &SchemaOverrides) -> Self {
        let defaults = Self::default();
        Self {
            value: overrides.value.clone().unwrap_or(defaults.value),
            label: overrides.label.clone().unwrap_or(defaults.label),
            parent: overrides.parent.clone().unwrap_or(defaults.parent),
            icon: overrides.icon.clone().unwrap_or(defaults.icon),
            disabled: overrides.disabled.clone().unwrap_or(defaults.disabled),
            selectable: overrides.selectable.clone().unwrap_or(defaults.selectable),
        }
    }

    /// Reject schemas where two roles map to the same field name.
    pub fn validate(&self) -> Result<(), SchemaError> {
        let roles: [(&'static str, &str); 6] = [
            ("value", &self.value),
            ("label", &self.label),
            ("parent", &self.parent),
            ("icon", &self.icon),
            ("disabled", &self.disabled),
            ("selectable", &self.selectable),
        ];
        for (i, (first, field)) in roles.iter().enumerate() {
            for (second, other) in &roles[i + 1..] {
                if field == other {
                    debug!(
                        target: "canopy_picker::schema",
                        first, second, field,
                        "rejecting schema with colliding roles"
                    );
                    return Err(SchemaError::RoleCollision {
                        first,
                        second,
                        field: field.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Field name carrying the value role.
    pub fn value_field(&self) -> &str {
        &self.value
    }

    /// Field name carrying the label role.
    pub fn label_field(&self) -> &str {
        &self.label
    }

    /// Resolved value of `item`, or `Null` when the field is absent.
    pub fn value_of<'a>(&self, item: &'a Item) -> &'a FieldValue {
        static NULL: FieldValue = FieldValue::Null;
        item.field(&self.value).unwrap_or(&NULL)
    }

    /// Resolved label of `item`, empty when the field is absent or not a
    /// string.
    pub fn label_of<'a>(&self, item: &'a Item) -> &'a str {
        item.field(&self.label).and_then(FieldValue::as_str).unwrap_or("")
    }

    /// Resolved parent reference of `item`, if present and non-null.
    pub fn parent_of<'a>(&self, item: &'a Item) -> Option<&'a FieldValue> {
        item.field(&self.parent).filter(|v| !v.is_null())
    }

    /// Whether `item` carries a non-null parent reference.
    pub fn has_parent(&self, item: &Item) -> bool {
        self.parent_of(item).is_some()
    }

    /// Resolved icon of `item`, if present.
    pub fn icon_of<'a>(&self, item: &'a Item) -> Option<&'a IconRef> {
        item.field(&self.icon).and_then(FieldValue::as_icon)
    }

    /// Whether `item` is flagged disabled. Absent means enabled.
    pub fn disabled_of(&self, item: &Item) -> bool {
        item.field(&self.disabled)
            .and_then(FieldValue::as_bool)
            .unwrap_or(false)
    }

    /// Whether `item` may be selected. Absent means selectable.
    pub fn selectable_of(&self, item: &Item) -> bool {
        item.field(&self.selectable)
            .and_then(FieldValue::as_bool)
            .unwrap_or(true)
    }

    /// Whether `item` was synthesized from free-text search.
    pub fn is_custom(&self, item: &Item) -> bool {
        item.field(fields::CUSTOM)
            .and_then(FieldValue::as_bool)
            .unwrap_or(false)
    }
}
