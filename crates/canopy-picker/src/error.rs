//! Error types for the picker engine.

use thiserror::Error;

/// Errors raised while resolving a field schema.
///
/// A schema maps the engine's item roles (value, label, parent, and so on)
/// onto field names in the host's item records. Overriding two roles onto the
/// same field name makes item data ambiguous, so resolution rejects it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Two distinct roles resolved to the same field name.
    #[error("schema roles `{first}` and `{second}` both map to field `{field}`")]
    RoleCollision {
        /// Name of the first role in the colliding pair.
        first: &'static str,
        /// Name of the second role in the colliding pair.
        second: &'static str,
        /// The field name both roles mapped to.
        field: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_collision_display() {
        let err = SchemaError::RoleCollision {
            first: "value",
            second: "label",
            field: "id".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "schema roles `value` and `label` both map to field `id`"
        );
    }
}
