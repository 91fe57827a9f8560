//! Field specifications and registry.
//!
//! This module is the single source of truth for which field names exist
//! and what kind of value they hold. The script dispatcher validates `rem`
//! conditions against it, and [`Condition`](super::Condition) picks text or
//! numeric comparison from it.

/// Name of the only text field.
pub const OWNER: &str = "owner";

/// The kind of value a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Number,
}

/// Specification for a single field.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    /// Lowercase field name as used in conditions
    pub name: &'static str,

    /// The kind of value this field holds
    pub kind: FieldKind,
}

impl FieldSpec {
    const fn new(name: &'static str, kind: FieldKind) -> Self {
        Self { name, kind }
    }
}

/// Registry of all solid fields.
pub const FIELDS: &[FieldSpec] = &[
    FieldSpec::new(OWNER, FieldKind::Text),
    FieldSpec::new("density", FieldKind::Number),
    FieldSpec::new("radius", FieldKind::Number),
    FieldSpec::new("a", FieldKind::Number),
    FieldSpec::new("b", FieldKind::Number),
    FieldSpec::new("c", FieldKind::Number),
    FieldSpec::new("x", FieldKind::Number),
    FieldSpec::new("y", FieldKind::Number),
    FieldSpec::new("z", FieldKind::Number),
    FieldSpec::new("height", FieldKind::Number),
];

/// Look up a field spec by name (case-insensitive).
pub fn get_spec(name: &str) -> Option<&'static FieldSpec> {
    FIELDS.iter().find(|spec| spec.name.eq_ignore_ascii_case(name))
}
