//! # Field System
//!
//! Solids are addressed by field name rather than by Rust type, so that one
//! condition can be run across a heterogeneous container. This module provides:
//!
//! - **Values**: [`FieldValue`], the runtime form of a field (text or number)
//! - **Specifications**: the [`FIELDS`] registry naming every field and the
//!   variants that carry it
//! - **Conditions**: [`Condition`], the `(field, operator, literal)` predicate
//!   used for removal
//!
//! ## Fields
//!
//! | Field | Kind | Carried by |
//! |-------|------|------------|
//! | `owner` | Text | all |
//! | `density` | Number | all |
//! | `radius` | Number | Sphere, Cylinder |
//! | `a`, `b`, `c` | Number | Box |
//! | `x`, `y`, `z`, `height` | Number | Cylinder |
//!
//! ## Usage
//!
//! ```ignore
//! let condition = Condition::new("density", ">", "1,5");
//! if condition.matches(&solid) { ... }
//! ```

mod filter;
mod spec;
mod value;

pub use filter::{parse_number, CompareOp, Condition};
pub use spec::{get_spec, FieldKind, FieldSpec, FIELDS, OWNER};
pub use value::FieldValue;
