//! Condition filtering.
//!
//! A [`Condition`] is the `(field, operator, literal)` triple behind
//! `rem <field> <op> <value>`. It is built from raw strings and never fails:
//! anything it cannot make sense of (unknown field, unknown operator,
//! unparsable number) simply never matches.

use super::{get_spec, FieldKind, FieldSpec};
use crate::model::Solid;
use std::fmt;
use std::str::FromStr;

/// Comparison operator of a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `>`
    Gt,
    /// `<`
    Lt,
}

impl CompareOp {
    pub const ALL: [CompareOp; 4] = [CompareOp::Eq, CompareOp::Ne, CompareOp::Gt, CompareOp::Lt];

    pub fn symbol(&self) -> &'static str {
        match self {
            CompareOp::Eq => "==",
            CompareOp::Ne => "!=",
            CompareOp::Gt => ">",
            CompareOp::Lt => "<",
        }
    }

    fn compare(&self, lhs: f64, rhs: f64) -> bool {
        match self {
            CompareOp::Eq => lhs == rhs,
            CompareOp::Ne => lhs != rhs,
            CompareOp::Gt => lhs > rhs,
            CompareOp::Lt => lhs < rhs,
        }
    }
}

impl FromStr for CompareOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CompareOp::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| format!("Unknown operator: {}", s))
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Parse a number, accepting `,` as well as `.` as the decimal separator.
pub fn parse_number(s: &str) -> Option<f64> {
    s.trim().replace(',', ".").parse().ok()
}

/// A removal condition on a solid field.
#[derive(Debug, Clone)]
pub struct Condition {
    field: String,
    operator: String,
    literal: String,
    spec: Option<&'static FieldSpec>,
    op: Option<CompareOp>,
    /// The literal as a number, parsed once up front.
    number: Option<f64>,
}

impl Condition {
    pub fn new(
        field: impl Into<String>,
        operator: impl Into<String>,
        literal: impl Into<String>,
    ) -> Self {
        let field = field.into();
        let operator = operator.into();
        let literal = literal.into();
        Self {
            spec: get_spec(&field),
            op: operator.parse().ok(),
            number: parse_number(&literal),
            field,
            operator,
            literal,
        }
    }

    /// Check if this condition selects the given solid.
    ///
    /// Returns `false` if the solid has no such field, the operator is
    /// unknown, or a numeric field is compared against a non-number.
    pub fn matches(&self, solid: &Solid) -> bool {
        let (Some(spec), Some(op)) = (self.spec, self.op) else {
            return false;
        };
        let Some(value) = solid.get_field(spec.name) else {
            return false;
        };

        match spec.kind {
            FieldKind::Text => {
                let Some(text) = value.as_text() else {
                    return false;
                };
                match op {
                    CompareOp::Eq => text == self.literal,
                    CompareOp::Ne => text != self.literal,
                    // Text has no ordering
                    CompareOp::Gt | CompareOp::Lt => false,
                }
            }
            FieldKind::Number => match (value.as_number(), self.number) {
                (Some(lhs), Some(rhs)) => op.compare(lhs, rhs),
                _ => false,
            },
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field, self.operator, self.literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sphere(radius: f64, density: f64, owner: &str) -> Solid {
        Solid::sphere(radius, density, owner)
    }

    #[test]
    fn owner_eq_and_ne() {
        let a = sphere(1.0, 1.0, "A");
        let b = sphere(1.0, 1.0, "B");

        let eq = Condition::new("owner", "==", "A");
        assert!(eq.matches(&a));
        assert!(!eq.matches(&b));

        let ne = Condition::new("OWNER", "!=", "A");
        assert!(!ne.matches(&a));
        assert!(ne.matches(&b));
    }

    #[test]
    fn owner_value_comparison_is_case_sensitive() {
        let condition = Condition::new("owner", "==", "a");
        assert!(!condition.matches(&sphere(1.0, 1.0, "A")));
    }

    #[test]
    fn owner_ordering_never_matches() {
        let solid = sphere(1.0, 1.0, "M");
        assert!(!Condition::new("owner", ">", "A").matches(&solid));
        assert!(!Condition::new("owner", "<", "Z").matches(&solid));
    }

    #[test]
    fn numeric_operators() {
        let solid = sphere(5.0, 2.0, "A");
        assert!(Condition::new("radius", "==", "5").matches(&solid));
        assert!(!Condition::new("radius", "!=", "5").matches(&solid));
        assert!(Condition::new("radius", ">", "4.9").matches(&solid));
        assert!(!Condition::new("radius", ">", "5").matches(&solid));
        assert!(Condition::new("radius", "<", "5.1").matches(&solid));
        assert!(!Condition::new("radius", "<", "5").matches(&solid));
    }

    #[test]
    fn comma_decimal_separator() {
        let solid = sphere(1.0, 2.5, "A");
        assert!(Condition::new("density", "==", "2,5").matches(&solid));
        assert!(Condition::new("density", "==", "2.5").matches(&solid));
        assert_eq!(parse_number("2,5"), parse_number("2.5"));
    }

    #[test]
    fn no_epsilon_on_equality() {
        let solid = sphere(0.1 + 0.2, 1.0, "A");
        assert!(!Condition::new("radius", "==", "0.3").matches(&solid));
        assert!(Condition::new("radius", "!=", "0.3").matches(&solid));
    }

    #[test]
    fn missing_field_never_matches() {
        let solid = sphere(1.0, 1.0, "A");
        assert!(!Condition::new("height", "<", "100").matches(&solid));
        assert!(!Condition::new("height", "!=", "100").matches(&solid));
        assert!(!Condition::new("volume", "==", "1").matches(&solid));
    }

    #[test]
    fn unparsable_literal_never_matches() {
        let solid = sphere(1.0, 1.0, "A");
        assert!(!Condition::new("radius", "!=", "abc").matches(&solid));
        assert!(!Condition::new("density", "<", "").matches(&solid));
    }

    #[test]
    fn unknown_operator_never_matches() {
        let solid = sphere(1.0, 1.0, "A");
        assert!(!Condition::new("radius", ">=", "0").matches(&solid));
        assert!(!Condition::new("owner", "=", "A").matches(&solid));
        assert!(!Condition::new("radius", "~", "1").matches(&solid));
    }

    #[test]
    fn field_name_is_case_insensitive() {
        let cyl = Solid::cylinder((0.0, 0.0, 0.0), 1.0, 10.0, 1.0, "C");
        assert!(Condition::new("HeIgHt", ">", "9").matches(&cyl));
    }

    #[test]
    fn nan_field_matches_only_ne() {
        let solid = sphere(f64::NAN, 1.0, "A");
        assert!(!Condition::new("radius", "==", "1").matches(&solid));
        assert!(Condition::new("radius", "!=", "1").matches(&solid));
        assert!(!Condition::new("radius", ">", "1").matches(&solid));
    }

    #[test]
    fn displays_as_written() {
        let condition = Condition::new("Density", ">", "1,5");
        assert_eq!(condition.to_string(), "Density > 1,5");
    }

    #[test]
    fn compare_op_round_trips_symbols() {
        for op in CompareOp::ALL {
            assert_eq!(op.symbol().parse::<CompareOp>(), Ok(op));
        }
        assert!(">=".parse::<CompareOp>().is_err());
    }
}
