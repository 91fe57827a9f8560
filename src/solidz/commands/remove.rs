use crate::attributes::Condition;
use crate::commands::{CmdMessage, CmdResult};
use crate::model::{ShapeKind, Solid};
use crate::store::Container;

/// Remove solids matching `<field> <operator> <literal>`.
///
/// `line` only annotates the messages.
pub fn by_condition(
    container: &mut Container,
    field: &str,
    operator: &str,
    literal: &str,
    line: usize,
) -> CmdResult {
    let condition = Condition::new(field, operator, literal);
    let removed = container.remove_by_condition(&condition);
    let reason = format!("Deleted because {} at line {}", condition, line);
    report(removed, &reason)
}

/// Remove solids whose variant is `type_name` (case-insensitive).
///
/// A name that is not a known variant removes nothing.
pub fn by_type(container: &mut Container, type_name: &str, line: usize) -> CmdResult {
    let Ok(kind) = type_name.parse::<ShapeKind>() else {
        return CmdResult::default();
    };
    let removed = container.remove_by_type(kind);
    let reason = format!("Deleted because type is {} at line {}", type_name, line);
    report(removed, &reason)
}

fn report(removed: Vec<Solid>, reason: &str) -> CmdResult {
    let mut result = CmdResult::default();
    for solid in removed {
        result.add_message(CmdMessage::warning(solid.render(reason)));
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add;
    use crate::store::fixtures::mixed;

    #[test]
    fn owner_condition_leaves_the_rest() {
        let mut container = Container::new();
        add::run(&mut container, Solid::sphere(5.0, 2.5, "A"));
        add::run(&mut container, Solid::cuboid(1.0, 2.0, 3.0, 1.0, "B"));

        let result = by_condition(&mut container, "owner", "==", "A", 3);

        assert_eq!(container.len(), 1);
        assert_eq!(
            container.iter().next(),
            Some(&Solid::cuboid(1.0, 2.0, 3.0, 1.0, "B"))
        );
        assert_eq!(
            result.messages,
            vec![CmdMessage::warning(
                "Deleted because owner == A at line 3 Sphere: Radius=5, Density=2.5, Owner=A"
            )]
        );
    }

    #[test]
    fn density_threshold_on_cylinders() {
        let mut container = Container::new();
        for density in [1.0, 2.0, 3.0] {
            add::run(
                &mut container,
                Solid::cylinder((0.0, 0.0, 0.0), 1.0, 1.0, density, "C"),
            );
        }

        let result = by_condition(&mut container, "density", ">", "1.5", 4);

        assert_eq!(result.messages.len(), 2);
        assert!(result
            .messages
            .iter()
            .all(|m| m.content.starts_with("Deleted because density > 1.5 at line 4")));
        let left: Vec<_> = container.iter().map(Solid::density).collect();
        assert_eq!(left, vec![1.0]);
    }

    #[test]
    fn no_match_emits_nothing() {
        let mut container = mixed();
        let result = by_condition(&mut container, "owner", "==", "nobody", 1);
        assert!(result.messages.is_empty());
        assert_eq!(container.len(), 3);
    }

    #[test]
    fn type_removal_without_matches_is_silent() {
        let mut container = Container::new();
        add::run(&mut container, Solid::sphere(1.0, 1.0, "A"));

        let result = by_type(&mut container, "box", 2);

        assert!(result.messages.is_empty());
        assert_eq!(container.len(), 1);
    }

    #[test]
    fn type_removal_is_case_insensitive() {
        let mut container = mixed();
        let result = by_type(&mut container, "SPHERE", 7);
        assert_eq!(container.len(), 2);
        assert_eq!(
            result.messages,
            vec![CmdMessage::warning(
                "Deleted because type is SPHERE at line 7 Sphere: Radius=5, Density=2.5, Owner=S"
            )]
        );
    }

    #[test]
    fn parallelepiped_alias_removes_boxes() {
        let mut container = mixed();
        by_type(&mut container, "Parallelepiped", 1);
        assert!(container.iter().all(|s| s.kind() != ShapeKind::Box));
    }

    #[test]
    fn unknown_type_removes_nothing() {
        let mut container = mixed();
        let result = by_type(&mut container, "cube", 1);
        assert!(result.messages.is_empty());
        assert_eq!(container.len(), 3);
    }
}
