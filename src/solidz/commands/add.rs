use crate::commands::{CmdMessage, CmdResult};
use crate::model::Solid;
use crate::store::Container;

pub fn run(container: &mut Container, solid: Solid) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(solid.render("Added")));
    container.add(solid);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_and_reports() {
        let mut container = Container::new();
        let result = run(&mut container, Solid::sphere(5.0, 2.5, "A"));

        assert_eq!(container.iter().next(), Some(&Solid::sphere(5.0, 2.5, "A")));
        assert_eq!(
            result.messages,
            vec![CmdMessage::success(
                "Added Sphere: Radius=5, Density=2.5, Owner=A"
            )]
        );
    }
}
