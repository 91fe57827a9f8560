use crate::commands::{CmdMessage, CmdResult};
use crate::store::Container;

/// List every solid, then a blank separator line.
pub fn run(container: &Container) -> CmdResult {
    let mut result = CmdResult::default();
    for solid in container {
        result.add_message(CmdMessage::info(solid.to_string()));
    }
    result.add_message(CmdMessage::info(""));
    result
}
