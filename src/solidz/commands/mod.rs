//! # Command Layer
//!
//! One module per operation. Commands take the [`Container`] and plain Rust
//! arguments and return a [`CmdResult`]: the event messages a UI should show,
//! in order. Nothing here writes to stdout.
//!
//! [`Container`]: crate::store::Container

pub mod add;
pub mod print;
pub mod remove;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    /// Append another result's messages, keeping order.
    pub fn merge(&mut self, other: CmdResult) {
        self.messages.extend(other.messages);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_keeps_order() {
        let mut first = CmdResult::default();
        first.add_message(CmdMessage::info("one"));
        let mut second = CmdResult::default();
        second.add_message(CmdMessage::error("two"));
        second.add_message(CmdMessage::warning("three"));

        first.merge(second);
        assert_eq!(
            first.messages,
            vec![
                CmdMessage::info("one"),
                CmdMessage::error("two"),
                CmdMessage::warning("three"),
            ]
        );
    }
}
