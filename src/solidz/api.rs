//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every solidz operation, whatever UI sits on top.
//!
//! The facade:
//! - **Owns** the [`Container`]
//! - **Dispatches** to the appropriate command function
//! - **Returns structured types** ([`CmdResult`]), never printed text
//!
//! [`SolidzApi::run_script`] is the line dispatcher: it reads a script,
//! parses each line, and executes it. A bad line becomes an error message
//! and processing continues with the next one.

use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Solid;
use crate::script::{parse_line, Instruction, ScriptError};
use crate::store::Container;
use std::io::BufRead;
use tracing::{debug, warn};

pub use crate::commands::MessageLevel;

#[derive(Debug, Default)]
pub struct SolidzApi {
    container: Container,
}

impl SolidzApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn solids(&self) -> &Container {
        &self.container
    }

    pub fn add(&mut self, solid: Solid) -> CmdResult {
        commands::add::run(&mut self.container, solid)
    }

    pub fn remove_by_condition(
        &mut self,
        field: &str,
        operator: &str,
        literal: &str,
        line: usize,
    ) -> CmdResult {
        commands::remove::by_condition(&mut self.container, field, operator, literal, line)
    }

    pub fn remove_by_type(&mut self, type_name: &str, line: usize) -> CmdResult {
        commands::remove::by_type(&mut self.container, type_name, line)
    }

    pub fn print(&self) -> CmdResult {
        commands::print::run(&self.container)
    }

    pub fn execute(&mut self, instruction: Instruction, line: usize) -> CmdResult {
        match instruction {
            Instruction::Add(solid) => self.add(solid),
            Instruction::RemoveWhere {
                field,
                operator,
                literal,
            } => self.remove_by_condition(&field, &operator, &literal, line),
            Instruction::RemoveType(type_name) => self.remove_by_type(&type_name, line),
            Instruction::Print => self.print(),
        }
    }

    /// Parse and execute a single line.
    pub fn execute_line(&mut self, text: &str, line: usize) -> CmdResult {
        match parse_line(text) {
            Ok(Some(instruction)) => {
                debug!(line, ?instruction, "execute");
                self.execute(instruction, line)
            }
            Ok(None) => CmdResult::default(),
            Err(e) => rejected(line, e),
        }
    }

    /// Run every line of a script, numbering lines from 1.
    ///
    /// A line that is not valid UTF-8 is rejected like any other malformed
    /// line. Fails only if reading the input fails.
    pub fn run_script<R: BufRead>(&mut self, mut reader: R) -> Result<CmdResult> {
        let mut result = CmdResult::default();
        let mut buf = Vec::new();
        let mut line = 0;

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line += 1;

            let bytes = buf.strip_suffix(b"\n").unwrap_or(&buf[..]);
            let bytes = bytes.strip_suffix(b"\r").unwrap_or(bytes);
            match std::str::from_utf8(bytes) {
                Ok(text) => result.merge(self.execute_line(text, line)),
                Err(_) => result.merge(rejected(line, ScriptError::InvalidUtf8)),
            }
        }

        debug!(remaining = self.container.len(), "script finished");
        Ok(result)
    }
}

fn rejected(line: usize, error: ScriptError) -> CmdResult {
    warn!(line, %error, "rejected line");
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::error(format!(
        "Error at line {}: {}",
        line, error
    )));
    result
}
