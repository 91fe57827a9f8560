//! # Script Dispatcher
//!
//! Turns one line of the command language into an [`Instruction`]:
//!
//! ```text
//! add sphere <radius> <density> <owner>
//! add box <a> <b> <c> <density> <owner>            (alias: parallelepiped)
//! add cylinder <x> <y> <z> <radius> <height> <density> <owner>
//! rem <field> <op> <value>                         op: == != > <
//! rem <type>
//! print
//! ```
//!
//! Numbers accept `,` as the decimal separator. Blank lines parse to `None`.
//! All validation of shape, arity and vocabulary happens here, so the
//! container only ever sees well-formed requests.

use crate::attributes::{get_spec, parse_number, CompareOp};
use crate::model::{Shape, ShapeKind, Solid};
use thiserror::Error;

/// A parsed line.
#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    Add(Solid),
    RemoveWhere {
        field: String,
        operator: String,
        literal: String,
    },
    RemoveType(String),
    Print,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    #[error("not enough parameters for 'add'")]
    MissingShape,

    #[error("unknown shape '{shape}' or wrong parameter count ({arity}) for 'add'")]
    UnknownShape { shape: String, arity: usize },

    #[error("invalid number '{token}' for 'add {shape}'")]
    InvalidNumber { shape: String, token: String },

    #[error("invalid field '{field}' or operator '{operator}' in removal condition")]
    InvalidCondition { field: String, operator: String },

    #[error("invalid shape type '{0}' for removal")]
    UnknownType(String),

    #[error("wrong parameter count ({0}) for 'rem'")]
    RemArity(usize),

    #[error("unknown command \"{0}\"")]
    UnknownCommand(String),

    #[error("line is not valid UTF-8")]
    InvalidUtf8,
}

/// Parse one line. Returns `Ok(None)` for blank lines.
pub fn parse_line(line: &str) -> Result<Option<Instruction>, ScriptError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(command) = tokens.first() else {
        return Ok(None);
    };

    let instruction = match command.to_ascii_lowercase().as_str() {
        "add" => parse_add(&tokens)?,
        "rem" => parse_rem(&tokens)?,
        "print" => Instruction::Print,
        _ => return Err(ScriptError::UnknownCommand(command.to_string())),
    };
    Ok(Some(instruction))
}

fn parse_add(tokens: &[&str]) -> Result<Instruction, ScriptError> {
    let Some(shape) = tokens.get(1) else {
        return Err(ScriptError::MissingShape);
    };
    let unknown = || ScriptError::UnknownShape {
        shape: shape.to_string(),
        arity: tokens.len(),
    };
    let kind: ShapeKind = shape.parse().map_err(|_| unknown())?;

    // add <shape> <fields...> <density> <owner>
    let field_count = kind.field_names().len();
    if tokens.len() != field_count + 4 {
        return Err(unknown());
    }

    let numbers = tokens[2..tokens.len() - 1]
        .iter()
        .map(|token| {
            parse_number(token).ok_or_else(|| ScriptError::InvalidNumber {
                shape: shape.to_string(),
                token: token.to_string(),
            })
        })
        .collect::<Result<Vec<f64>, _>>()?;
    let owner = tokens[tokens.len() - 1];
    let density = numbers[field_count];

    let shape = match (kind, &numbers[..field_count]) {
        (ShapeKind::Sphere, &[radius]) => Shape::Sphere { radius },
        (ShapeKind::Box, &[a, b, c]) => Shape::Box { a, b, c },
        (ShapeKind::Cylinder, &[x, y, z, radius, height]) => Shape::Cylinder {
            x,
            y,
            z,
            radius,
            height,
        },
        _ => return Err(unknown()),
    };

    Ok(Instruction::Add(Solid::new(shape, density, owner)))
}

fn parse_rem(tokens: &[&str]) -> Result<Instruction, ScriptError> {
    match tokens {
        [_, field, operator, literal] => {
            let known_field = get_spec(field).is_some();
            let known_op = operator.parse::<CompareOp>().is_ok();
            if !(known_field && known_op) {
                return Err(ScriptError::InvalidCondition {
                    field: field.to_string(),
                    operator: operator.to_string(),
                });
            }
            Ok(Instruction::RemoveWhere {
                field: field.to_string(),
                operator: operator.to_string(),
                literal: literal.to_string(),
            })
        }
        [_, type_name] => {
            if type_name.parse::<ShapeKind>().is_err() {
                return Err(ScriptError::UnknownType(type_name.to_string()));
            }
            Ok(Instruction::RemoveType(type_name.to_string()))
        }
        _ => Err(ScriptError::RemArity(tokens.len())),
    }
}
