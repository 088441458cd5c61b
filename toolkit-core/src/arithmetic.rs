use serde::Serialize;
use std::{convert::TryFrom, fmt};
use tracing::{debug, warn};

use crate::error::ToolError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    pub const fn all() -> &'static [Operation] {
        &[Operation::Add, Operation::Subtract, Operation::Multiply, Operation::Divide]
    }

    /// Apply the operation to `a` and `b` using native `f64` arithmetic.
    ///
    /// Only `divide` can fail, and only when `b` is zero (either sign).
    pub fn apply(self, a: f64, b: f64) -> Result<f64, ToolError> {
        match self {
            Operation::Add => Ok(a + b),
            Operation::Subtract => Ok(a - b),
            Operation::Multiply => Ok(a * b),
            Operation::Divide => {
                if b == 0.0 {
                    warn!(a, "refusing to divide by zero");
                    return Err(ToolError::DivisionByZero);
                }
                Ok(a / b)
            }
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Operation {
    type Error = ToolError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "add" => Ok(Operation::Add),
            "subtract" => Ok(Operation::Subtract),
            "multiply" => Ok(Operation::Multiply),
            "divide" => Ok(Operation::Divide),
            _ => Err(ToolError::UnknownOperation(value.to_string())),
        }
    }
}

/// A successfully evaluated binary operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculation {
    pub operation: Operation,
    pub a: f64,
    pub b: f64,
    pub result: f64,
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Result: {}", format_number(self.result))
    }
}

pub fn calculate(operation: Operation, a: f64, b: f64) -> Result<Calculation, ToolError> {
    let result = operation.apply(a, b)?;
    debug!(%operation, a, b, result, "arithmetic evaluated");

    Ok(Calculation { operation, a, b, result })
}

/// Shortest round-trip form of `value`, keeping a trailing `.0` on integral values.
pub fn format_number(value: f64) -> String {
    format!("{value:?}")
}
