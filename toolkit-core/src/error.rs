use thiserror::Error;

/// Errors produced by the toolkit handlers and name lookups.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    #[error("Division by zero is not allowed.")]
    DivisionByZero,

    #[error("Unknown operation '{0}'. Supported operations: add, subtract, multiply, divide.")]
    UnknownOperation(String),

    #[error("Unknown to-do action '{0}'. Supported actions: add, list, remove.")]
    UnknownTodoAction(String),

    #[error("Unknown contact action '{0}'. Supported actions: add, list, remove.")]
    UnknownContactAction(String),

    #[error("Unknown conversion type '{0}'. Supported types: length, weight.")]
    UnknownQuantity(String),

    #[error("Unknown provider '{0}'. Supported providers: mock.")]
    UnknownProvider(String),

    #[error("`{command}` requires {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },
}
