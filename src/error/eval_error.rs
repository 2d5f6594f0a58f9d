use thiserror::Error;

use crate::error::SyntaxError;

/// Represents all errors that can occur while computing a value.
///
/// Only [`EvalError::DivisionByZero`] can be produced by a validated
/// expression. The remaining variants exist so that evaluating unvalidated
/// input fails cleanly instead of producing an arbitrary number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Attempted division by zero while in strict division mode.
    #[error("Division by zero.")]
    DivisionByZero,
    /// The expression could not be tokenized.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// An operator was reduced with fewer than two operands available.
    #[error("An operator is missing an operand.")]
    MissingOperand,
    /// Parentheses did not pair up during evaluation.
    #[error("Unmatched parenthesis.")]
    UnmatchedParen,
    /// More than one value was left once every operator was applied.
    #[error("{count} operands were left without an operator.")]
    ExtraOperands {
        /// Number of values left on the operand stack.
        count: usize,
    },
}
