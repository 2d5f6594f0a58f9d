/// Syntax errors.
///
/// Defines every way an expression can be malformed: stray characters, bad
/// spacing, operands and operators out of order, and unbalanced parentheses.
/// These are detected before any arithmetic happens.
pub mod syntax_error;
/// Evaluation errors.
///
/// Contains the errors that can be raised while computing the value of an
/// expression, such as division by zero in strict mode or a broken operand
/// stack when evaluation is attempted on unvalidated input.
pub mod eval_error;

pub use eval_error::EvalError;
pub use syntax_error::SyntaxError;
