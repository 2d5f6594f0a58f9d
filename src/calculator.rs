/// The evaluator module computes the value of an expression.
///
/// Evaluation runs a single left-to-right pass over the token stream, keeping
/// one stack of operands and one stack of pending operators. Operators are
/// reduced as soon as an operator of lower or equal precedence arrives, and
/// parentheses act as barriers on the operator stack.
///
/// # Responsibilities
/// - Applies operator precedence and left associativity.
/// - Handles nested parentheses without recursion.
/// - Reports division by zero according to the configured [`DivisionMode`].
///
/// [`DivisionMode`]: crate::calculator::operator::DivisionMode
pub mod evaluator;
/// The lexer module converts source text into tokens.
///
/// The lexer scans the raw input and produces spanned tokens for numbers,
/// operators, parentheses and single whitespace characters. Whitespace is
/// kept so that spacing rules can be checked by the validator.
///
/// # Responsibilities
/// - Recognizes number literals with at most one decimal point.
/// - Folds a directly attached leading `-` into a number literal.
/// - Reports characters that cannot start any token.
pub mod lexer;
/// The operator module defines the five binary operators.
pub mod operator;
/// The validator module decides whether an expression is well formed.
///
/// It walks the token stream with a two-state machine (expecting an operand
/// or expecting an operator) and a parenthesis depth counter.
///
/// # Responsibilities
/// - Rejects empty input and malformed spacing.
/// - Enforces operand/operator alternation.
/// - Enforces balanced parentheses.
pub mod validator;
