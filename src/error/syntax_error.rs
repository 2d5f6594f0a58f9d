use thiserror::Error;

/// Represents all the ways an expression can fail validation.
///
/// Columns are 1-based character positions in the original input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// The input was empty or contained only whitespace.
    #[error("The expression is empty.")]
    Empty,
    /// A character that cannot start any token.
    #[error("Column {column}: Unexpected character '{fragment}'.")]
    UnexpectedCharacter {
        /// The offending text.
        fragment: String,
        /// Where it was found.
        column:   usize,
    },
    /// Two whitespace characters in a row.
    #[error("Column {column}: Tokens must be separated by a single space.")]
    RepeatedWhitespace {
        /// Position of the second whitespace character.
        column: usize,
    },
    /// Whitespace at the very end of the input.
    #[error("Column {column}: Trailing whitespace.")]
    TrailingWhitespace {
        /// Position of the trailing whitespace character.
        column: usize,
    },
    /// A number or `(` was expected, but something else was found.
    #[error("Column {column}: Expected a number or '(' but found '{found}'.")]
    ExpectedOperand {
        /// The token encountered.
        found:  String,
        /// Where it was found.
        column: usize,
    },
    /// An operator or `)` was expected, but something else was found.
    #[error("Column {column}: Expected an operator or ')' but found '{found}'.")]
    ExpectedOperator {
        /// The token encountered.
        found:  String,
        /// Where it was found.
        column: usize,
    },
    /// A `)` with no matching `(`.
    #[error("Column {column}: Closing parenthesis without a matching '('.")]
    UnmatchedClosingParen {
        /// Where the parenthesis was found.
        column: usize,
    },
    /// The input ended with parentheses still open.
    #[error("{count} parenthesis(es) left unclosed.")]
    UnclosedParen {
        /// How many `(` are still waiting for a `)`.
        count: usize,
    },
    /// The input ended where a number was expected.
    #[error("Unexpected end of expression.")]
    UnexpectedEnd,
}
