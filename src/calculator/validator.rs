use crate::{
    calculator::lexer::{Token, tokenize},
    error::SyntaxError,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expect {
    Operand,
    Operator,
}

/// Returns `true` if `expression` is a well-formed arithmetic expression.
///
/// This is exactly `validate(expression).is_ok()`.
///
/// # Examples
/// ```
/// use reckon::is_valid;
///
/// assert!(is_valid("(1 + 2) * 3"));
/// assert!(is_valid("-5"));
/// assert!(!is_valid("1 + + 2"));
/// assert!(!is_valid("(1+2"));
/// ```
#[must_use]
pub fn is_valid(expression: &str) -> bool {
    validate(expression).is_ok()
}

/// Checks that `expression` is well formed and reports the first problem.
///
/// The rules are:
/// - the input is not empty or whitespace only;
/// - tokens are separated by at most one whitespace character, and the input
///   does not end in whitespace;
/// - operands (numbers or parenthesized groups) and operators alternate,
///   starting and ending with an operand;
/// - every `(` has a matching `)`.
///
/// # Errors
/// Returns the [`SyntaxError`] describing the first violation found, scanning
/// left to right.
///
/// # Examples
/// ```
/// use reckon::{error::SyntaxError, validate};
///
/// assert_eq!(validate("2 ^ (1 - .5)"), Ok(()));
/// assert_eq!(validate(""), Err(SyntaxError::Empty));
/// assert_eq!(validate("1  + 2"), Err(SyntaxError::RepeatedWhitespace { column: 3 }));
/// assert_eq!(validate("(1 + 2"), Err(SyntaxError::UnclosedParen { count: 1 }));
/// ```
pub fn validate(expression: &str) -> Result<(), SyntaxError> {
    if expression.trim().is_empty() {
        return Err(SyntaxError::Empty);
    }

    let lexemes = tokenize(expression)?;

    let mut expect = Expect::Operand;
    let mut depth = 0usize;
    let mut previous_blank = false;

    for lexeme in &lexemes {
        let column = || lexeme.column(expression);

        if lexeme.token == Token::Blank {
            if previous_blank {
                return Err(SyntaxError::RepeatedWhitespace { column: column() });
            }
            previous_blank = true;
            continue;
        }
        previous_blank = false;

        match (lexeme.token, expect) {
            (Token::Number(_), Expect::Operand) => expect = Expect::Operator,
            (Token::LParen, Expect::Operand) => depth += 1,
            (Token::RParen, Expect::Operator) => {
                if depth == 0 {
                    return Err(SyntaxError::UnmatchedClosingParen { column: column() });
                }
                depth -= 1;
            },
            (Token::Number(_) | Token::LParen, Expect::Operator) => {
                return Err(SyntaxError::ExpectedOperator { found:  lexeme.text(expression)
                                                                         .to_string(),
                                                           column: column(), });
            },
            (_, Expect::Operand) => {
                return Err(SyntaxError::ExpectedOperand { found:  lexeme.text(expression)
                                                                        .to_string(),
                                                          column: column(), });
            },
            // operator symbol
            (_, Expect::Operator) => expect = Expect::Operand,
        }
    }

    if previous_blank && let Some(last) = lexemes.last() {
        return Err(SyntaxError::TrailingWhitespace { column: last.column(expression) });
    }
    if depth > 0 {
        return Err(SyntaxError::UnclosedParen { count: depth });
    }
    if expect == Expect::Operand {
        return Err(SyntaxError::UnexpectedEnd);
    }

    Ok(())
}
