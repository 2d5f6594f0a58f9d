use std::ops::Range;

use logos::Logos;

use crate::error::SyntaxError;

/// Represents a lexical token in an arithmetic expression.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `3.14`, `.5` or `5.`.
    #[regex(r"[0-9]+(\.[0-9]*)?", parse_number)]
    #[regex(r"\.[0-9]+", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// A single whitespace character. Runs are not merged.
    #[regex(r"[ \t\r\n\f]")]
    Blank,
}

impl Token {
    /// Returns `true` for the five binary operator symbols.
    #[must_use]
    pub const fn is_operator(self) -> bool {
        matches!(self, Self::Plus | Self::Minus | Self::Star | Self::Slash | Self::Caret)
    }
}

/// A token together with the byte range it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    /// The recognized token.
    pub token: Token,
    /// Byte offsets into the source.
    pub span:  Range<usize>,
}

impl Lexeme {
    /// Returns the source text this lexeme was read from.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.span.clone()]
    }

    /// Returns the 1-based character column where this lexeme starts.
    #[must_use]
    pub fn column(&self, source: &str) -> usize {
        column_at(source, self.span.start)
    }
}

/// Converts a byte offset into a 1-based character column.
#[must_use]
pub fn column_at(source: &str, offset: usize) -> usize {
    source[..offset].chars().count() + 1
}

/// Splits an expression into lexemes.
///
/// A `-` immediately followed by a number literal is folded into that
/// literal when it appears where an operand is expected and is not glued to
/// what precedes it: at the start of the input, directly after `(`, or after
/// whitespace that follows an operator. Anywhere else it stays a subtraction,
/// so `1--2` and `1*-2` keep two operators in a row.
///
/// # Errors
/// Returns [`SyntaxError::UnexpectedCharacter`] for any character that does
/// not start a number, operator, parenthesis or whitespace.
///
/// # Example
/// ```
/// use reckon::calculator::lexer::{Token, tokenize};
///
/// let tokens: Vec<Token> = tokenize("3 - -2").unwrap()
///                                            .into_iter()
///                                            .map(|lexeme| lexeme.token)
///                                            .collect();
/// assert_eq!(tokens,
///            [Token::Number(3.0),
///             Token::Blank,
///             Token::Minus,
///             Token::Blank,
///             Token::Number(-2.0)]);
///
/// let glued: Vec<Token> = tokenize("1*-2").unwrap()
///                                          .into_iter()
///                                          .map(|lexeme| lexeme.token)
///                                          .collect();
/// assert_eq!(glued, [Token::Number(1.0), Token::Star, Token::Minus, Token::Number(2.0)]);
///
/// assert!(tokenize("2 % 3").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Lexeme>, SyntaxError> {
    let mut raw = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        match token {
            Ok(token) => raw.push(Lexeme { token, span }),
            Err(()) => {
                return Err(SyntaxError::UnexpectedCharacter { fragment: lexer.slice().to_string(),
                                                              column:   column_at(source,
                                                                                  span.start), });
            },
        }
    }

    Ok(fold_signs(raw))
}

fn fold_signs(raw: Vec<Lexeme>) -> Vec<Lexeme> {
    let mut lexemes: Vec<Lexeme> = Vec::with_capacity(raw.len());
    let mut raw = raw.into_iter().peekable();

    while let Some(lexeme) = raw.next() {
        if lexeme.token == Token::Minus
           && expects_operand(&lexemes)
           && let Some(next) = raw.peek()
           && let Token::Number(value) = next.token
           && next.span.start == lexeme.span.end
        {
            let span = lexeme.span.start..next.span.end;
            raw.next();
            lexemes.push(Lexeme { token: Token::Number(-value),
                                  span });
            continue;
        }
        lexemes.push(lexeme);
    }

    lexemes
}

fn expects_operand(preceding: &[Lexeme]) -> bool {
    // a sign glued to a preceding operator is a second operator, not a sign
    let detached = preceding.last()
                            .is_none_or(|lexeme| matches!(lexeme.token, Token::Blank | Token::LParen));
    let after_operator = preceding.iter()
                                  .rev()
                                  .find(|lexeme| lexeme.token != Token::Blank)
                                  .is_none_or(|lexeme| {
                                      lexeme.token.is_operator() || lexeme.token == Token::LParen
                                  });
    detached && after_operator
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid float, which turns into a lexer
///   error.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
