//! # reckon
//!
//! reckon is an interactive arithmetic expression evaluator written in Rust.
//! It validates expressions built from numbers, the operators `+ - * / ^` and
//! parentheses, computes their value with operator precedence, and keeps a
//! bounded history of results across an interactive session.
//!
//! The core is two pure functions that never call each other:
//! [`validate`] (or [`is_valid`]) decides whether an expression is well
//! formed, and [`evaluate`] computes its value. Callers validate first.
//!
//! ```
//! use reckon::{evaluate, is_valid};
//!
//! let expression = "(2 + 3) * 4";
//! assert!(is_valid(expression));
//! assert_eq!(evaluate(expression), Ok(20.0));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Validates and evaluates arithmetic expressions.
///
/// This module ties together the lexer, the operator table, the validator and
/// the two-stack evaluator. None of it performs I/O or keeps state between
/// calls.
///
/// # Responsibilities
/// - Turns raw text into spanned tokens.
/// - Checks expressions against the grammar.
/// - Computes values with precedence and left associativity.
pub mod calculator;
/// Provides the error types for validation and evaluation.
///
/// # Responsibilities
/// - Describes every way an expression can be malformed, with columns.
/// - Keeps division by zero distinct from malformed input.
pub mod error;
/// The interactive prompt loop and its bounded history.
///
/// A [`Session`] drives any `BufRead`/`Write` pair, so it runs the same on a
/// terminal and in tests.
pub mod session;

pub use calculator::{
    evaluator::{Evaluator, evaluate},
    operator::DivisionMode,
    validator::{is_valid, validate},
};
pub use session::{History, Session, SessionConfig};
