use crate::{
    calculator::{
        lexer::{Token, tokenize},
        operator::{DivisionMode, Operator},
    },
    error::EvalError,
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, EvalError>;

/// An entry on the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    /// An open parenthesis. Nothing below it is reduced until the matching
    /// `)` arrives.
    Open,
    Apply(Operator),
}

struct Stacks {
    operands:  Vec<f64>,
    operators: Vec<Pending>,
    division:  DivisionMode,
}

impl Stacks {
    fn with_capacity(capacity: usize, division: DivisionMode) -> Self {
        Self { operands: Vec::with_capacity(capacity),
               operators: Vec::with_capacity(capacity),
               division }
    }

    /// Pops the top operator and its two operands and pushes the result.
    /// The more recently pushed operand is the right-hand side.
    fn reduce(&mut self, op: Operator) -> EvalResult<()> {
        self.operators.pop();
        let rhs = self.operands.pop().ok_or(EvalError::MissingOperand)?;
        let lhs = self.operands.pop().ok_or(EvalError::MissingOperand)?;
        self.operands.push(op.apply(lhs, rhs, self.division)?);
        Ok(())
    }

    fn push_operator(&mut self, op: Operator) -> EvalResult<()> {
        while let Some(&Pending::Apply(top)) = self.operators.last()
              && top.precedence() >= op.precedence()
        {
            self.reduce(top)?;
        }
        self.operators.push(Pending::Apply(op));
        Ok(())
    }

    fn close_paren(&mut self) -> EvalResult<()> {
        loop {
            match self.operators.last().copied() {
                Some(Pending::Apply(op)) => self.reduce(op)?,
                Some(Pending::Open) => {
                    self.operators.pop();
                    return Ok(());
                },
                None => return Err(EvalError::UnmatchedParen),
            }
        }
    }

    fn finish(mut self) -> EvalResult<f64> {
        while let Some(pending) = self.operators.last().copied() {
            match pending {
                Pending::Apply(op) => self.reduce(op)?,
                Pending::Open => return Err(EvalError::UnmatchedParen),
            }
        }

        match self.operands.as_slice() {
            [value] => Ok(*value),
            [] => Err(EvalError::MissingOperand),
            rest => Err(EvalError::ExtraOperands { count: rest.len() }),
        }
    }
}

/// Evaluates arithmetic expressions.
///
/// An `Evaluator` holds no state between calls; the same expression always
/// yields the same result. It only carries the [`DivisionMode`] to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluator {
    division: DivisionMode,
}

impl Evaluator {
    /// Creates an evaluator with the given division mode.
    #[must_use]
    pub const fn new(division: DivisionMode) -> Self {
        Self { division }
    }

    /// Returns the division mode this evaluator was created with.
    #[must_use]
    pub const fn division(&self) -> DivisionMode {
        self.division
    }

    /// Computes the value of `expression`.
    ///
    /// The expression should already have passed
    /// [`validate`](crate::validate). All operators are left associative,
    /// including `^`, so `2 ^ 3 ^ 2` is `(2 ^ 3) ^ 2`.
    ///
    /// # Errors
    /// - [`EvalError::DivisionByZero`] when dividing by zero in
    ///   [`DivisionMode::Strict`].
    /// - [`EvalError::Syntax`], [`EvalError::MissingOperand`],
    ///   [`EvalError::UnmatchedParen`] or [`EvalError::ExtraOperands`] if the
    ///   expression was not valid to begin with.
    ///
    /// # Example
    /// ```
    /// use reckon::{DivisionMode, Evaluator};
    ///
    /// let ieee = Evaluator::new(DivisionMode::Ieee);
    /// assert_eq!(ieee.evaluate("2 + 3 * 4"), Ok(14.0));
    /// assert!(ieee.evaluate("0 / 0").unwrap().is_nan());
    /// ```
    pub fn evaluate(&self, expression: &str) -> EvalResult<f64> {
        let lexemes = tokenize(expression)?;
        let mut stacks = Stacks::with_capacity(lexemes.len(), self.division);

        for lexeme in &lexemes {
            match lexeme.token {
                Token::Number(value) => stacks.operands.push(value),
                Token::LParen => stacks.operators.push(Pending::Open),
                Token::RParen => stacks.close_paren()?,
                Token::Blank => {},
                Token::Plus => stacks.push_operator(Operator::Add)?,
                Token::Minus => stacks.push_operator(Operator::Sub)?,
                Token::Star => stacks.push_operator(Operator::Mul)?,
                Token::Slash => stacks.push_operator(Operator::Div)?,
                Token::Caret => stacks.push_operator(Operator::Pow)?,
            }
        }

        stacks.finish()
    }
}

/// Computes the value of `expression` in strict division mode.
///
/// Shorthand for `Evaluator::default().evaluate(expression)`.
///
/// # Errors
/// See [`Evaluator::evaluate`].
///
/// # Examples
/// ```
/// use reckon::{error::EvalError, evaluate};
///
/// assert_eq!(evaluate("(2 + 3) * 4"), Ok(20.0));
/// assert_eq!(evaluate("8 - 3 - 2"), Ok(3.0));
/// assert_eq!(evaluate("2 ^ 3 ^ 2"), Ok(64.0));
/// assert_eq!(evaluate("1 / (2 - 2)"), Err(EvalError::DivisionByZero));
/// ```
pub fn evaluate(expression: &str) -> EvalResult<f64> {
    Evaluator::default().evaluate(expression)
}
