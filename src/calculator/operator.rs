use crate::error::EvalError;

/// How division by zero is treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DivisionMode {
    /// Dividing by zero is reported as [`EvalError::DivisionByZero`].
    #[default]
    Strict,
    /// Dividing by zero follows IEEE 754 and yields `inf`, `-inf` or `NaN`.
    Ieee,
}

/// The binary operators understood by the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

impl Operator {
    /// Binding strength: `+ -` bind loosest, `^` tightest.
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
        }
    }

    /// Applies the operator to `lhs` and `rhs`.
    ///
    /// Only division consults `division`. Overflow and powers such as
    /// `0 ^ -1` always follow floating-point semantics.
    ///
    /// # Errors
    /// Returns [`EvalError::DivisionByZero`] when dividing by zero in
    /// [`DivisionMode::Strict`].
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     calculator::operator::{DivisionMode, Operator},
    ///     error::EvalError,
    /// };
    ///
    /// assert_eq!(Operator::Pow.apply(2.0, 10.0, DivisionMode::Strict), Ok(1024.0));
    /// assert_eq!(Operator::Div.apply(1.0, 0.0, DivisionMode::Strict),
    ///            Err(EvalError::DivisionByZero));
    /// assert_eq!(Operator::Div.apply(1.0, 0.0, DivisionMode::Ieee), Ok(f64::INFINITY));
    /// ```
    pub fn apply(self, lhs: f64, rhs: f64, division: DivisionMode) -> Result<f64, EvalError> {
        Ok(match self {
               Self::Add => lhs + rhs,
               Self::Sub => lhs - rhs,
               Self::Mul => lhs * rhs,
               Self::Div => {
                   if rhs == 0.0 && division == DivisionMode::Strict {
                       return Err(EvalError::DivisionByZero);
                   }
                   lhs / rhs
               },
               Self::Pow => lhs.powf(rhs),
           })
    }
}

