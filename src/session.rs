use std::{
    fmt,
    io::{self, BufRead, Write},
};

use log::{debug, info, warn};

use crate::{
    calculator::{evaluator::Evaluator, operator::DivisionMode, validator::validate},
    error::EvalError,
};

/// Default number of results kept in a [`History`].
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Asks for an expression.
pub const EXPRESSION_PROMPT: &str = "Enter a valid arithmetic expression: ";
/// Asks whether to go again. Only [`RETRY_ANSWER`] continues.
pub const RETRY_PROMPT: &str = "Would you like to enter another expression? Enter Y for yes: ";
/// The only answer to [`RETRY_PROMPT`] that continues the session.
pub const RETRY_ANSWER: &str = "Y";
/// Printed for any expression that fails validation.
pub const INVALID_EXPRESSION_MESSAGE: &str = "That isn't a valid arithmetic expression.";
/// Printed when a valid expression divides by zero in strict mode.
pub const DIVISION_BY_ZERO_MESSAGE: &str = "Cannot divide by zero.";
/// First line of the history listing.
pub const HISTORY_HEADER: &str = "History of computed values:";

/// Append-only record of computed values, bounded by a fixed capacity.
///
/// Once the history is full, further values are dropped; the earliest results
/// are always the ones kept.
///
/// # Example
/// ```
/// use reckon::History;
///
/// let mut history = History::new(2);
/// assert!(history.record(1.0));
/// assert!(history.record(2.5));
/// assert!(!history.record(4.0));
/// assert_eq!(history.values(), [1.0, 2.5]);
/// assert_eq!(history.to_string(), "History of computed values:\n1\n2.5\n");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct History {
    values:   Vec<f64>,
    capacity: usize,
}

impl History {
    /// Creates an empty history that holds at most `capacity` values.
    #[must_use]
    pub const fn new(capacity: usize) -> Self {
        Self { values: Vec::new(),
               capacity }
    }

    /// Appends `value` if there is room. Returns `false` if it was dropped.
    pub fn record(&mut self, value: f64) -> bool {
        if self.is_full() {
            return false;
        }
        self.values.push(value);
        true
    }

    /// The recorded values, oldest first.
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of recorded values.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if nothing has been recorded yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `true` once [`History::record`] starts dropping values.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.values.len() >= self.capacity
    }

    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}

impl fmt::Display for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{HISTORY_HEADER}")?;
        for value in &self.values {
            writeln!(f, "{value}")?;
        }
        Ok(())
    }
}

/// Settings for an interactive [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Maximum number of results kept in the history.
    pub history_capacity: usize,
    /// How division by zero is treated.
    pub division:         DivisionMode,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { history_capacity: DEFAULT_HISTORY_CAPACITY,
               division:         DivisionMode::default(), }
    }
}

/// The prompt, evaluate and retry loop.
///
/// A session reads one expression per line from `input` and writes prompts,
/// results and messages to `output`. It owns the [`History`] and hands it
/// back when the loop ends.
pub struct Session<R, W> {
    input:     R,
    output:    W,
    evaluator: Evaluator,
    history:   History,
}

enum Outcome {
    Computed,
    Rejected,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session reading from `input` and writing to `output`.
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Self { input,
               output,
               evaluator: Evaluator::new(config.division),
               history: History::new(config.history_capacity) }
    }

    /// Runs the loop until the user declines to continue or input ends, then
    /// prints the history and returns it.
    ///
    /// An invalid expression prints [`INVALID_EXPRESSION_MESSAGE`] and asks
    /// again without the retry question. A valid one prints its value (or
    /// [`DIVISION_BY_ZERO_MESSAGE`]) and then asks [`RETRY_PROMPT`].
    ///
    /// # Errors
    /// Returns any I/O error from reading `input` or writing `output`.
    ///
    /// # Example
    /// ```
    /// use std::io::Cursor;
    ///
    /// use reckon::{Session, SessionConfig};
    ///
    /// let input = Cursor::new("1 +\n2 * 3\nY\n(1 + 1) ^ 3\nn\n");
    /// let mut output = Vec::new();
    /// let history = Session::new(input, &mut output, SessionConfig::default()).run()
    ///                                                                         .unwrap();
    ///
    /// assert_eq!(history.values(), [6.0, 8.0]);
    /// let printed = String::from_utf8(output).unwrap();
    /// assert!(printed.ends_with("History of computed values:\n6\n8\n"));
    /// ```
    pub fn run(mut self) -> io::Result<History> {
        info!("session started (history capacity {}, {:?} division)",
              self.history.capacity(),
              self.evaluator.division());

        while let Some(expression) = self.prompt(EXPRESSION_PROMPT)? {
            match self.handle(&expression)? {
                Outcome::Rejected => continue,
                Outcome::Computed => {},
            }

            match self.prompt(RETRY_PROMPT)? {
                Some(answer) if answer == RETRY_ANSWER => {},
                _ => break,
            }
        }

        write!(self.output, "{}", self.history)?;
        self.output.flush()?;
        info!("session ended with {} recorded value(s)", self.history.len());

        Ok(self.history)
    }

    fn handle(&mut self, expression: &str) -> io::Result<Outcome> {
        if let Err(e) = validate(expression) {
            debug!("rejected {expression:?}: {e}");
            writeln!(self.output, "{INVALID_EXPRESSION_MESSAGE}")?;
            return Ok(Outcome::Rejected);
        }

        match self.evaluator.evaluate(expression) {
            Ok(value) => {
                writeln!(self.output, "{value}")?;
                if self.history.record(value) {
                    debug!("recorded {value} ({} of {})",
                           self.history.len(),
                           self.history.capacity());
                } else {
                    warn!("history is full ({} values), {value} was not recorded",
                          self.history.capacity());
                }
            },
            Err(EvalError::DivisionByZero) => {
                writeln!(self.output, "{DIVISION_BY_ZERO_MESSAGE}")?;
            },
            Err(e) => {
                // validated input should never get here
                warn!("evaluation of {expression:?} failed: {e}");
                writeln!(self.output, "{INVALID_EXPRESSION_MESSAGE}")?;
                return Ok(Outcome::Rejected);
            },
        }

        Ok(Outcome::Computed)
    }

    /// Writes `prompt` and reads one line without its line ending.
    /// Returns `None` at end of input.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("end of input");
            return Ok(None);
        }

        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(Some(trimmed.to_string()))
    }
}
