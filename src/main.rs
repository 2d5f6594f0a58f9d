use std::{io, process::ExitCode};

use clap::Parser;
use log::debug;
use reckon::{
    DivisionMode, Evaluator, Session, SessionConfig,
    error::EvalError,
    session::{DEFAULT_HISTORY_CAPACITY, DIVISION_BY_ZERO_MESSAGE, INVALID_EXPRESSION_MESSAGE},
    validate,
};

/// reckon evaluates arithmetic expressions built from numbers, `+ - * / ^`
/// and parentheses.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Maximum number of results kept in the session history.
    #[arg(short, long, default_value_t = DEFAULT_HISTORY_CAPACITY)]
    capacity: usize,

    /// Let division by zero produce `inf` or `NaN` instead of an error.
    #[arg(long)]
    ieee_division: bool,

    /// Evaluate this expression once and exit instead of starting an
    /// interactive session.
    #[arg(allow_hyphen_values = true)]
    expression: Option<String>,
}

fn main() -> anyhow::Result<ExitCode> {
    env_logger::init();

    let args = Args::parse();
    let division = if args.ieee_division {
        DivisionMode::Ieee
    } else {
        DivisionMode::Strict
    };
    debug!("starting with {args:?}");

    if let Some(expression) = args.expression {
        return Ok(evaluate_once(&expression, Evaluator::new(division)));
    }

    let config = SessionConfig { history_capacity: args.capacity,
                                 division };
    Session::new(io::stdin().lock(), io::stdout().lock(), config).run()?;

    Ok(ExitCode::SUCCESS)
}

fn evaluate_once(expression: &str, evaluator: Evaluator) -> ExitCode {
    if let Err(e) = validate(expression) {
        debug!("rejected {expression:?}: {e}");
        eprintln!("{INVALID_EXPRESSION_MESSAGE} {e}");
        return ExitCode::FAILURE;
    }

    match evaluator.evaluate(expression) {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        },
        Err(EvalError::DivisionByZero) => {
            eprintln!("{DIVISION_BY_ZERO_MESSAGE}");
            ExitCode::FAILURE
        },
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        },
    }
}
