mod error;

use clap::Parser as _;
use error::ReplError;
use rustyline::{error::ReadlineError, DefaultEditor};
use sce_compute::{
    config,
    fmt::{decimal, Latex},
    symbolic::{solve_with_steps, Expr},
};
use sce_error::Error;
use sce_parser::parser::Parser;
use std::io::{self, BufRead, IsTerminal, Write};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// The most fractional digits `--digits` accepts.
const MAX_DIGITS: u32 = 10_000;

/// Simplifies expressions over integers and rationals to their canonical form.
#[derive(clap::Parser)]
#[clap(name = "sce", version)]
struct Cli {
    /// The expression to simplify. Reads expressions from stdin if omitted.
    expression: Vec<String>,

    /// Hide the input and the intermediate forms.
    #[clap(short, long)]
    quiet: bool,

    /// Number of fractional digits in the decimal value of a constant result.
    #[clap(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(..=MAX_DIGITS as i64))]
    digits: u32,

    /// Name of the variable that acts as the imaginary unit.
    #[clap(long)]
    imaginary_unit: Option<String>,
}

/// Installs the log subscriber. The filter comes from `RUST_LOG` and defaults to `warn`.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .init();
}

/// Parses and solves the given input string, returning the intermediate forms and the result.
fn parse_solve(input: &str) -> Result<(Expr, Vec<Expr>, Expr), ReplError> {
    let ast = Parser::new(input).parse()?;
    let expr = Expr::from(ast);
    let (result, steps) = solve_with_steps(&expr)
        .map_err(|err| ReplError::engine(err, input))?;
    Ok((expr, steps, result))
}

/// Writes the input, its intermediate forms and the result, one per line.
fn write_solution(
    w: &mut impl Write,
    (expr, steps, result): &(Expr, Vec<Expr>, Expr),
    cli: &Cli,
) -> io::Result<()> {
    if !cli.quiet {
        writeln!(w, "Input: {}", expr)?;
        for (i, step) in steps.iter().enumerate() {
            writeln!(w, " {:>2}: {}", i, step)?;
        }
    }
    writeln!(w, "Final result: {}", result)?;

    if let Some(value) = result.as_rational()
        .and_then(|(numerator, denominator)| decimal(&numerator, &denominator, cli.digits))
    {
        writeln!(w, "Value: {}", value)?;
    }

    writeln!(w, "Final result (LaTeX): {}", result.as_display())
}

/// Parses and solves the input, printing the steps and result or reporting the failure.
///
/// Returns false if the input could not be solved.
fn read_solve(input: &str, cli: &Cli) -> bool {
    let solution = match parse_solve(input) {
        Ok(solution) => solution,
        Err(err) => {
            err.report_to_stderr("input", input);
            return false;
        },
    };

    if let Err(err) = write_solution(&mut io::stdout().lock(), &solution, cli) {
        tracing::error!(%err, "could not write result");
        return false;
    }
    true
}

fn main() {
    let cli = Cli::parse();
    init_logging();

    // must happen before anything is parsed, as the first read fixes the default
    if let Some(unit) = &cli.imaginary_unit {
        if let Err(err) = config::set_imaginary_unit(unit.as_str()) {
            ReplError::from(Error::new(Vec::new(), err)).report_to_stderr("config", "");
            std::process::exit(2);
        }
    }

    if !cli.expression.is_empty() {
        let input = cli.expression.join(" ");
        if !read_solve(&input, &cli) {
            std::process::exit(1);
        }
    } else if !io::stdin().is_terminal() {
        let mut failed = false;
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) if line.trim().is_empty() => (),
                Ok(line) => failed |= !read_solve(line.trim(), &cli),
                Err(err) => {
                    eprintln!("{}", err);
                    std::process::exit(1);
                },
            }
        }
        if failed {
            std::process::exit(1);
        }
    } else {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(err) => {
                eprintln!("{}", err);
                std::process::exit(1);
            },
        };

        fn process_line(rl: &mut DefaultEditor, cli: &Cli) -> Result<(), ReadlineError> {
            let input = rl.readline("> ")?;
            if input.trim().is_empty() {
                return Ok(());
            }

            rl.add_history_entry(&input)?;

            // the session goes on after a failed line
            read_solve(input.trim(), cli);
            Ok(())
        }

        loop {
            if let Err(err) = process_line(&mut rl, &cli) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }
    }
}
