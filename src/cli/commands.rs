//! Command dispatch and rendering

use std::f64::consts::PI;
use std::io;
use std::path::Path;
use std::sync::Arc;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::services::{DemoReport, DemoService, Summary};
use crate::cli::args::{Cli, Commands, ConfigCommands, ShapeCommands, StyleArgs};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, Settings};
use crate::domain::{
    count_vowels, factorial_is_exact, integer_square_root, is_palindrome, pi_approximation,
    Circle, Measurable, Rectangle, Shape, ShapeKind, MAX_EXACT_FACTORIAL,
};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let Some(command) = &cli.command else {
        return Err(CliError::Usage("no command given (see --help)".into()));
    };
    let config = cli.config.as_deref();

    match command {
        Commands::Demo => cmd_demo(&load_service(config)?),
        Commands::Isqrt { n } => cmd_isqrt(*n),
        Commands::Pi { iterations } => {
            let iterations = match iterations {
                Some(i) => *i,
                None => load_service(config)?.settings().pi_iterations,
            };
            cmd_pi(iterations)
        }
        Commands::Factorial { n } => cmd_factorial(*n),
        Commands::Stats { values } => cmd_stats(values),
        Commands::Reverse { values } => cmd_reverse(values),
        Commands::Palindrome { text } => cmd_palindrome(text.as_deref().unwrap_or_default()),
        Commands::Vowels { text } => cmd_vowels(text.as_deref().unwrap_or_default()),
        Commands::Shape { command } => cmd_shape(command),
        Commands::Config { command } => cmd_config(command, config),
        Commands::Completion { shell } => cmd_completion(*shell),
    }
}

fn load_service(config: Option<&Path>) -> CliResult<DemoService> {
    let settings = Settings::load(config)?;
    debug!("load_service: {:?}", settings);
    Ok(DemoService::new(Arc::new(settings)))
}

#[instrument(skip(service))]
fn cmd_demo(service: &DemoService) -> CliResult<()> {
    let report = service.run()?;
    render_demo(&report);
    Ok(())
}

fn render_demo(report: &DemoReport) {
    output::banner("primer demonstration");
    output::blank();

    output::header("MATHEMATICAL ALGORITHMS");
    let n = &report.numeric;
    output::info(&format!(
        "Integer square root of {}: {}",
        n.isqrt_input, n.isqrt
    ));
    let k = i128::from(n.isqrt);
    output::detail(&format!(
        "{}² = {} ≤ {} < {}² = {}",
        k,
        k * k,
        n.isqrt_input,
        k + 1,
        (k + 1) * (k + 1)
    ));
    output::info(&format!(
        "Pi approximation ({} iterations): {}",
        n.pi_iterations, n.pi
    ));
    output::detail(&format!("Actual value of Pi: {}", PI));
    output::info(&format!("Factorial of {}: {}", n.factorial_input, n.factorial));
    if !n.factorial_exact {
        factorial_warning(n.factorial_input);
    }
    output::blank();

    output::header("ARRAY OPERATIONS & STATISTICS");
    render_summary(&report.statistics);
    output::info(&format!(
        "Before reverse: {}",
        output::sequence(&report.reversal.before)
    ));
    output::info(&format!(
        "After reverse:  {}",
        output::sequence(&report.reversal.after)
    ));
    output::blank();

    output::header("STRING OPERATIONS");
    for check in &report.text.palindromes {
        output::info(&format!(
            "\"{}\" is {}a palindrome",
            check.text,
            if check.is_palindrome { "" } else { "NOT " }
        ));
    }
    output::info(&format!(
        "\"{}\" contains {} vowels",
        report.text.vowel_text, report.text.vowel_count
    ));
    output::blank();

    output::header("SHAPES");
    for shape in &report.shapes {
        render_shape(shape);
        output::blank();
    }

    output::banner("Demonstration complete");
}

fn render_summary(summary: &Summary) {
    output::info(&format!("Data: {}", output::sequence(&summary.values)));
    output::action("Mean", &format!("{:.4}", summary.mean));
    output::action(
        "Standard deviation",
        &format!("{:.4}", summary.standard_deviation),
    );
    output::action("Maximum value", &format!("{:.2}", summary.max));
    output::action("Minimum value", &format!("{:.2}", summary.min));
}

fn render_shape(shape: &Shape) {
    output::info(shape);
    output::action("Area", &format!("{:.2}", shape.area()));
    output::action("Perimeter", &format!("{:.2}", shape.perimeter()));
}

#[instrument]
fn cmd_isqrt(n: i64) -> CliResult<()> {
    if n < 0 {
        output::warning(&format!("negative input {} yields 0", n));
    }
    output::info(&integer_square_root(n));
    Ok(())
}

#[instrument]
fn cmd_pi(iterations: i64) -> CliResult<()> {
    let pi = pi_approximation(iterations);
    output::info(&pi);
    output::detail(&format!("error vs. π: {:e}", (pi - PI).abs()));
    Ok(())
}

#[instrument]
fn cmd_factorial(n: u32) -> CliResult<()> {
    if !factorial_is_exact(n) {
        factorial_warning(n);
    }
    output::info(&DemoService::factorial(n));
    Ok(())
}

fn factorial_warning(n: u32) {
    output::warning(&format!(
        "{}! does not fit in 64 bits, the result wraps (exact up to {}!)",
        n, MAX_EXACT_FACTORIAL
    ));
}

#[instrument]
fn cmd_stats(values: &[f64]) -> CliResult<()> {
    let summary = DemoService::summarize(values)?;
    render_summary(&summary);
    Ok(())
}

#[instrument]
fn cmd_reverse(values: &[i32]) -> CliResult<()> {
    let report = DemoService::reverse(values);
    output::info(&output::sequence(&report.after));
    Ok(())
}

#[instrument]
fn cmd_palindrome(text: &str) -> CliResult<()> {
    let verdict = if is_palindrome(text) {
        "is a palindrome"
    } else {
        "is NOT a palindrome"
    };
    output::info(&format!("\"{}\" {}", text, verdict));
    Ok(())
}

#[instrument]
fn cmd_vowels(text: &str) -> CliResult<()> {
    output::info(&count_vowels(text));
    Ok(())
}

#[instrument]
fn cmd_shape(command: &ShapeCommands) -> CliResult<()> {
    let (kind, style): (ShapeKind, &StyleArgs) = match command {
        ShapeCommands::Circle { radius, style } => (Circle { radius: *radius }.into(), style),
        ShapeCommands::Rectangle {
            width,
            height,
            style,
        } => (
            Rectangle {
                width: *width,
                height: *height,
            }
            .into(),
            style,
        ),
    };
    let shape = Shape::with_style(kind, style.color.clone(), style.filled);
    debug!("cmd_shape: {} {:?}", shape.kind().name(), shape);
    render_shape(&shape);
    Ok(())
}

#[instrument]
fn cmd_config(command: &ConfigCommands, config: Option<&Path>) -> CliResult<()> {
    match command {
        ConfigCommands::Show => {
            let service = load_service(config)?;
            output::info(&service.settings().to_toml()?);
        }
        ConfigCommands::Path => match global_config_path() {
            Some(path) => output::info(&path.display()),
            None => output::warning("no config directory available on this system"),
        },
    }
    Ok(())
}

fn cmd_completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
