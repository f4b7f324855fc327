//! shouldupdate - track installed versions and check GitHub for newer releases.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use shouldupdate::Result;
use shouldupdate::app::AppContext;
use shouldupdate::cli::Cli;
use shouldupdate::cli::output::{emit_error, emit_robot, robot_error};

fn main() -> ExitCode {
    let cli = Cli::parse();
    if let Some(enabled) = cli.color_override() {
        colored::control::set_override(enabled);
    }
    init_tracing(&cli);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!(code = %e.code(), error = ?e, "command failed");
            if cli.output_format().is_machine_readable() {
                if emit_robot(&robot_error(&e)).is_err() {
                    eprintln!("Error: {e}");
                }
            } else {
                emit_error(&e.to_string());
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let ctx = AppContext::from_cli(cli)?;
    shouldupdate::cli::commands::run(&ctx, &cli.command)
}

fn init_tracing(cli: &Cli) {
    if cli.quiet {
        return;
    }

    let filter = match cli.verbose {
        0 => "warn,shouldupdate=info",
        1 => "info,shouldupdate=debug",
        2 => "debug,shouldupdate=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    if cli.output_format().is_machine_readable() {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_ansi(cli.color_override() != Some(false))
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}
