mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread", worker_threads = 10)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    if let Some(command) = cli.cmd.take() {
        let result = command.run(cli).await;
        if let Some(stdout) = result.stdout {
            println!("{stdout}");
        }
        if let Some(stderr) = result.stderr {
            eprintln!("{stderr}")
        }
        result.exit_code
    } else if let Err(err) = cli.run_default().await {
        eprintln!("{err:#}");
        std::process::ExitCode::FAILURE
    } else {
        std::process::ExitCode::SUCCESS
    }
}

/// Maps a `LOG_LEVEL` value to a level. `verbose` is an alias of `debug`.
pub(crate) fn parse_log_level(raw: &str) -> Option<tracing::Level> {
    match raw.trim() {
        "TRACE" | "trace" => Some(tracing::Level::TRACE),
        "DEBUG" | "debug" | "VERBOSE" | "verbose" => Some(tracing::Level::DEBUG),
        "INFO" | "info" => Some(tracing::Level::INFO),
        _ => None,
    }
}

fn setup_logger(cli: &Cli) {
    let mut log_level_warnings: Vec<String> = vec![];
    let log_level =
        if cli.verbose {
            tracing::Level::DEBUG
        } else {
            match std::env::var("LOG_LEVEL") {
                Ok(raw) => parse_log_level(&raw).unwrap_or_else(|| {
                    log_level_warnings.push(format!(
                        "Invalid `LOG_LEVEL` environment variable value: \
                        `{}`",
                        raw.trim(),
                    ));
                    DEFAULT_LOG_LEVEL
                }),
                Err(_) => DEFAULT_LOG_LEVEL,
            }
        };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    for warning in log_level_warnings.drain(..) {
        log::warn!("{warning}");
    }
}

#[cfg(test)]
mod tests;
