mod cli;
mod command;
mod command_result;
mod commands;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

// Flattening is synchronous; one thread is plenty.
#[tokio::main(flavor = "current_thread")]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    let result = match cli.cmd.take() {
        Some(command) => command.run(&cli).await,
        None => Cli::print_help()
            .map(|()| String::new())
            .into(),
    };
    result.emit()
}

fn setup_logger(cli: &Cli) {
    let env_log_level = std::env::var("LOG_LEVEL").ok();
    let (log_level, warning) = cli.log_level(env_log_level.as_deref());

    // stdout is reserved for the flattened JSON.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}
