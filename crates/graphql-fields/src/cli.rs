use clap::CommandFactory;
use crate::commands;
use std::str::FromStr;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::WARN;

#[derive(clap::Parser, Debug)]
#[command(
    name = "graphql-fields",
    version,
    about = "Prints the fields a GraphQL resolver was asked for.",
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        global=true,
        help="Log at debug level, regardless of `LOG_LEVEL`.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    /// Picks the log level from `--verbose`, then from the value of the
    /// `LOG_LEVEL` environment variable. An unrecognized `LOG_LEVEL` falls
    /// back to the default and comes with a warning to log once logging is
    /// up.
    pub(crate) fn log_level(
        &self,
        env_log_level: Option<&str>,
    ) -> (tracing::Level, Option<String>) {
        if self.verbose {
            return (tracing::Level::DEBUG, None);
        }

        match env_log_level.map(str::trim) {
            None | Some("") => (DEFAULT_LOG_LEVEL, None),
            Some(level) if level.eq_ignore_ascii_case("verbose") =>
                (tracing::Level::DEBUG, None),
            Some(level) => match tracing::Level::from_str(level) {
                Ok(level) => (level, None),
                Err(_) => (
                    DEFAULT_LOG_LEVEL,
                    Some(format!(
                        "Invalid `LOG_LEVEL` environment variable value: \
                        `{level}`"
                    )),
                ),
            },
        }
    }

    pub(crate) fn print_help() -> anyhow::Result<()> {
        Self::command().print_help()?;
        Ok(())
    }
}
