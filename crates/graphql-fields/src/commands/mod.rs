mod flatten;

use crate::Cli;
use crate::CommandResult;
use flatten::FlattenCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-fields")]
pub(crate) enum CommandEnum {
    Flatten(Box<FlattenCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: &Cli) -> CommandResult {
        match self {
            Self::Flatten(cmd) => cmd.run(cli).await
        }
    }
}

#[cfg(test)]
mod tests;
