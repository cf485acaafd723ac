pub(crate) mod validate;

use crate::Cli;
use crate::CommandResult;
use validate::ValidateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphdef")]
pub(crate) enum CommandEnum {
    /// Parse and validate graphdef schema files.
    Validate(Box<ValidateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Validate(cmd) => cmd.run(cli).await
        }
    }
}
