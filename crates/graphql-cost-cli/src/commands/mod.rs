mod estimate;

use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use estimate::EstimateCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "graphql-cost")]
pub(crate) enum CommandEnum {
    /// Estimate the cost of a GraphQL operation against a cost-annotated
    /// schema.
    Estimate(Box<EstimateCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Estimate(cmd) => cmd.run(cli).await
        }
    }
}
