mod schema_changes;
mod to_core_types;
mod to_graphql;

use crate::Cli;
use crate::CommandResult;
use schema_changes::SchemaChangesCmd;
use to_core_types::ToCoreTypesCmd;
use to_graphql::ToGraphqlCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "core-types-graphql")]
pub(crate) enum CommandEnum {
    /// Compare two GraphQL schemas and list breaking and dangerous changes.
    SchemaChanges(Box<SchemaChangesCmd>),

    /// Convert a GraphQL SDL file into a core-types JSON document.
    ToCoreTypes(Box<ToCoreTypesCmd>),

    /// Convert a core-types JSON document into GraphQL SDL.
    ToGraphql(Box<ToGraphqlCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: &Cli) -> CommandResult {
        match self {
            Self::SchemaChanges(cmd) => cmd.run(cli).await,
            Self::ToCoreTypes(cmd) => cmd.run(cli).await,
            Self::ToGraphql(cmd) => cmd.run(cli).await,
        }
    }
}

/// Read a whole input file, naming the file in the error.
pub(crate) async fn read_input(path: &std::path::Path) -> anyhow::Result<String> {
    use anyhow::Context;

    log::debug!("Reading {path:#?}...");
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {path:#?}"))
}
