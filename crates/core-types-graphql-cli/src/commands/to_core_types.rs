use crate::commands::read_input;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use core_types_graphql::convert_graphql_to_core_types;
use core_types_graphql::GraphqlToCoreTypesOptions;
use core_types_graphql::UnsupportedPolicy;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ToCoreTypesCmd {
    #[arg(
        default_value_t=UnsupportedPolicy::Ignore,
        help="What to do with GraphQL definitions core-types can't represent: \
             `ignore`, `warn` or `error`.",
        long,
    )]
    unsupported: UnsupportedPolicy,

    #[arg(
        help="Path to a GraphQL SDL file.",
        name="FILE",
    )]
    file_path: PathBuf,
}
impl ToCoreTypesCmd {
    async fn convert(&self) -> anyhow::Result<String> {
        let sdl = read_input(&self.file_path).await?;
        let options = GraphqlToCoreTypesOptions::new().with_unsupported(self.unsupported);

        let result = convert_graphql_to_core_types(&sdl, &options)?;
        log::info!(
            "Converted {} types ({} not converted).",
            result.converted_types.len(),
            result.not_converted_types.len(),
        );
        if !result.not_converted_types.is_empty() {
            log::warn!(
                "{} Not converted: {}",
                output_utils::WARNING_SIGN,
                result.not_converted_types.join(", "),
            );
        }
        Ok(serde_json::to_string_pretty(&result.data)?)
    }
}

#[inherent::inherent]
impl RunnableCommand for ToCoreTypesCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        CommandResult::from_output(self.convert().await, "convert to core-types")
    }
}
