use crate::commands::read_input;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use core_types::NodeDocument;
use core_types_graphql::convert_core_types_to_graphql;
use core_types_graphql::CoreTypesToGraphqlOptions;
use core_types_graphql::UnsupportedPolicy;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct ToGraphqlCmd {
    #[arg(
        help="Name of the file the SDL will be written to. Only used in the \
             generated header comment.",
        long,
    )]
    filename: Option<String>,

    #[arg(
        conflicts_with="no_header",
        help="Include `comment` annotations in GraphQL descriptions.",
        long,
    )]
    include_comment: bool,

    #[arg(
        help="Omit the generated header comment.",
        long,
    )]
    no_header: bool,

    #[arg(
        help="Emit `null` types as references to this type name instead of \
             treating them as unsupported.",
        long,
    )]
    null_type_name: Option<String>,

    #[arg(
        default_value_t=UnsupportedPolicy::Warn,
        help="What to do with types GraphQL can't represent: `ignore`, \
             `warn` or `error`.",
        long,
    )]
    unsupported: UnsupportedPolicy,

    #[arg(
        help="Path to a core-types JSON document.",
        name="FILE",
    )]
    file_path: PathBuf,
}
impl ToGraphqlCmd {
    pub(crate) fn options(&self) -> CoreTypesToGraphqlOptions {
        let mut options =
            CoreTypesToGraphqlOptions::new()
                .with_source_filename(self.file_path.to_string_lossy())
                .with_unsupported(self.unsupported);
        if let Some(filename) = &self.filename {
            options = options.with_filename(filename);
        }
        if let Some(null_type_name) = &self.null_type_name {
            options = options.with_null_type_name(null_type_name);
        }
        if self.no_header {
            options = options.with_include_comment(false);
        } else if self.include_comment {
            options = options.with_include_comment(true);
        }
        options
    }

    async fn convert(&self) -> anyhow::Result<String> {
        let json = read_input(&self.file_path).await?;
        let doc: NodeDocument =
            serde_json::from_str(&json)
                .with_context(|| format!(
                    "{:#?} is not a valid core-types document",
                    self.file_path,
                ))?;

        let result = convert_core_types_to_graphql(&doc, &self.options())?;
        log::info!(
            "Converted {} types ({} not converted).",
            result.converted_types.len(),
            result.not_converted_types.len(),
        );
        for name in &result.not_converted_types {
            log::debug!("Not converted: `{name}`");
        }
        Ok(result.data)
    }
}

#[inherent::inherent]
impl RunnableCommand for ToGraphqlCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        let output = self.convert().await.map(|sdl| sdl.trim_end().to_string());
        CommandResult::from_output(output, "convert to GraphQL")
    }
}
