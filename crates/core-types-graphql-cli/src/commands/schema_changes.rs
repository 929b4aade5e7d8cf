use crate::commands::read_input;
use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use core_types_graphql::get_breaking_changes;
use core_types_graphql::get_dangerous_changes;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, clap::Args)]
pub(crate) struct SchemaChangesCmd {
    #[arg(
        help="Path to the old version of the GraphQL schema.",
        name="FROM",
    )]
    from_path: PathBuf,

    #[arg(
        help="Path to the new version of the GraphQL schema.",
        name="TO",
    )]
    to_path: PathBuf,
}
impl SchemaChangesCmd {
    async fn report(&self) -> anyhow::Result<(String, bool)> {
        let from_sdl = read_input(&self.from_path).await?;
        let to_sdl = read_input(&self.to_path).await?;

        let breaking = get_breaking_changes(&from_sdl, &to_sdl)?;
        let dangerous = get_dangerous_changes(&from_sdl, &to_sdl)?;
        log::debug!(
            "Found {} breaking and {} dangerous changes.",
            breaking.len(),
            dangerous.len(),
        );

        let mut lines = vec![];
        for change in &breaking {
            lines.push(format!("{} {}", output_utils::RED_X, change.description));
        }
        for change in &dangerous {
            lines.push(format!("{} {}", output_utils::WARNING_SIGN, change.description));
        }
        if lines.is_empty() {
            lines.push(format!("{} No breaking or dangerous changes.", output_utils::GREEN_CHECK));
        }

        Ok((lines.join("\n"), breaking.is_empty()))
    }
}

#[inherent::inherent]
impl RunnableCommand for SchemaChangesCmd {
    pub async fn run(self, _cli: &Cli) -> CommandResult {
        match self.report().await {
            Ok((report, true)) => CommandResult::stdout(report),
            Ok((report, false)) =>
                CommandResult::stdout(report).with_exit_code(ExitCode::FAILURE),
            Err(err) => CommandResult::from_output(Err(err), "compare schemas"),
        }
    }
}
