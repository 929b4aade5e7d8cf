mod cli;
mod command;
mod commands;
mod logging;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::CommandResult;
pub(crate) use command::RunnableCommand;

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    logging::setup_logger(cli.verbose);

    let result = match cli.cmd.take() {
        Some(command) => command.run(&cli).await,
        None => CommandResult::from_output(
            cli.help_text().map_err(anyhow::Error::from),
            "render help",
        ),
    };

    if let Some(stdout) = result.stdout {
        println!("{stdout}");
    }
    if let Some(stderr) = result.stderr {
        eprintln!("{stderr}");
    }
    result.exit_code
}

#[cfg(test)]
mod tests;
