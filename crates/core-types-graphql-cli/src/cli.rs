use clap::CommandFactory;
use crate::commands;

/// Convert between core-types JSON documents and GraphQL SDL.
#[derive(clap::Parser, Debug)]
#[command(name = "core-types-graphql", version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) cmd: Option<commands::CommandEnum>,

    #[arg(
        global=true,
        help="Enable verbose output.",
        long,
        short='v',
    )]
    pub verbose: bool,
}
impl Cli {
    pub(crate) fn help_text(&self) -> std::io::Result<String> {
        let mut help = vec![];
        Self::command().write_long_help(&mut help)?;
        Ok(String::from_utf8_lossy(&help).trim_end().to_string())
    }
}
