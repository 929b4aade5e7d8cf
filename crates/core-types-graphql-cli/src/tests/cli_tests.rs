use crate::commands::CommandEnum;
use crate::Cli;
use crate::CommandResult;
use clap::Parser;
use core_types_graphql::UnsupportedPolicy;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

#[test]
fn to_graphql_flags_become_options() -> Result<()> {
    let cli = Cli::try_parse_from([
        "core-types-graphql",
        "to-graphql",
        "types.json",
        "--no-header",
        "--null-type-name",
        "Null",
        "--unsupported",
        "error",
        "--filename",
        "schema.graphql",
    ])?;

    let Some(CommandEnum::ToGraphql(cmd)) = cli.cmd else {
        panic!("Expected the to-graphql command");
    };
    let options = cmd.options();
    assert_eq!(options.include_comment, Some(false));
    assert_eq!(options.null_type_name.as_deref(), Some("Null"));
    assert_eq!(options.unsupported, UnsupportedPolicy::Error);
    assert_eq!(options.filename.as_deref(), Some("schema.graphql"));
    assert_eq!(options.source_filename.as_deref(), Some("types.json"));
    Ok(())
}

#[test]
fn to_graphql_defaults() -> Result<()> {
    let cli = Cli::try_parse_from(["core-types-graphql", "to-graphql", "types.json"])?;

    let Some(CommandEnum::ToGraphql(cmd)) = cli.cmd else {
        panic!("Expected the to-graphql command");
    };
    let options = cmd.options();
    assert_eq!(options.include_comment, None);
    assert_eq!(options.unsupported, UnsupportedPolicy::Warn);
    assert_eq!(options.null_type_name, None);
    Ok(())
}

#[test]
fn include_comment_conflicts_with_no_header() {
    let result = Cli::try_parse_from([
        "core-types-graphql",
        "to-graphql",
        "types.json",
        "--include-comment",
        "--no-header",
    ]);

    assert!(result.is_err());
}

#[test]
fn invalid_unsupported_policy_is_rejected() {
    let result = Cli::try_parse_from([
        "core-types-graphql",
        "to-core-types",
        "schema.graphql",
        "--unsupported",
        "loudly",
    ]);

    assert!(result.is_err());
}

#[test]
fn schema_changes_takes_two_paths() -> Result<()> {
    let cli = Cli::try_parse_from([
        "core-types-graphql",
        "schema-changes",
        "old.graphql",
        "new.graphql",
        "-v",
    ])?;

    assert!(cli.verbose);
    assert!(matches!(cli.cmd, Some(CommandEnum::SchemaChanges(_))));
    assert!(Cli::try_parse_from(["core-types-graphql", "schema-changes", "old.graphql"]).is_err());
    Ok(())
}

#[test]
fn help_text_lists_commands() -> Result<()> {
    let cli = Cli::try_parse_from(["core-types-graphql"])?;

    let help = cli.help_text()?;
    assert!(help.contains("to-graphql"));
    assert!(help.contains("to-core-types"));
    assert!(help.contains("schema-changes"));
    Ok(())
}

#[test]
fn command_result_from_output() {
    let ok = CommandResult::from_output(Ok("type Foo".to_string()), "convert");
    assert_eq!(ok.stdout.as_deref(), Some("type Foo"));
    assert_eq!(ok.stderr, None);

    let err = CommandResult::from_output(Err(anyhow::anyhow!("boom")), "convert");
    assert_eq!(err.stdout, None);
    assert!(err.stderr.is_some_and(|stderr| stderr.ends_with("Failed to convert: boom")));
}
