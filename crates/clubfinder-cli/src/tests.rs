use super::*;

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["clubfinder"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_search_with_defaults() {
    let cli = Cli::try_parse_from(["clubfinder", "search", "Республики 1"])
        .expect("expected valid cli args");
    match cli.command {
        Some(Commands::Search {
            address,
            min_rating,
            max_distance,
            format,
        }) => {
            assert_eq!(address, "Республики 1");
            assert!(min_rating.is_none());
            assert!(max_distance.is_none());
            assert_eq!(format, OutputFormat::List);
        }
        other => panic!("expected search command, got {other:?}"),
    }
}

#[test]
fn parses_search_with_thresholds_and_json() {
    let cli = Cli::try_parse_from([
        "clubfinder",
        "search",
        "Ленина 5",
        "--min-rating",
        "4",
        "--max-distance",
        "2.5",
        "--format",
        "json",
    ])
    .expect("expected valid cli args");
    assert!(matches!(
        cli.command,
        Some(Commands::Search {
            ref min_rating,
            ref max_distance,
            format: OutputFormat::Json,
            ..
        }) if min_rating.as_deref() == Some("4") && max_distance.as_deref() == Some("2.5")
    ));
}

#[test]
fn search_requires_address() {
    assert!(Cli::try_parse_from(["clubfinder", "search"]).is_err());
}

#[test]
fn rejects_unknown_format() {
    assert!(Cli::try_parse_from(["clubfinder", "search", "x", "--format", "xml"]).is_err());
}

#[test]
fn parses_shell_command() {
    let cli = Cli::try_parse_from(["clubfinder", "shell"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Shell)));
}

#[test]
fn parses_config_command() {
    let cli = Cli::try_parse_from(["clubfinder", "config"]).expect("expected valid cli args");
    assert!(matches!(cli.command, Some(Commands::Config)));
}
