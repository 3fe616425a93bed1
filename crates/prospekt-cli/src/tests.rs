use std::path::Path;

use super::*;

#[test]
fn no_arguments_uses_configured_defaults() {
    let cli = Cli::try_parse_from(["prospekt-cli"]).expect("expected valid cli args");
    assert!(cli.url.is_none());
    assert!(cli.output.is_none());
    assert!(!cli.dry_run);

    let mut config = prospekt_core::AppConfig::default();
    cli.apply_overrides(&mut config);
    assert_eq!(config, prospekt_core::AppConfig::default());
}

#[test]
fn parses_url_and_output_overrides() {
    let cli = Cli::try_parse_from([
        "prospekt-cli",
        "--url",
        "https://example.com/discounter/",
        "--output",
        "out.json",
    ])
    .expect("expected valid cli args");

    let mut config = prospekt_core::AppConfig::default();
    cli.apply_overrides(&mut config);
    assert_eq!(config.source_url, "https://example.com/discounter/");
    assert_eq!(config.output_path, Path::new("out.json"));
    assert_eq!(config.request_timeout_secs, 10);
}

#[test]
fn parses_dry_run_flag() {
    let cli = Cli::try_parse_from(["prospekt-cli", "--dry-run"]).expect("expected valid cli args");
    assert!(cli.dry_run);
}

#[test]
fn rejects_unknown_flag() {
    assert!(Cli::try_parse_from(["prospekt-cli", "--pages", "3"]).is_err());
}
