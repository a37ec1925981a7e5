use clap::Parser;
use neofeed_cli::{Args, parse_nickname_edit, render_neo_list};
use neofeed_types::{FeedQuery, Neo, NeoName};
use pretty_assertions::assert_eq;
use std::io::Write;

#[test]
fn parse_nickname_edit_splits_on_first_equals() {
    let edit = parse_nickname_edit("(2018 RC)=Rocky=Road").unwrap();
    assert_eq!(edit.name, NeoName::new("(2018 RC)"));
    assert_eq!(edit.nickname, "Rocky=Road");
}

#[test]
fn parse_nickname_edit_rejects_missing_separator() {
    assert!(parse_nickname_edit("(2018 RC)").is_err());
}

#[test]
fn parse_nickname_edit_rejects_empty_name() {
    assert!(parse_nickname_edit(" =Rocky").is_err());
}

#[test]
fn args_defaults() {
    let args = Args::try_parse_from(["neofeed"]).unwrap();
    assert!(args.nicknames.is_empty());
    assert!(!args.verbose);

    let config = args.feed_config().unwrap();
    assert_eq!(config.api_key, "DEMO_KEY");
    assert_eq!(args.feed_query().unwrap(), FeedQuery::today());
}

#[test]
fn flags_override_config() {
    let args = Args::try_parse_from([
        "neofeed",
        "--api-key",
        "secret",
        "--base-url",
        "http://localhost:9000",
        "--fetch-delay-ms",
        "0",
        "--update-delay-ms",
        "10",
        "--date",
        "2018-09-01",
        "-n",
        "(2018 RC)=Rocky",
        "--nickname",
        "(2018 PV24)=Doomed",
    ])
    .unwrap();

    let config = args.feed_config().unwrap();
    assert_eq!(config.api_key, "secret");
    assert_eq!(config.api_base_url, "http://localhost:9000");
    assert_eq!(config.fetch_delay_ms, 0);
    assert_eq!(config.update_delay_ms, 10);
    assert_eq!(args.feed_query().unwrap().to_string(), "2018-09-01");
    assert_eq!(args.nicknames.len(), 2);
    assert_eq!(args.nicknames[1].nickname, "Doomed");
}

#[test]
fn config_file_then_flags() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"api_key":"from-file","update_delay_ms":5}}"#).unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let args = Args::try_parse_from(["neofeed", "--config", path.as_str(), "--update-delay-ms", "7"]).unwrap();
    let config = args.feed_config().unwrap();
    assert_eq!(config.api_key, "from-file");
    assert_eq!(config.update_delay_ms, 7);
}

#[test]
fn invalid_date_is_reported() {
    let args = Args::try_parse_from(["neofeed", "--date", "yesterday"]).unwrap();
    let err = args.feed_query().unwrap_err();
    assert!(err.to_string().contains("yesterday"));
}

#[test]
fn empty_api_key_is_rejected() {
    let args = Args::try_parse_from(["neofeed", "--api-key", ""]).unwrap();
    assert!(args.feed_config().is_err());
}

#[test]
fn render_lists_every_neo() {
    let neos = vec![
        Neo::new("1", "(2018 PV24)", 0.07, false),
        Neo::new("2", "(2018 RC)", 0.2, true).with_nickname("Rocky"),
    ];
    let table = render_neo_list(&neos);
    let lines: Vec<&str> = table.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("NAME"));
    assert!(lines[1].contains("(2018 PV24)"));
    assert!(lines[1].contains("0.070"));
    assert!(lines[1].ends_with("no"));
    assert!(lines[2].contains("Rocky"));
    assert!(lines[2].ends_with("yes"));
}

#[test]
fn render_empty_list_has_header_only() {
    assert_eq!(render_neo_list(&[]).lines().count(), 1);
}
