use super::*;
use clap::CommandFactory;
use std::path::PathBuf;

#[test]
fn cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn parses_show_with_slideshow_flags() {
    let cli = Cli::try_parse_from([
        "glimpse",
        "show",
        "--slideshow",
        "-i",
        "3",
        "--rounds",
        "2",
        "-a",
        "a.png",
        "b.png",
    ])
    .expect("parse");

    match cli.command {
        Command::Show(args) => {
            assert!(args.slideshow);
            assert_eq!(args.interval, Some(3));
            assert_eq!(args.rounds, 2);
            assert!(args.open.hidden);
            assert_eq!(args.paths, vec![PathBuf::from("a.png"), PathBuf::from("b.png")]);
        }
        other => panic!("expected show, got {other:?}"),
    }
}

#[test]
fn parses_file_actions() {
    let cli = Cli::try_parse_from(["glimpse", "delete", "--permanent", "x.png"]).expect("parse");
    assert!(matches!(cli.command, Command::Delete(ref a) if a.permanent));

    let cli = Cli::try_parse_from(["glimpse", "rename", "x.png", "y.png"]).expect("parse");
    assert!(matches!(cli.command, Command::Rename(ref a) if a.new_name == "y.png"));

    assert!(Cli::try_parse_from(["glimpse", "move", "x.png"]).is_err());
}

#[test]
fn list_defaults() {
    let cli = Cli::try_parse_from(["glimpse", "list"]).expect("parse");
    match cli.command {
        Command::List(args) => {
            assert!(args.paths.is_empty());
            assert!(!args.json);
            assert_eq!(args.color, "auto");
        }
        other => panic!("expected list, got {other:?}"),
    }
}
