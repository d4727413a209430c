use std::path::Path;

use specrunner_args_core::{
    ArgumentParser, Formatter, OptionFamily, OptionTable, OptionValue, ParseError, RunnerConfig,
    parse_arguments,
};
use tempfile::NamedTempFile;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn program_file() -> NamedTempFile {
    NamedTempFile::new().unwrap()
}

fn with_program(program: &Path, rest: &[&str]) -> Vec<String> {
    let mut args = vec![program.to_string_lossy().into_owned()];
    args.extend(rest.iter().map(|s| s.to_string()));
    args
}

fn assert_bool(table: &OptionTable, keys: &[&str], expected: bool) {
    for key in keys {
        assert_eq!(table.get(key).unwrap().as_bool(), Some(expected), "key {key}");
    }
}

// ---------------------------------------------------------------------------
// End to end
// ---------------------------------------------------------------------------

#[test]
fn test_program_spec_file_and_flags() {
    let program = program_file();
    let table = parse_arguments(with_program(
        program.path(),
        &["mySpec.php", "-c", "--fail-fast"],
    ))
    .unwrap();

    assert_eq!(table.spec_file(), "mySpec.php");
    assert_bool(&table, &["c", "color", "colour", "fail-fast"], true);
    assert_bool(&table, &["h", "help", "b", "backtrace", "version", "noneGiven"], false);
    assert_eq!(table.get("f").unwrap().as_str(), Some("p"));
    assert_eq!(table.get("formatter").unwrap().as_str(), Some("p"));
}

#[test]
fn test_program_path_never_leaks_into_table() {
    let program = program_file();
    let program_path = program.path().to_string_lossy().into_owned();
    let table = parse_arguments(with_program(program.path(), &["-b"])).unwrap();

    assert_eq!(table.spec_file(), "");
    for (_, value) in table.entries() {
        assert_ne!(value, OptionValue::Str(program_path.clone()));
    }
}

#[test]
fn test_program_followed_by_option_only() {
    let program = program_file();
    let table = parse_arguments(with_program(program.path(), &["--version"])).unwrap();
    assert!(table.version());
    assert_eq!(table.spec_file(), "");
}

#[test]
fn test_program_alone_is_invalid() {
    let program = program_file();
    assert_eq!(
        parse_arguments(with_program(program.path(), &[])),
        Err(ParseError::InvalidArguments)
    );
}

#[test]
fn test_spec_file_is_not_parsed_as_option() {
    let table = parse_arguments(["spec-without-dash", "-h"]).unwrap();
    assert_eq!(table.spec_file(), "spec-without-dash");
    assert!(table.help());
}

// ---------------------------------------------------------------------------
// Formatter forms
// ---------------------------------------------------------------------------

#[test]
fn test_formatter_forms() {
    let cases: [(&[&str], &str, Formatter); 5] = [
        (&["-fd"], "d", Formatter::Documentation),
        (&["-f", "documentation"], "documentation", Formatter::Documentation),
        (&["--formatter", "html"], "html", Formatter::Html),
        (&["-cft"], "t", Formatter::Textmate),
        (&["-f", "progress"], "progress", Formatter::Progress),
    ];

    for (args, value, kind) in cases {
        let table = parse_arguments(args.iter().copied()).unwrap();
        assert_eq!(table.formatter(), value, "args {args:?}");
        assert_eq!(table.get("f").unwrap().as_str(), Some(value));
        assert_eq!(table.formatter_kind(), kind);
    }
}

#[test]
fn test_detached_value_is_consumed() {
    // "d" must not fall through as a stray token or spec file.
    let table = parse_arguments(["-f", "d", "-b"]).unwrap();
    assert_eq!(table.formatter(), "d");
    assert!(table.backtrace());
    assert_eq!(table.spec_file(), "");
}

#[test]
fn test_formatter_failures() {
    let cases: [&[&str]; 4] = [&["-f", "xml"], &["--formatter"], &["-f"], &["-cf"]];
    for args in cases {
        assert!(
            matches!(
                parse_arguments(args.iter().copied()),
                Err(ParseError::InvalidFormatterArgument(_))
            ),
            "args {args:?}"
        );
    }
}

// ---------------------------------------------------------------------------
// Aliases and errors
// ---------------------------------------------------------------------------

#[test]
fn test_every_family_reads_consistently() {
    let table = parse_arguments(["-cbh", "--version", "--fail-fast", "-ft"]).unwrap();
    for family in OptionFamily::ALL {
        let expected = table.value(family);
        for key in family.keys() {
            assert_eq!(table.get(key).unwrap(), expected, "key {key}");
        }
    }
}

#[test]
fn test_unknown_options_abort() {
    assert_eq!(
        parse_arguments(["-c", "--bogus"]),
        Err(ParseError::InvalidOption("bogus".into()))
    );
    assert_eq!(
        parse_arguments(["-bz"]),
        Err(ParseError::InvalidOption("z".into()))
    );
}

#[test]
fn test_empty_arguments() {
    assert_eq!(
        parse_arguments(Vec::<String>::new()),
        Err(ParseError::InvalidArguments)
    );
}

#[test]
fn test_stray_tokens_accepted_and_ignored() {
    let with_stray = parse_arguments(["mySpec.php", "-c", "leftover", "-b"]).unwrap();
    let without = parse_arguments(["mySpec.php", "-c", "-b"]).unwrap();
    assert_eq!(with_stray, without);
}

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

#[test]
fn test_config_file_seeds_parser() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("specrunner.yml");
    std::fs::write(
        &path,
        "version: \"1.0\"\ndefaults:\n  formatter: h\n  backtrace: true\n",
    )
    .unwrap();

    let config = RunnerConfig::load(&path).unwrap();
    let table = config.parser().parse(["mySpec.php", "-c"]).unwrap();
    assert_eq!(table.formatter(), "h");
    assert!(table.backtrace());
    assert!(table.color());

    let overridden = config.parser().parse(["-fd"]).unwrap();
    assert_eq!(overridden.formatter(), "d");
}

#[test]
fn test_default_parser_matches_free_function() {
    let args = ["spec.php", "-bc", "--formatter", "textmate"];
    assert_eq!(
        ArgumentParser::new().parse(args).unwrap(),
        parse_arguments(args).unwrap()
    );
}
