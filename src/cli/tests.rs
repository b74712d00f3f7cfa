use super::*;

use clap::CommandFactory;

fn parse<const N: usize>(args: [&str; N]) -> Result<Opt, clap::Error> {
    Opt::try_parse_args(std::iter::once("agrep").chain(args))
}

#[test]
fn test_command() {
    Opt::command().debug_assert();
}

#[test]
fn test_minimal() {
    let opt = parse(["needle"]).unwrap();
    assert_eq!(opt.pattern, "needle");
    assert_eq!(opt.path, PathBuf::from("."));
}

#[test]
fn test_all_options() {
    let opt = parse([
        "--timeout",
        "1m 5s",
        "--path",
        "src",
        "--file-pattern",
        "*.rs",
        "--pattern-type",
        "literal",
        "-C",
        "4",
        "--config",
        "my.toml",
        "needle",
    ])
    .unwrap();
    assert_eq!(opt.timeout, Some(Duration::from_secs(65)));
    assert_eq!(opt.path, PathBuf::from("src"));
    assert_eq!(opt.file_pattern.as_deref(), Some("*.rs"));
    assert_eq!(opt.pattern_type, Some(PatternType::Literal));
    assert_eq!(opt.concurrency, Some(4));
    assert_eq!(opt.config, Some(PathBuf::from("my.toml")));
    assert_eq!(opt.pattern, "needle");
}

#[test]
fn test_filepattern_alias() {
    let opt = parse(["--filepattern", "*.go", "needle"]).unwrap();
    assert_eq!(opt.file_pattern.as_deref(), Some("*.go"));
}

#[test]
fn test_last_value_wins() {
    let opt = parse(["--timeout", "1s", "--timeout", "3s", "needle"]).unwrap();
    assert_eq!(opt.timeout, Some(Duration::from_secs(3)));
}

#[test]
fn test_missing_pattern() {
    let err = parse([]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_invalid_pattern_type() {
    let err = parse(["--pattern-type", "regex", "needle"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    assert!(err.to_string().contains("invalid pattern type"));
}

#[test]
fn test_env_lookup_disabled() {
    let command = Opt::command().mut_args(|arg| arg.env(clap::builder::Resettable::Reset));
    assert!(command.get_arguments().all(|arg| arg.get_env().is_none()));

    let opt = parse(["needle"]).unwrap();
    assert_eq!(opt.timeout, None);
    assert_eq!(opt.file_pattern, None);
    assert_eq!(opt.pattern_type, None);
    assert_eq!(opt.concurrency, None);
    assert_eq!(opt.config, None);
}

#[test]
fn test_env_names() {
    let command = Opt::command();
    let env = |id: &str| {
        command
            .get_arguments()
            .find(|arg| arg.get_id() == id)
            .and_then(|arg| arg.get_env())
            .map(|name| name.to_string_lossy().into_owned())
    };
    assert_eq!(env("timeout").as_deref(), Some("AGREP_TIMEOUT"));
    assert_eq!(env("file_pattern").as_deref(), Some("AGREP_FILE_PATTERN"));
    assert_eq!(env("pattern_type").as_deref(), Some("AGREP_PATTERN_TYPE"));
    assert_eq!(env("concurrency").as_deref(), Some("AGREP_CONCURRENCY"));
    assert_eq!(env("config").as_deref(), Some("AGREP_CONFIG"));
    assert_eq!(env("path"), None);
}

#[test]
fn test_invalid_timeout() {
    let err = parse(["--timeout", "soon", "needle"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
}
