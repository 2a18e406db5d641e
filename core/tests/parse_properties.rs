//! End-to-end parsing behavior through the public API.

use argtable_core::{
    ErrorMode, FlagSpec, ParamSpec, ParseError, Registry, ResultValue, Scalar, render_usage,
};

fn server_registry() -> Registry {
    Registry::new(
        vec![ParamSpec::optional("host", 'h', "localhost", "desc")],
        vec![FlagSpec::new("quit", 'q', "desc")],
    )
    .with_error_mode(ErrorMode::Raise)
}

#[test]
fn flags_and_params_with_leftovers() {
    let outcome = server_registry()
        .try_parse(["-q", "extra", "--host", "example.com"])
        .unwrap();

    assert_eq!(outcome.get("quit"), Some(&ResultValue::Bool(true)));
    assert_eq!(
        outcome.get("host"),
        Some(&ResultValue::String("example.com".into()))
    );
    assert_eq!(outcome.values().len(), 2);
    assert_eq!(outcome.leftovers(), ["extra"]);
}

#[test]
fn absent_flags_are_missing_not_false() {
    let registry = Registry::new(
        Vec::new(),
        vec![
            FlagSpec::new("quit", 'q', "desc"),
            FlagSpec::new("verbose", 'v', "desc"),
        ],
    );

    let outcome = registry.try_parse(["--verbose"]).unwrap();
    assert_eq!(outcome.get("verbose"), Some(&ResultValue::Bool(true)));
    assert_eq!(outcome.get("quit"), None);
    assert!(!outcome.is_set("quit"));
}

#[test]
fn defaults_fill_unsupplied_params_exactly() {
    let registry = Registry::new(
        vec![
            ParamSpec::optional("host", 'h', "localhost", "desc"),
            ParamSpec::optional("name", 'n', "", "desc"),
        ],
        Vec::new(),
    );

    let outcome = registry.try_parse(Vec::<String>::new()).unwrap();
    assert_eq!(
        outcome.get("host"),
        Some(&ResultValue::String("localhost".into()))
    );
    assert_eq!(outcome.get("name"), Some(&ResultValue::String(String::new())));
}

#[test]
fn required_param_never_supplied_fails() {
    let registry = Registry::new(vec![ParamSpec::required("port", 'p', "desc")], Vec::new());

    let err = registry.try_parse(["leftover"]).unwrap_err();
    assert_eq!(err, ParseError::MissingRequiredOption("port".into()));
}

#[test]
fn repeated_param_collects_in_order() {
    let registry = Registry::new(vec![ParamSpec::optional("tag", 't', "", "desc")], Vec::new());

    let outcome = registry
        .try_parse(["--tag", "a", "-t", "b", "--tag", "c"])
        .unwrap();
    assert_eq!(
        outcome.get("tag"),
        Some(&ResultValue::List(vec!["a".into(), "b".into(), "c".into()]))
    );
    assert_eq!(outcome.get_one("tag"), Some(Scalar::Text("c")));
    assert_eq!(outcome.get_all("tag").len(), 3);
}

#[test]
fn grouped_param_is_rejected() {
    let registry = Registry::new(
        vec![ParamSpec::optional("count", 'c', "1", "desc")],
        vec![FlagSpec::new("all", 'a', "desc"), FlagSpec::new("brief", 'b', "desc")],
    );

    let err = registry.try_parse(["-abc"]).unwrap_err();
    assert_eq!(
        err,
        ParseError::UngroupableParam {
            long: "count".into(),
            group: "abc".into(),
        }
    );
    assert_eq!(
        err.to_string(),
        "Parameter 'count' found in grouped flags '-abc'."
    );
}

#[test]
fn unknown_character_in_group_is_rejected() {
    let registry = Registry::new(
        vec![ParamSpec::optional("output", 'o', "", "desc")],
        Vec::new(),
    );

    let err = registry.try_parse(["-xo", "value"]).unwrap_err();
    assert_eq!(err, ParseError::UnknownGroupedFlag('x'));
    assert_eq!(err.to_string(), "'x' is not a supported flag.");
}

#[test]
fn param_without_value_fails() {
    let registry = Registry::new(vec![ParamSpec::required("port", 'p', "desc")], Vec::new());

    let err = registry.try_parse(["-p"]).unwrap_err();
    assert_eq!(err, ParseError::MissingParamValue("port".into()));
    assert_eq!(err.to_string(), "Missing argument for 'port' parameter.");
}

#[test]
fn unknown_ungrouped_switches_pass_through() {
    let outcome = server_registry()
        .try_parse(["--unknown", "-z", "sub", "--host", "h1"])
        .unwrap();

    assert_eq!(outcome.leftovers(), ["--unknown", "-z", "sub"]);
    assert_eq!(outcome.get_one("host"), Some(Scalar::Text("h1")));
}

#[test]
fn reparsing_is_idempotent() {
    let registry = server_registry();
    let tokens = vec!["-q", "a", "--host", "x", "b"];

    let first = registry.try_parse(tokens.clone()).unwrap();
    let second = registry.try_parse(tokens).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.into_leftovers(), vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn usage_marks_defaults_and_required() {
    let registry = Registry::new(
        vec![
            ParamSpec::optional("host", 'h', "localhost", "Host"),
            ParamSpec::required("port", 'p', "Port"),
        ],
        Vec::new(),
    );

    let text = render_usage(&registry, "server", None);
    assert!(text.contains("Host [default: localhost]"));
    assert!(text.contains("Port   [required]"));
}

#[test]
fn raise_mode_reports_through_writer() {
    let registry = Registry::new(vec![ParamSpec::required("port", 'p', "Port")], Vec::new())
        .with_error_mode(ErrorMode::Raise);
    let mut sink = Vec::new();

    let err = registry
        .parse_to(["myprog", "--verbose"], &mut sink)
        .unwrap_err();
    assert_eq!(err, ParseError::MissingRequiredOption("port".into()));

    let text = String::from_utf8(sink).unwrap();
    assert_eq!(
        text,
        "Missing required option 'port'.\n\
         Usage: myprog [options]\n\
         Options:\n  \
         -p, --port  Port   [required]\n"
    );
}
