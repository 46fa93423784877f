//! Route files: loading from disk and building a table from them.

use std::fs;
use std::path::PathBuf;

use uri_route::config::{load_config, ConfigError};
use uri_route::{RouteError, RouteTable};

mod common;
use common::{params, Recorder};

const ROUTES: &str = r#"
[observability]
log_level = "debug"

[[routes]]
name = "foobar"
pattern = "/foo/bar"

[[routes]]
name = "article"
pattern = "/article(/<action>(/<param>))"
[routes.groups]
action = "(list|view|edit)"
param = '\d+'
[routes.defaults]
controller = "article"
action = "list"

[[routes]]
name = "default"
pattern = "/(<controller>(/<action>(/<param>)))"
"#;

/// Write `content` to a file unique to this test.
fn write_routes(test: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("uri-route-{}-{}.toml", test, std::process::id()));
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_table_from_route_file() {
    let path = write_routes("table", ROUTES);
    let config = load_config(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(config.observability.log_level, "debug");

    let recorder = Recorder::new();
    let table = RouteTable::from_config(&config.routes, recorder.callback()).unwrap();
    assert_eq!(table.names().collect::<Vec<_>>(), ["foobar", "article", "default"]);

    assert!(table.submit("/article"));
    assert_eq!(
        recorder.last(),
        Some((
            params(&[("controller", Some("article")), ("action", Some("list")), ("param", None)]),
            "/article".to_string()
        ))
    );

    assert_eq!(table.resolve("/foo/bar").unwrap().route, "foobar");
    assert_eq!(table.resolve("/article/view/7").unwrap().route, "article");
    assert_eq!(table.resolve("/article/other").unwrap().route, "default");
    assert_eq!(table.resolve("/article/view/seven").unwrap().route, "default");
    assert!(table.resolve("/article/view/7/8").is_none());
}

#[test]
fn test_invalid_route_file_reports_every_error() {
    let path = write_routes(
        "invalid",
        r#"
[[routes]]
name = "a"
pattern = ""

[[routes]]
name = "b"
pattern = "/<id>/<id>"

[[routes]]
name = "b"
pattern = "/b"
"#,
    );
    let err = load_config(&path).unwrap_err();
    fs::remove_file(&path).unwrap();

    match err {
        ConfigError::Validation(errors) => assert_eq!(errors.len(), 3),
        other => panic!("expected validation error, got {other}"),
    }
}

#[test]
fn test_from_config_without_validation() {
    let config = uri_route::config::schema::RouteFileConfig {
        routes: vec![uri_route::config::RouteConfig {
            name: "empty".into(),
            pattern: String::new(),
            groups: Default::default(),
            defaults: Default::default(),
        }],
        ..Default::default()
    };

    let recorder = Recorder::new();
    let err = RouteTable::from_config(&config.routes, recorder.callback()).unwrap_err();
    assert!(matches!(err, RouteError::EmptyPattern(ref name) if name == "empty"));
}
