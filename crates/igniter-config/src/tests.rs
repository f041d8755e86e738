//! Tests for the configuration environment.

use super::*;

#[test]
fn test_toml_flattening() {
    let env = Environment::from_toml_str(
        r#"
        [igniter]
        enabled = false
        exclude = ["unit-a", "unit-b"]

        [datastore]
        url = "postgres://localhost/app"
        pool-size = 8
    "#,
    )
    .unwrap();

    assert_eq!(env.get("igniter.enabled"), Some("false"));
    assert_eq!(env.get("igniter.exclude"), Some("unit-a,unit-b"));
    assert_eq!(env.get("datastore.url"), Some("postgres://localhost/app"));
    assert_eq!(env.get("datastore.pool-size"), Some("8"));
    assert_eq!(env.get("missing"), None);
}

#[test]
fn test_yaml_flattening() {
    let env = Environment::from_yaml_str(
        r#"
        igniter:
          enabled: true
          exclude:
            - unit-a
            - unit-b
        datastore:
          url: postgres://localhost/app
    "#,
    )
    .unwrap();

    assert_eq!(env.get("igniter.enabled"), Some("true"));
    assert_eq!(env.get_list("igniter.exclude"), vec!["unit-a", "unit-b"]);
    assert_eq!(env.get("datastore.url"), Some("postgres://localhost/app"));
}

#[test]
fn test_first_source_wins() {
    let env = Environment::new()
        .with_source(PropertySource::from_pairs("override", [("key", "first")]))
        .with_source(PropertySource::from_pairs("defaults", [("key", "second"), ("other", "x")]));

    assert_eq!(env.get("key"), Some("first"));
    assert_eq!(env.get("other"), Some("x"));
}

#[test]
fn test_get_bool() {
    let env = Environment::new().with_source(PropertySource::from_pairs(
        "test",
        [("on", "TRUE"), ("off", "false"), ("bad", "yes-please")],
    ));

    assert!(env.get_bool("on", false).unwrap());
    assert!(!env.get_bool("off", true).unwrap());
    assert!(env.get_bool("absent", true).unwrap());
    assert!(!env.get_bool("absent", false).unwrap());
    assert!(matches!(
        env.get_bool("bad", true),
        Err(ConfigError::InvalidBool { .. })
    ));
}

#[test]
fn test_get_list_trims_and_drops_empties() {
    let env = Environment::new().with_source(PropertySource::from_pairs(
        "test",
        [("list", " a , b ,, c ")],
    ));
    assert_eq!(env.get_list("list"), vec!["a", "b", "c"]);
    assert!(env.get_list("absent").is_empty());
}

#[test]
fn test_placeholder_resolution() {
    let env = Environment::new().with_source(PropertySource::from_pairs(
        "test",
        [("app.home", "/opt/app"), ("app.name", "demo")],
    ));

    assert_eq!(
        env.resolve_placeholders("${app.home}/conf/${app.name}.toml")
            .unwrap(),
        "/opt/app/conf/demo.toml"
    );
    assert_eq!(env.resolve_placeholders("no placeholders").unwrap(), "no placeholders");
}

#[test]
fn test_unresolvable_placeholder_is_error() {
    let env = Environment::new();
    assert!(matches!(
        env.resolve_placeholders("${nope}"),
        Err(ConfigError::UnresolvablePlaceholder(key)) if key == "nope"
    ));
    assert!(matches!(
        env.resolve_placeholders("${unterminated"),
        Err(ConfigError::UnresolvablePlaceholder(_))
    ));
}
