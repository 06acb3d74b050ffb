use super::{parse_file_settings, resolve_settings, Settings};

use std::{collections::HashMap, path::PathBuf};

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn defaults_without_file_or_env() {
    assert_eq!(resolve_settings(None, &HashMap::new()), Settings::default());
    assert_eq!(Settings::default().server_bind, "127.0.0.1:3000");
}

#[test]
fn file_values_override_defaults() {
    let file_cfg = parse_file_settings("bind_addr = \"0.0.0.0:4000\"\ndata_file = \"db.json\"\n")
        .expect("parse");
    let settings = resolve_settings(Some(&file_cfg), &HashMap::new());

    assert_eq!(settings.server_bind, "0.0.0.0:4000");
    assert_eq!(settings.data_file, Some(PathBuf::from("db.json")));
}

#[test]
fn app_prefixed_env_wins_over_file_and_plain_env() {
    let file_cfg = parse_file_settings("bind_addr = \"0.0.0.0:4000\"\n").expect("parse");
    let settings = resolve_settings(
        Some(&file_cfg),
        &env(&[
            ("SERVER_BIND", "127.0.0.1:5000"),
            ("APP__BIND_ADDR", "127.0.0.1:6000"),
        ]),
    );

    assert_eq!(settings.server_bind, "127.0.0.1:6000");
}

#[test]
fn blank_data_file_disables_persistence() {
    let file_cfg = parse_file_settings("data_file = \"db.json\"\n").expect("parse");
    let settings = resolve_settings(Some(&file_cfg), &env(&[("APP__DATA_FILE", "  ")]));

    assert_eq!(settings.data_file, None);
}

#[test]
fn malformed_file_is_ignored() {
    assert!(parse_file_settings("bind_addr = [").is_none());
}
