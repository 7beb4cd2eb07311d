//! Integration tests for the `yql-suggest` binary in offline mode

use std::fs;
use std::process::Command;
use tempfile::TempDir;

const SNAPSHOT: &str = r#"{
    "listings": {
        "": [
            {"Name": "orders", "Type": "table"},
            {"Name": "shop", "Type": "dir"}
        ],
        "shop/": [
            {"Name": "items", "Type": "table"}
        ]
    },
    "columns": {
        "orders": [
            {"Name": "id", "Type": "column", "Parent": "/local/orders", "PKIndex": 0},
            {"Name": "total", "Type": "column", "Parent": "/local/orders"}
        ]
    }
}"#;

fn run(dir: &TempDir, context: &str, extra: &[&str]) -> serde_json::Value {
    let context_path = dir.path().join("context.json");
    let catalog_path = dir.path().join("catalog.json");
    let config_path = dir.path().join("config.toml");
    fs::write(&context_path, context).unwrap();
    fs::write(&catalog_path, SNAPSHOT).unwrap();
    fs::write(&config_path, "database = \"/local\"\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_yql-suggest"))
        .arg("--context")
        .arg(&context_path)
        .arg("--catalog")
        .arg(&catalog_path)
        .arg("--config")
        .arg(&config_path)
        .args(extra)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

fn insert_texts(items: &serde_json::Value) -> Vec<String> {
    items
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["insertText"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_columns_from_snapshot() {
    let dir = TempDir::new().unwrap();
    let items = run(
        &dir,
        r#"{"suggestColumns": {"all": true, "tables": [{"name": "orders"}]}}"#,
        &["--line", "1", "--column", "8"],
    );

    assert_eq!(insert_texts(&items), ["id", "total", "id, total"]);
    assert_eq!(items[0]["label"]["description"], "PK0");
    assert_eq!(items[0]["range"]["startColumn"], 8);
    assert_eq!(items[0]["kind"], 4);
}

#[test]
fn test_prefix_from_query_text() {
    let dir = TempDir::new().unwrap();
    let query_path = dir.path().join("query.yql");
    fs::write(&query_path, "SELECT * FROM shop/it").unwrap();

    let items = run(
        &dir,
        r#"{"suggestEntity": ["table"]}"#,
        &[
            "--query",
            query_path.to_str().unwrap(),
            "--line",
            "1",
            "--column",
            "22",
        ],
    );

    assert_eq!(insert_texts(&items), ["items"]);
    assert_eq!(items[0]["range"]["startColumn"], 20);
    assert_eq!(items[0]["range"]["endColumn"], 22);
}

#[test]
fn test_invalid_context_fails() {
    let dir = TempDir::new().unwrap();
    let context_path = dir.path().join("context.json");
    let config_path = dir.path().join("config.toml");
    fs::write(&context_path, "not json").unwrap();
    fs::write(&config_path, "").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_yql-suggest"))
        .arg("--context")
        .arg(&context_path)
        .arg("--config")
        .arg(&config_path)
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("parser context"));
}
