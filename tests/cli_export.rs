//! Integration tests for the headless `--export json` mode

use std::fs;
use std::process::{Command, Output};

use tempfile::TempDir;

fn druidscope(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_druidscope"))
        .args(args)
        .output()
        .expect("failed to run druidscope")
}

fn export(args: &[&str]) -> serde_json::Value {
    let output = druidscope(args);
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

#[test]
fn test_export_lists_all_views_with_card_counts() {
    let value = export(&["--export", "json"]);

    let views = value["views"].as_array().unwrap();
    let counts: Vec<(String, u64)> = views
        .iter()
        .map(|v| {
            (
                v["id"].as_str().unwrap().to_string(),
                v["card_count"].as_u64().unwrap(),
            )
        })
        .collect();

    assert_eq!(
        counts,
        vec![
            ("infrastructure".to_string(), 13),
            ("druid-cluster".to_string(), 10),
            ("data-flow".to_string(), 15),
            ("deployment".to_string(), 7),
        ]
    );
}

#[test]
fn test_export_carries_page_framing() {
    let value = export(&["--export", "json"]);

    assert_eq!(value["page"]["header"], "Apache Druid on AWS");
    let stats: Vec<&str> = value["footer_stats"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["label"].as_str().unwrap())
        .collect();
    assert_eq!(stats.len(), 6);
    assert!(stats.contains(&"Availability Zones"));
}

#[test]
fn test_compact_export_is_one_line() {
    let output = druidscope(&["--export", "json", "--compact"]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim_end().lines().count(), 1);

    let pretty = druidscope(&["--export", "json"]);
    assert!(String::from_utf8(pretty.stdout).unwrap().lines().count() > 100);
}

#[test]
fn test_compact_requires_export() {
    let output = druidscope(&["--compact"]);
    assert!(!output.status.success());
}

#[test]
fn test_unknown_view_is_rejected() {
    let output = druidscope(&["--view", "nonexistent", "--export", "json"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("nonexistent"));
}

#[test]
fn test_init_config_writes_file_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    let path_arg = path.to_str().unwrap();

    let first = druidscope(&["--init-config", "--config", path_arg]);
    assert!(first.status.success());
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("[ui]"));

    fs::write(&path, "# edited\n").unwrap();
    let second = druidscope(&["--init-config", "--config", path_arg]);
    assert!(second.status.success());
    assert_eq!(fs::read_to_string(&path).unwrap(), "# edited\n");
}
