mod common;

use common::TicketAppTest;

#[test]
fn test_config_show_defaults() {
    let t = TicketAppTest::bare();
    let json = t.run_json(&["config", "show"]);
    assert_eq!(json["latency_ms"], 200);
    assert_eq!(json["require_login"], true);
    assert!(json["notification_ms"].as_u64().unwrap() > 0);
    assert!(
        json["config_file"]
            .as_str()
            .unwrap()
            .ends_with("config.yaml")
    );
}

#[test]
fn test_config_set_and_get() {
    let t = TicketAppTest::bare();
    let json = t.run_json(&["config", "set", "latency_ms", "0"]);
    assert_eq!(json["key"], "latency_ms");
    assert_eq!(json["value"], "0");

    let json = t.run_json(&["config", "get", "latency_ms"]);
    assert_eq!(json["value"], "0");

    t.run_success(&["config", "set", "require_login", "off"]);
    let stdout = t.run_success(&["config", "get", "require_login"]);
    assert_eq!(stdout.trim(), "false");

    let content = std::fs::read_to_string(t.root().join("config.yaml")).unwrap();
    assert!(content.contains("require_login: false"));
}

#[test]
fn test_config_rejects_bad_input() {
    let t = TicketAppTest::bare();
    let stderr = t.run_failure(&["config", "get", "colour"]);
    assert!(stderr.contains("unknown config key 'colour'"));

    let stderr = t.run_failure(&["config", "set", "latency_ms", "fast"]);
    assert!(stderr.contains("expected milliseconds"));

    let stderr = t.run_failure(&["config", "set", "require_login", "maybe"]);
    assert!(stderr.contains("expected true or false"));
    assert!(!t.root().join("config.yaml").exists());
}

#[test]
fn test_invalid_config_file_is_reported() {
    let t = TicketAppTest::bare();
    t.write_config("latency_ms: [1, 2\n");
    let stderr = t.run_failure(&["config", "show"]);
    assert!(!stderr.is_empty());
}

#[test]
fn test_completions() {
    let t = TicketAppTest::bare();
    let stdout = t.run_success(&["completions", "bash"]);
    assert!(stdout.contains("ticketapp"));
}
