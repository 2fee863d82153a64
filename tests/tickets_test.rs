mod common;

use common::TicketAppTest;

#[test]
fn test_create_then_ls_newest_first() {
    let t = TicketAppTest::logged_in();
    let first = t.create("First");
    let second = t.create("Second");
    assert_ne!(first, second);

    let tickets = t.run_json(&["ls"]);
    let tickets = tickets.as_array().unwrap();
    assert_eq!(tickets.len(), 2);
    assert_eq!(tickets[0]["id"], second.as_str());
    assert_eq!(tickets[0]["title"], "Second");
    assert_eq!(tickets[0]["status"], "open");
    assert_eq!(tickets[1]["id"], first.as_str());
}

#[test]
fn test_create_with_description_and_status() {
    let t = TicketAppTest::logged_in();
    let json = t.run_json(&[
        "create",
        "  Fix bug  ",
        "-d",
        "Crashes on save",
        "-s",
        "in_progress",
    ]);
    assert_eq!(json["action"], "created");
    assert_eq!(json["message"], "Ticket created");
    assert_eq!(json["ticket"]["title"], "Fix bug");
    assert_eq!(json["ticket"]["description"], "Crashes on save");
    assert_eq!(json["ticket"]["status"], "in_progress");
}

#[test]
fn test_create_text_output() {
    let t = TicketAppTest::logged_in();
    let stdout = t.run_success(&["create", "Plain output"]);
    assert!(stdout.contains("Ticket created"));
    assert!(stdout.contains("Plain output"));
    assert!(stdout.contains("No description"));
}

#[test]
fn test_create_requires_title() {
    let t = TicketAppTest::logged_in();
    let stderr = t.run_failure(&["create", "   "]);
    assert!(stderr.contains("title: "));
    assert!(stderr.contains("Title is required"));
    assert!(t.read_tickets_raw().is_none());
}

#[test]
fn test_create_rejects_long_description() {
    let t = TicketAppTest::logged_in();
    let description = "x".repeat(1001);
    let stderr = t.run_failure(&["create", "Fix bug", "-d", &description]);
    assert!(stderr.contains("Description is too long (max 1000 chars)"));
    assert!(t.read_tickets_raw().is_none());

    let description = "x".repeat(1000);
    t.run_success(&["create", "Fix bug", "-d", &description]);
}

#[test]
fn test_create_rejects_unknown_status() {
    let t = TicketAppTest::logged_in();
    let stderr = t.run_failure(&["create", "Fix bug", "-s", "done"]);
    assert!(stderr.contains("Invalid status"));
    assert!(t.read_tickets_raw().is_none());
}

#[test]
fn test_ls_status_filter() {
    let t = TicketAppTest::logged_in();
    t.create("Open one");
    t.run_success(&["create", "Closed one", "-s", "closed"]);

    let closed = t.run_json(&["ls", "--status", "closed"]);
    let closed = closed.as_array().unwrap();
    assert_eq!(closed.len(), 1);
    assert_eq!(closed[0]["title"], "Closed one");

    let stderr = t.run_failure(&["ls", "--status", "done"]);
    assert!(stderr.contains("Invalid status. Must be one of: open, in_progress, closed"));
}

#[test]
fn test_ls_empty() {
    let t = TicketAppTest::logged_in();
    let stdout = t.run_success(&["ls"]);
    assert!(stdout.contains("No tickets"));
    assert_eq!(t.run_json(&["ls"]), serde_json::json!([]));
}

#[test]
fn test_show_by_full_and_partial_id() {
    let t = TicketAppTest::logged_in();
    let id = t.create("Lookup");

    let json = t.run_json(&["show", &id]);
    assert_eq!(json["title"], "Lookup");

    // With a single ticket any prefix is unique
    let prefix = &id[..2];
    let json = t.run_json(&["show", prefix]);
    assert_eq!(json["id"], id.as_str());

    let stderr = t.run_failure(&["show", "zzzzzzzz-missing"]);
    assert!(stderr.contains("not found"));
}

#[test]
fn test_show_ambiguous_prefix() {
    let t = TicketAppTest::logged_in();
    let first = t.create("One");
    let second = t.create("Two");

    let common: String = first
        .chars()
        .zip(second.chars())
        .take_while(|(a, b)| a == b)
        .map(|(a, _)| a)
        .collect();
    assert!(!common.is_empty());

    let stderr = t.run_failure(&["show", &common]);
    assert!(stderr.contains("ambiguous"));
}

#[test]
fn test_update_changes_fields() {
    let t = TicketAppTest::logged_in();
    let id = t.run_json(&["create", "Old", "-d", "Keep me"])["ticket"]["id"]
        .as_str()
        .unwrap()
        .to_string();

    let json = t.run_json(&["update", &id, "--title", "New", "--status", "closed"]);
    assert_eq!(json["action"], "updated");
    assert_eq!(json["ticket"]["title"], "New");
    assert_eq!(json["ticket"]["status"], "closed");
    assert_eq!(json["ticket"]["description"], "Keep me");

    // An empty description clears it
    let json = t.run_json(&["update", &id, "--description", ""]);
    assert!(json["ticket"].get("description").is_none());

    let tickets = t.run_json(&["ls"]);
    assert_eq!(tickets.as_array().unwrap().len(), 1);
}

#[test]
fn test_update_validation_leaves_storage_unchanged() {
    let t = TicketAppTest::logged_in();
    let id = t.create("Stable");
    let before = t.read_tickets_raw();

    let stderr = t.run_failure(&["update", &id, "--title", ""]);
    assert!(stderr.contains("Title is required"));
    assert_eq!(t.read_tickets_raw(), before);
}

#[test]
fn test_update_missing_ticket() {
    let t = TicketAppTest::logged_in();
    t.create("Only");
    let before = t.read_tickets_raw();

    let stderr = t.run_failure(&["update", "no-such-id", "--title", "X"]);
    assert!(stderr.contains("not found"));
    assert_eq!(t.read_tickets_raw(), before);
}

#[test]
fn test_delete_with_yes() {
    let t = TicketAppTest::logged_in();
    let id = t.create("A");

    let json = t.run_json(&["delete", &id, "--yes"]);
    assert_eq!(json["action"], "deleted");
    assert_eq!(json["id"], id.as_str());
    assert_eq!(t.run_json(&["ls"]), serde_json::json!([]));
}

#[test]
fn test_delete_prompt_cancel_and_confirm() {
    let t = TicketAppTest::logged_in();
    let id = t.create("Broken login");

    let output = t.run_with_input(&["delete", &id], "n\n");
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Are you sure you want to delete Broken login?"));
    assert!(String::from_utf8_lossy(&output.stdout).contains("Cancelled"));
    assert_eq!(t.run_json(&["ls"]).as_array().unwrap().len(), 1);

    let output = t.run_with_input(&["delete", &id], "yes\n");
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Ticket deleted"));
    assert_eq!(t.run_json(&["ls"]), serde_json::json!([]));
}

#[test]
fn test_malformed_storage_reads_as_empty() {
    let t = TicketAppTest::logged_in();
    t.write_tickets_raw("42");
    assert_eq!(t.run_json(&["ls"]), serde_json::json!([]));

    t.write_tickets_raw("{not json");
    assert_eq!(t.run_json(&["ls"]), serde_json::json!([]));
}

#[test]
fn test_legacy_priority_field_is_removed_on_open() {
    let t = TicketAppTest::logged_in();
    t.write_tickets_raw(
        r#"[{"id":"a1","title":"Old","status":"open","priority":"high"},
            {"id":"b2","title":"Clean","status":"closed"}]"#,
    );

    let tickets = t.run_json(&["ls"]);
    assert_eq!(tickets.as_array().unwrap().len(), 2);

    let raw = t.read_tickets_raw().unwrap();
    assert!(!raw.contains("priority"));
    assert!(raw.contains("Clean"));
}

#[test]
fn test_dashboard_counts() {
    let t = TicketAppTest::logged_in();
    t.create("One");
    t.run_success(&["create", "Two", "-s", "in_progress"]);
    t.run_success(&["create", "Three", "-s", "in_progress"]);

    let json = t.run_json(&["dashboard"]);
    assert_eq!(json["open"], 1);
    assert_eq!(json["in_progress"], 2);
    assert_eq!(json["closed"], 0);
    assert_eq!(json["total"], 3);

    let table = t.run_success(&["dashboard"]);
    assert!(table.contains("in progress"));
    assert!(table.contains("total"));
}

#[test]
fn test_validation_errors_printed_once() {
    let t = TicketAppTest::logged_in();
    let stderr = t.run_failure(&["create", ""]);
    assert_eq!(stderr.matches("Title is required").count(), 1);
    assert!(!stderr.contains("validation failed"));
}
