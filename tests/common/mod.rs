#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Runs ticketapp commands against an isolated app root
pub struct TicketAppTest {
    pub temp_dir: TempDir,
}

impl TicketAppTest {
    /// Fresh root with zero latency so commands return immediately.
    pub fn new() -> Self {
        let test = Self::bare();
        test.write_config("latency_ms: 0\n");
        test
    }

    /// Fresh root with no config file at all
    pub fn bare() -> Self {
        TicketAppTest {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Fresh root with a signed-in session
    pub fn logged_in() -> Self {
        let test = Self::new();
        test.run_success(&["login", "--email", "ada@example.com", "--password", "pw"]);
        test
    }

    pub fn root(&self) -> PathBuf {
        self.temp_dir.path().join(".ticketapp")
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_ticketapp"));
        cmd.args(args)
            .current_dir(self.temp_dir.path())
            .env("TICKETAPP_ROOT", self.root())
            .env_remove("TICKETAPP_LOG");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("Failed to execute ticketapp command")
    }

    /// Run with `input` piped to stdin
    pub fn run_with_input(&self, args: &[&str], input: &str) -> Output {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn ticketapp command");
        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input.as_bytes())
            .expect("Failed to write stdin");
        child.wait_with_output().expect("Failed to wait for ticketapp")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded\nstdout: {}",
            args,
            String::from_utf8_lossy(&output.stdout)
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let mut args = args.to_vec();
        args.push("--json");
        let stdout = self.run_success(&args);
        serde_json::from_str(&stdout).expect("Command did not print valid JSON")
    }

    /// Create a ticket and return its id
    pub fn create(&self, title: &str) -> String {
        let json = self.run_json(&["create", title]);
        json["ticket"]["id"]
            .as_str()
            .expect("created ticket has an id")
            .to_string()
    }

    pub fn write_config(&self, content: &str) {
        fs::create_dir_all(self.root()).expect("Failed to create root");
        fs::write(self.root().join("config.yaml"), content).expect("Failed to write config");
    }

    pub fn tickets_path(&self) -> PathBuf {
        self.root().join("ticketapp_tickets.json")
    }

    pub fn session_path(&self) -> PathBuf {
        self.root().join("ticketapp_session.json")
    }

    pub fn read_tickets_raw(&self) -> Option<String> {
        fs::read_to_string(self.tickets_path()).ok()
    }

    pub fn write_tickets_raw(&self, content: &str) {
        fs::create_dir_all(self.root()).expect("Failed to create root");
        fs::write(self.tickets_path(), content).expect("Failed to write tickets");
    }
}
