pub mod id;

use jiff::Timestamp;

pub use id::{generate_hash, generate_ticket_id, generate_uuid};

/// Get the current timestamp in ISO format, truncated to seconds
pub fn iso_date() -> String {
    let now = Timestamp::now();
    now.strftime("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Truncate a string to at most `max_chars` characters, appending "..." when cut.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let keep = max_chars.saturating_sub(3);
    let mut out: String = s.chars().take(keep).collect();
    out.push_str("...");
    out
}
