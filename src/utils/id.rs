use std::collections::HashSet;

use jiff::Timestamp;
use rand::Rng;
use uuid::Uuid;

use crate::types::{Ticket, TicketId};

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Generate a random hex hash of the specified length
pub fn generate_hash(length: usize) -> String {
    // Each byte produces 2 hex characters, so we need ceil(length / 2) bytes
    let num_bytes = length.div_ceil(2);
    let mut buf = vec![0u8; num_bytes];
    rand::rng().fill(&mut buf[..]);
    let hex: String = buf.iter().map(|b| format!("{b:02x}")).collect();
    hex[..length].to_string()
}

/// Generate a UUID v4
pub fn generate_uuid() -> String {
    Uuid::new_v4().to_string()
}

/// Encode a non-negative integer in lowercase base 36.
pub fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

/// Time-based id: current Unix milliseconds in base 36.
pub fn timestamp_id() -> String {
    let millis = Timestamp::now().as_millisecond().max(0) as u64;
    to_base36(millis)
}

/// Generate a ticket id that does not collide with any id in `existing`.
///
/// Two tickets created within the same millisecond would share a timestamp
/// id, so a short random hex suffix is appended until the id is free.
pub fn generate_ticket_id(existing: &[Ticket]) -> TicketId {
    let taken: HashSet<&str> = existing.iter().map(|t| t.id.as_str()).collect();
    let base = timestamp_id();
    if !taken.contains(base.as_str()) {
        return TicketId::new(base);
    }

    let mut length = 4;
    loop {
        let candidate = format!("{base}-{}", generate_hash(length));
        if !taken.contains(candidate.as_str()) {
            return TicketId::new(candidate);
        }
        length = (length + 1).min(16);
    }
}
