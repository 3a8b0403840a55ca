//! Canned chat replies and the file-search placeholder.

use rand::Rng;

pub const SEARCH_NOTICE: &str = "Note: Full file search requires file indexing setup";
pub const SEARCH_PLACEHOLDER: &str = "This is a placeholder for the search functionality";

const REPLY_COUNT: usize = 3;

fn reply_template(index: usize, message: &str) -> String {
    match index {
        0 => format!("I understand: '{message}'. How can I help you with that?"),
        1 => format!("Got it! You're asking about '{message}'."),
        _ => format!("I'm here to help! What would you like to do regarding '{message}'?"),
    }
}

/// Every reply `chat_reply` can produce for `message`.
pub fn possible_replies(message: &str) -> Vec<String> {
    (0..REPLY_COUNT)
        .map(|index| reply_template(index, message))
        .collect()
}

/// Picks one canned reply uniformly at random. Nothing is remembered between calls.
pub fn chat_reply<R: Rng>(message: &str, rng: &mut R) -> String {
    reply_template(rng.random_range(0..REPLY_COUNT), message)
}

/// Normalised query echoed back by the search placeholder.
pub fn search_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}
