//! Registry key normalization.

/// Canonical registry key for a user-supplied command name.
///
/// Separators (`-`, `_`, `.`, whitespace) are dropped and the letter after
/// each one is uppercased, as is the first letter. Every other letter keeps
/// its case, so `new-thing` maps to `NewThing` while `HELP` stays `HELP`.
/// The empty string maps to itself.
pub fn classify(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    let mut word_start = true;
    for ch in name.chars() {
        if is_separator(ch) {
            word_start = true;
        } else if word_start {
            key.extend(ch.to_uppercase());
            word_start = false;
        } else {
            key.push(ch);
        }
    }
    key
}

fn is_separator(ch: char) -> bool {
    matches!(ch, '-' | '_' | '.') || ch.is_whitespace()
}
