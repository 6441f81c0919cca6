//! Input adapter: raw keys and pad button ids to calculator intents.
//!
//! Keys follow browser key names (`Enter`, `Backspace`, `Escape`) plus the
//! printable characters `0-9 . + - * / =`. Button ids are the names wired
//! on the on-screen pad (`add`, `equals`, `decimal`, ...). Anything else is
//! ignored.

use super::types::{Digit, Intent, Operation};

/// Map one keyboard key to an intent
pub fn intent_for_key(key: &str) -> Option<Intent> {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return intent_for_char(c);
    }

    match key.to_ascii_lowercase().as_str() {
        "enter" => Some(Intent::Equals),
        "backspace" => Some(Intent::Delete),
        "escape" => Some(Intent::Clear),
        _ => None,
    }
}

/// Map a pad button id to an intent
pub fn intent_for_button(id: &str) -> Option<Intent> {
    if let Ok(op) = id.parse::<Operation>() {
        return Some(Intent::Operator(op));
    }

    match id {
        "equals" => Some(Intent::Equals),
        "clear" => Some(Intent::Clear),
        "delete" => Some(Intent::Delete),
        "decimal" => Some(Intent::Decimal),
        _ => {
            let mut chars = id.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Digit::try_from(c).ok().map(Intent::Digit),
                _ => None,
            }
        }
    }
}

fn intent_for_char(c: char) -> Option<Intent> {
    if let Ok(digit) = Digit::try_from(c) {
        return Some(Intent::Digit(digit));
    }

    match c {
        '.' => Some(Intent::Decimal),
        '+' => Some(Intent::Operator(Operation::Add)),
        '-' => Some(Intent::Operator(Operation::Subtract)),
        '*' => Some(Intent::Operator(Operation::Multiply)),
        '/' => Some(Intent::Operator(Operation::Divide)),
        '=' => Some(Intent::Equals),
        _ => None,
    }
}

/// Whole-token key names and button ids win; otherwise each character is a key.
pub fn intents_for_token(token: &str) -> Vec<Intent> {
    if let Some(intent) = intent_for_key(token).or_else(|| intent_for_button(token)) {
        return vec![intent];
    }

    token
        .chars()
        .filter_map(|c| {
            let intent = intent_for_char(c);
            if intent.is_none() {
                tracing::debug!(key = %c, "Ignoring unmapped key");
            }
            intent
        })
        .collect()
}

pub fn intents_for_line(line: &str) -> Vec<Intent> {
    line.split_whitespace().flat_map(intents_for_token).collect()
}
