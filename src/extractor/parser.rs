use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::warn;

use crate::error::ExtractError;
use crate::extractor::types::ActionItem;

// Strict zero-padded shape check; chrono alone accepts "2024-3-1".
static DATE_SHAPE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

/// Locates the first JSON array in free text.
///
/// Models wrap their output in prose despite instructions, so the whole
/// response is never assumed to be JSON. The scan starts at the first `[`
/// and walks forward counting bracket depth, skipping brackets inside JSON
/// string literals (including backslash escapes), until the matching `]`.
/// Returns the spanned substring, or `None` when no balanced array exists.
pub fn locate_json_array(text: &str) -> Option<&str> {
    let start = text.find('[')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + ch.len_utf8()]);
                }
            }
            _ => {}
        }
    }
    None
}

/// Parses model output into cleaned action items.
///
/// Two stages: locate the candidate JSON array substring, then parse and
/// validate it. Each element's `task`, `owner` and `due_date` are read as
/// strings (missing or non-string values become empty) and trimmed. Items
/// with an empty task are dropped; an invalid `due_date` is reset to empty
/// rather than failing the item. Zero surviving items is an error so the
/// pipeline can fall back.
pub fn parse_action_items(content: &str) -> Result<Vec<ActionItem>, ExtractError> {
    let candidate = locate_json_array(content)
        .ok_or_else(|| ExtractError::ContentUnparsable("no JSON array found".to_string()))?;

    let parsed: Value = serde_json::from_str(candidate)
        .map_err(|e| ExtractError::ContentUnparsable(e.to_string()))?;

    let elements = parsed
        .as_array()
        .ok_or_else(|| ExtractError::ContentUnparsable("located JSON is not an array".to_string()))?;

    let items: Vec<ActionItem> = elements
        .iter()
        .map(clean_item)
        .filter(|item| !item.task.is_empty())
        .collect();

    if items.is_empty() {
        return Err(ExtractError::EmptyResult);
    }
    Ok(items)
}

fn clean_item(element: &Value) -> ActionItem {
    let field = |key: &str| -> String {
        element
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or("")
            .trim()
            .to_string()
    };

    let task = field("task");
    let owner = field("owner");
    let mut due_date = field("due_date");

    if !due_date.is_empty() && !is_valid_due_date(&due_date) {
        warn!("Discarding invalid due_date '{}' for task '{}'", due_date, task);
        due_date = String::new();
    }

    ActionItem { task, owner, due_date }
}

/// A due date is valid only as a real calendar date in `YYYY-MM-DD` form.
pub fn is_valid_due_date(value: &str) -> bool {
    DATE_SHAPE.is_match(value) && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}
