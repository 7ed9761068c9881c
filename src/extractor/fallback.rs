use crate::extractor::types::ActionItem;

/// Cue words marking a sentence as actionable. Case-insensitive substring
/// match; this set is stable and part of the documented behavior.
pub const CUE_WORDS: &[&str] = &[
    "will", "prepare", "review", "send", "complete", "submit", "finalize",
];

/// Maximum number of items the fallback returns. It is a best-effort safety
/// net, not exhaustive extraction; an unbounded result could overwhelm the
/// consuming UI.
pub const MAX_FALLBACK_ITEMS: usize = 10;

/// Rule-based offline extractor used when the LLM path is unavailable.
///
/// Pure and deterministic: recognizes only the `Owner: sentence` speaker
/// convention, keeps lines whose sentence contains a cue word, and preserves
/// original line order. Fallback items never carry a due date.
pub fn extract_fallback(transcript: &str) -> Vec<ActionItem> {
    transcript
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.is_empty() {
                return None;
            }
            // Only speaker-prefixed lines are recognized
            let (owner, sentence) = line.split_once(':')?;
            let owner = owner.trim();
            let sentence = sentence.trim();
            if owner.is_empty() || sentence.is_empty() {
                return None;
            }
            let lower = sentence.to_lowercase();
            if !CUE_WORDS.iter().any(|cue| lower.contains(cue)) {
                return None;
            }
            Some(ActionItem {
                task: sentence.to_string(),
                owner: owner.to_string(),
                due_date: String::new(),
            })
        })
        .take(MAX_FALLBACK_ITEMS)
        .collect()
}
