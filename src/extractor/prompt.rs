/// Builds the extraction instruction prompt for a transcript.
///
/// The instructions pin down everything the parser depends on: a bare JSON
/// array with exactly the keys `task`, `owner`, `due_date`, the
/// `"Name: sentence"` speaker convention, and empty-string (never null or
/// omitted) absent due dates.
pub fn build_extraction_prompt(transcript: &str) -> String {
    format!(
        r#"Extract action items from the meeting transcript below.

Return ONLY a JSON array of objects with exactly these keys: "task", "owner", "due_date".

Rules:
- If a line is formatted as "Name: sentence", "Name" is the owner and the rest is the task.
- "due_date" must be formatted as YYYY-MM-DD. If no due date is mentioned, use an empty string "" - never null, never omit the key.
- If the owner is unknown, use an empty string "".
- Respond with the JSON array only. No explanation, no markdown fences.

Example output:
[{{"task": "Submit the budget report", "owner": "Alice", "due_date": "2024-03-01"}}]

Transcript:
{transcript}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_contains_transcript() {
        let prompt = build_extraction_prompt("John: I will send the notes.");
        assert!(prompt.contains("John: I will send the notes."));
    }

    #[test]
    fn test_prompt_states_output_contract() {
        let prompt = build_extraction_prompt("irrelevant");
        assert!(prompt.contains("\"task\""));
        assert!(prompt.contains("\"owner\""));
        assert!(prompt.contains("\"due_date\""));
        assert!(prompt.contains("YYYY-MM-DD"));
        assert!(prompt.contains("No explanation"));
    }
}
