// extractor module: LLM-backed action item extraction with rule-based fallback.
//
// Module structure:
// - types.rs: ActionItem domain struct
// - config.rs: LlmConfig, injected at construction
// - prompt.rs: extraction instruction prompt
// - llm_client.rs: OpenAI-compatible chat-completions request
// - parser.rs: JSON array location and item cleaning/validation
// - fallback.rs: deterministic offline extractor

pub mod config;
pub mod fallback;
pub mod llm_client;
pub mod parser;
pub mod prompt;
pub mod types;

pub use config::LlmConfig;
pub use fallback::extract_fallback;
pub use types::ActionItem;

use reqwest::Client;
use tracing::{info, warn};

use crate::error::ExtractError;

/// Extraction pipeline: one bounded LLM attempt, then rule-based fallback.
///
/// Holds no mutable state; safe to share and call concurrently. The HTTP
/// client is built once with the configured timeout and reused.
pub struct ActionItemExtractor {
    config: LlmConfig,
    client: Client,
}

impl ActionItemExtractor {
    pub fn new(config: LlmConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new()); // Fallback to default if builder fails
        Self { config, client }
    }

    /// Extracts action items from a transcript. Never fails.
    ///
    /// Attempts the LLM path first; any failure (missing credential, network
    /// error, non-2xx status, unparsable or empty output) degrades to the
    /// rule-based fallback on the same transcript. Every returned item has a
    /// non-empty task and a `due_date` that is either empty or `YYYY-MM-DD`.
    pub async fn extract(&self, transcript: &str) -> Vec<ActionItem> {
        if transcript.trim().is_empty() {
            return vec![];
        }

        match self.extract_llm(transcript).await {
            Ok(items) => {
                info!("LLM extraction produced {} action item(s)", items.len());
                items
            }
            Err(e) => {
                warn!("LLM extraction unavailable ({}), using rule-based fallback", e);
                extract_fallback(transcript)
            }
        }
    }

    async fn extract_llm(&self, transcript: &str) -> Result<Vec<ActionItem>, ExtractError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ExtractError::ConfigMissing)?;

        let prompt = prompt::build_extraction_prompt(transcript);
        let content =
            llm_client::request_completion(&self.client, &self.config, api_key, &prompt).await?;
        parser::parse_action_items(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_credential_extractor() -> ActionItemExtractor {
        ActionItemExtractor::new(LlmConfig::default())
    }

    #[tokio::test]
    async fn test_empty_transcript_returns_empty() {
        let extractor = no_credential_extractor();
        assert!(extractor.extract("").await.is_empty());
        assert!(extractor.extract("   \n\t  ").await.is_empty());
    }

    #[tokio::test]
    async fn test_missing_credential_matches_fallback_exactly() {
        let transcript = "John: I will prepare the budget report.\nMary: lunch at noon.\nLee: submit the expense forms";
        let extractor = no_credential_extractor();
        assert_eq!(extractor.extract(transcript).await, extract_fallback(transcript));
    }

    #[tokio::test]
    async fn test_no_matching_lines_returns_empty() {
        let extractor = no_credential_extractor();
        let result = extractor.extract("Mary: lunch at noon.\nfree text line").await;
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_all_tasks_non_empty_property() {
        let transcript = "A: will send notes\nB: review the doc\n: will do\nC:\nplain line";
        let extractor = no_credential_extractor();
        for item in extractor.extract(transcript).await {
            assert!(!item.task.trim().is_empty());
        }
    }
}
