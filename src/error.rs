use thiserror::Error;

/// Failure modes of the LLM extraction path.
///
/// None of these reach the caller of [`crate::ActionItemExtractor::extract`];
/// every variant routes the pipeline to the rule-based fallback extractor.
/// They exist as distinct variants so each degradation path is independently
/// testable and shows up as itself in the logs.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// No API credential configured. Recognized state, not a fault: the
    /// pipeline skips the network attempt entirely.
    #[error("no API credential configured")]
    ConfigMissing,

    /// Connection error or request timeout.
    #[error("LLM request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("LLM API returned status {0}")]
    Status(u16),

    /// Response body was not the expected chat-completion shape, or the
    /// message content field was missing.
    #[error("malformed LLM response: {0}")]
    ResponseMalformed(String),

    /// No JSON array could be located in the model output, or the located
    /// text failed to parse as a JSON array.
    #[error("no parsable JSON array in model output: {0}")]
    ContentUnparsable(String),

    /// The parsed array yielded zero valid items after cleaning. Treated as
    /// a failure because an all-empty LLM result is indistinguishable from a
    /// malformed one.
    #[error("LLM returned no usable action items")]
    EmptyResult,
}
