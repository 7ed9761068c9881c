pub mod error;
pub mod extractor;

pub use error::ExtractError;
pub use extractor::config::LlmConfig;
pub use extractor::fallback::extract_fallback;
pub use extractor::types::ActionItem;
pub use extractor::ActionItemExtractor;
