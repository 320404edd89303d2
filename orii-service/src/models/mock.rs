//! Canned completion returned by the demo endpoint. No generation takes place.

use super::ORII_O1;

/// `max_tokens` assumed when the caller omits it.
pub const DEFAULT_MAX_TOKENS: i128 = 100;

/// Upper bound on the reported token usage of a mock completion.
pub const DEMO_TOKEN_CAP: i128 = 50;

/// Embeds the prompt verbatim in the fixed demo sentence.
pub fn mock_completion(prompt: &str) -> String {
    format!(
        "This is a demo response from {} for your prompt: '{}'. Our advanced LLM provides \
         intelligent, contextual responses with superior reasoning capabilities.",
        ORII_O1.name, prompt
    )
}

/// `min(max_tokens, DEMO_TOKEN_CAP)`. Zero and negative requests pass through unchanged.
pub fn tokens_used(max_tokens: i128) -> i128 {
    max_tokens.min(DEMO_TOKEN_CAP)
}
