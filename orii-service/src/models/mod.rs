pub mod mock;
pub mod model_card;

pub use mock::{mock_completion, tokens_used, DEFAULT_MAX_TOKENS, DEMO_TOKEN_CAP};
pub use model_card::{ModelCard, ORII_O1};
