use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::{mock_completion, tokens_used, ModelCard, DEFAULT_MAX_TOKENS};

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct DemoRequest {
    #[validate(required(message = "Prompt is required"))]
    #[schema(value_type = String, example = "What is artificial intelligence?")]
    pub prompt: Option<String>,
    /// Defaults to 100 when absent or null. Integral floats and numeric strings are accepted.
    #[serde(default, deserialize_with = "deserialize_max_tokens")]
    #[schema(value_type = Option<i64>, default = 100, example = 100)]
    pub max_tokens: Option<i128>,
}

/// Reads `max_tokens` as an integer of any magnitude. Values beyond `i128` saturate, which
/// leaves `min(m, 50)` unchanged for positive overflow.
fn deserialize_max_tokens<'de, D>(deserializer: D) -> Result<Option<i128>, D::Error>
where
    D: Deserializer<'de>,
{
    let invalid = |value: &dyn std::fmt::Display| -> D::Error {
        de::Error::custom(format!("max_tokens must be an integer, got {}", value))
    };

    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => integral(&n).map(Some).ok_or_else(|| invalid(&n)),
        Some(Value::String(s)) => s.trim().parse::<i128>().map(Some).map_err(|_| invalid(&s)),
        Some(other) => Err(invalid(&other)),
    }
}

fn integral(n: &Number) -> Option<i128> {
    if let Some(i) = n.as_i64() {
        return Some(i.into());
    }
    if let Some(u) = n.as_u64() {
        return Some(u.into());
    }
    // Literals past u64 arrive as floats; `as` saturates at the i128 bounds.
    n.as_f64()
        .filter(|f| f.is_finite() && f.fract() == 0.0)
        .map(|f| f as i128)
}

impl DemoRequest {
    pub fn prompt(&self) -> &str {
        self.prompt.as_deref().unwrap_or_default()
    }

    pub fn max_tokens(&self) -> i128 {
        self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS)
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DemoResponse {
    #[schema(example = "Orii-O1")]
    pub model: String,
    pub response: String,
    #[schema(value_type = i64, example = 50)]
    pub tokens_used: i128,
}

impl DemoResponse {
    pub fn mock(card: &ModelCard, request: &DemoRequest) -> Self {
        Self {
            model: card.name.to_string(),
            response: mock_completion(request.prompt()),
            tokens_used: tokens_used(request.max_tokens()),
        }
    }
}
