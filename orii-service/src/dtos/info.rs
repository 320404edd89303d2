use serde::{ser::SerializeMap, Serialize, Serializer};
use utoipa::ToSchema;

use crate::models::ModelCard;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthStatus {
    #[schema(example = "healthy")]
    pub status: String,
    #[schema(example = "Orii-O1")]
    pub model: String,
    #[schema(example = "1.0.0")]
    pub version: String,
}

impl HealthStatus {
    pub fn healthy(card: &ModelCard) -> Self {
        Self {
            status: "healthy".to_string(),
            model: card.name.to_string(),
            version: card.version.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ModelInfo {
    #[schema(example = "Orii-O1")]
    pub name: String,
    #[schema(example = "Orii-Gen")]
    pub company: String,
    #[schema(example = "1.0.0")]
    pub version: String,
    pub capabilities: Vec<String>,
    #[schema(value_type = Object)]
    pub specifications: Specifications,
}

impl From<&ModelCard> for ModelInfo {
    fn from(card: &ModelCard) -> Self {
        Self {
            name: card.name.to_string(),
            company: card.company.to_string(),
            version: card.version.to_string(),
            capabilities: card.capabilities.iter().map(|c| c.to_string()).collect(),
            specifications: Specifications(
                card.specifications
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect(),
            ),
        }
    }
}

/// String-to-string mapping serialized as a JSON object in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specifications(pub Vec<(String, String)>);

impl Serialize for Specifications {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, value) in &self.0 {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ORII_O1;

    #[test]
    fn specifications_keep_declared_order() {
        let json = serde_json::to_string(&ModelInfo::from(&ORII_O1).specifications).unwrap();
        assert_eq!(
            json,
            r#"{"parameters":"Advanced Architecture","context_length":"Extended Context Window","training_data":"Diverse, High-quality Dataset","performance":"State-of-the-art Benchmarks"}"#
        );
    }

    #[test]
    fn health_reports_model_identity() {
        let health = HealthStatus::healthy(&ORII_O1);
        assert_eq!(health.status, "healthy");
        assert_eq!(health.model, "Orii-O1");
        assert_eq!(health.version, "1.0.0");
    }
}
