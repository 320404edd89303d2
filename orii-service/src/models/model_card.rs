//! Static identity and capability description of the Orii-O1 model.

/// Everything the service advertises about the model it fronts.
#[derive(Debug, Clone, Copy)]
pub struct ModelCard {
    pub name: &'static str,
    pub company: &'static str,
    pub version: &'static str,
    pub capabilities: &'static [&'static str],
    /// Free-form specification entries, in display order.
    pub specifications: &'static [(&'static str, &'static str)],
}

pub const ORII_O1: ModelCard = ModelCard {
    name: "Orii-O1",
    company: "Orii-Gen",
    version: "1.0.0",
    capabilities: &[
        "Advanced Natural Language Understanding",
        "Code Generation and Review",
        "Complex Reasoning and Problem Solving",
        "Multi-language Support",
        "Context-aware Conversations",
        "Creative Writing and Content Generation",
    ],
    specifications: &[
        ("parameters", "Advanced Architecture"),
        ("context_length", "Extended Context Window"),
        ("training_data", "Diverse, High-quality Dataset"),
        ("performance", "State-of-the-art Benchmarks"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn specification_keys_are_unique() {
        let keys: HashSet<_> = ORII_O1.specifications.iter().map(|(k, _)| *k).collect();
        assert_eq!(keys.len(), ORII_O1.specifications.len());
    }

    #[test]
    fn card_is_populated() {
        assert!(!ORII_O1.capabilities.is_empty());
        assert!(!ORII_O1.specifications.is_empty());
        assert_eq!(ORII_O1.name, "Orii-O1");
    }
}
