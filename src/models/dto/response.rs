use serde::{Deserialize, Serialize};

use crate::models::domain::Fact;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactDto {
    pub text: String,
    pub is_true: bool,
}

impl From<Fact> for FactDto {
    fn from(fact: Fact) -> Self {
        FactDto {
            text: fact.statement,
            is_true: fact.is_true,
        }
    }
}

/// Payload for one round of the game. `fake_index` is `-1` when the model
/// produced no false statement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateFactsResponse {
    pub facts: Vec<FactDto>,
    pub fake_index: i64,
    pub topic: String,
    pub level: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn fact_dto_uses_text_field() {
        let dto: FactDto = Fact::new("Paris is in France", true).into();

        assert_eq!(dto.text, "Paris is in France");
        assert!(dto.is_true);
    }

    #[test]
    fn response_serializes_expected_shape() {
        let response = GenerateFactsResponse {
            facts: vec![
                Fact::new("Paris is in France", true).into(),
                Fact::new("Paris is in Germany", false).into(),
            ],
            fake_index: 1,
            topic: "Paris".to_string(),
            level: "easy".to_string(),
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({
                "facts": [
                    { "text": "Paris is in France", "is_true": true },
                    { "text": "Paris is in Germany", "is_true": false }
                ],
                "fake_index": 1,
                "topic": "Paris",
                "level": "easy"
            })
        );
    }
}
