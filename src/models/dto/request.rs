use serde::{Deserialize, Deserializer};
use validator::{Validate, ValidationError};

use crate::errors::{AppError, AppResult};

pub const DEFAULT_LEVEL: &str = "easy";

fn default_level() -> String {
    DEFAULT_LEVEL.to_string()
}

/// A `null` level means the same as an absent one.
fn level_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_level))
}

fn not_blank(topic: &str) -> Result<(), ValidationError> {
    if topic.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Body of `POST /generate`. The topic is the only field a client can get
/// wrong; any level string is passed through to the model.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GenerateFactsRequest {
    #[validate(required, custom(function = "not_blank"))]
    pub topic: Option<String>,

    #[serde(default = "default_level", deserialize_with = "level_or_default")]
    pub level: String,
}

impl GenerateFactsRequest {
    pub fn new(topic: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            topic: Some(topic.into()),
            level: level.into(),
        }
    }

    /// The topic exactly as the client sent it, once it is known to be present.
    pub fn validated_topic(&self) -> AppResult<&str> {
        self.validate()
            .map_err(|_| AppError::ValidationError("Topic is required".to_string()))?;

        self.topic
            .as_deref()
            .ok_or_else(|| AppError::ValidationError("Topic is required".to_string()))
    }
}
