use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs, CreateChatCompletionResponse,
    },
    Client,
};
use async_trait::async_trait;
use secrecy::ExposeSecret;

use crate::{
    config::Config,
    constants::prompts::{fact_generation_prompt, FACT_GENERATION_SYSTEM_PROMPT},
    errors::{AppError, AppResult},
};

/// Produces the raw pipe-delimited statement list for an article.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FactGenerator: Send + Sync {
    async fn generate_facts(&self, article: &str, level: &str) -> AppResult<String>;
}

/// Chat-completion backed generator. Works against any OpenAI-compatible
/// endpoint; the default configuration targets Gemini.
pub struct OpenAiFactGenerator {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f32,
}

impl OpenAiFactGenerator {
    pub fn new(config: &Config) -> AppResult<Self> {
        let api_key = config.llm_api_key.as_ref().ok_or_else(|| {
            AppError::GenerationError("LLM API key is not configured".to_string())
        })?;

        let openai_config = OpenAIConfig::new()
            .with_api_key(api_key.expose_secret())
            .with_api_base(&config.llm_api_base);

        Ok(Self {
            client: Client::with_config(openai_config),
            model: config.llm_model.clone(),
            temperature: config.llm_temperature,
        })
    }
}

#[async_trait]
impl FactGenerator for OpenAiFactGenerator {
    async fn generate_facts(&self, article: &str, level: &str) -> AppResult<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .temperature(self.temperature)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(FACT_GENERATION_SYSTEM_PROMPT)
                    .build()?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(fact_generation_prompt(article, level))
                    .build()?
                    .into(),
            ])
            .build()?;

        let response = self.client.chat().create(request).await.map_err(|e| {
            log::error!("Fact generation call to '{}' failed: {}", self.model, e);
            AppError::GenerationError(format!("LLM API call failed: {}", e))
        })?;

        first_message_text(response)
    }
}

fn first_message_text(response: CreateChatCompletionResponse) -> AppResult<String> {
    response
        .choices
        .into_iter()
        .filter_map(|choice| choice.message.content)
        .map(|text| text.trim().to_string())
        .find(|text| !text.is_empty())
        .ok_or_else(|| AppError::GenerationError("Model returned no text output".to_string()))
}
