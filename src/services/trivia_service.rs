use std::sync::Arc;

use crate::{
    errors::{AppError, AppResult},
    models::dto::{FactDto, GenerateFactsRequest, GenerateFactsResponse},
    providers::{ArticleProvider, FactGenerator},
    services::{
        fact_parser::parse_facts,
        fact_shuffler::shuffle_facts,
        fake_locator::{locate_fake, NO_FAKE_INDEX},
    },
};

/// Number of statements the prompt asks the model for.
pub const EXPECTED_FACT_COUNT: usize = 4;

pub struct TriviaService {
    articles: Arc<dyn ArticleProvider>,
    generator: Arc<dyn FactGenerator>,
    max_article_chars: usize,
}

impl TriviaService {
    pub fn new(
        articles: Arc<dyn ArticleProvider>,
        generator: Arc<dyn FactGenerator>,
        max_article_chars: usize,
    ) -> Self {
        Self {
            articles,
            generator,
            max_article_chars,
        }
    }

    pub async fn generate(&self, request: GenerateFactsRequest) -> AppResult<GenerateFactsResponse> {
        let topic = request.validated_topic()?.to_string();
        let level = request.level;

        let article = self.fetch_article(topic.trim()).await?;
        let article = truncate_chars(&article, self.max_article_chars);

        let raw = self.generator.generate_facts(article, &level).await?;

        let facts = parse_facts(&raw);
        if facts.is_empty() {
            log::error!("No parseable facts in model output for '{}': {:?}", topic, raw);
            return Err(AppError::GenerationError(
                "Model returned no parseable facts".to_string(),
            ));
        }
        if facts.len() != EXPECTED_FACT_COUNT {
            log::warn!(
                "Expected {} facts for '{}', parsed {}",
                EXPECTED_FACT_COUNT,
                topic,
                facts.len()
            );
        }

        let shuffled = shuffle_facts(&facts);
        let fake_index = locate_fake(&shuffled);
        if fake_index == NO_FAKE_INDEX {
            log::warn!("Model output for '{}' contains no false statement", topic);
        }

        Ok(GenerateFactsResponse {
            facts: shuffled.into_iter().map(FactDto::from).collect(),
            fake_index,
            topic,
            level,
        })
    }

    async fn fetch_article(&self, topic: &str) -> AppResult<String> {
        let not_found = || AppError::NotFound(format!("No Wikipedia article found for '{}'", topic));

        match self.articles.fetch_article(topic).await {
            Ok(Some(article)) if !article.trim().is_empty() => Ok(article),
            Ok(_) => Err(not_found()),
            Err(e) => {
                log::error!("Article lookup for '{}' failed: {}", topic, e);
                Err(not_found())
            }
        }
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}
