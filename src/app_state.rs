use std::sync::Arc;

use crate::{
    config::Config,
    errors::AppResult,
    providers::{ArticleProvider, FactGenerator, OpenAiFactGenerator, WikipediaArticleProvider},
    services::trivia_service::TriviaService,
};

#[derive(Clone)]
pub struct AppState {
    pub trivia_service: Arc<TriviaService>,
}

impl AppState {
    pub fn new(config: &Config) -> AppResult<Self> {
        let articles = Arc::new(WikipediaArticleProvider::new(config)?);
        let generator = Arc::new(OpenAiFactGenerator::new(config)?);

        Ok(Self::with_providers(config, articles, generator))
    }

    /// Builds state around the given providers instead of the networked ones.
    pub fn with_providers(
        config: &Config,
        articles: Arc<dyn ArticleProvider>,
        generator: Arc<dyn FactGenerator>,
    ) -> Self {
        let trivia_service = Arc::new(TriviaService::new(
            articles,
            generator,
            config.max_article_chars,
        ));

        Self { trivia_service }
    }
}
