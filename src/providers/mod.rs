pub mod article_provider;
pub mod fact_generator;

pub use article_provider::{ArticleProvider, WikipediaArticleProvider};
pub use fact_generator::{FactGenerator, OpenAiFactGenerator};
