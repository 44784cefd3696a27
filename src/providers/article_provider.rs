use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::{config::Config, errors::AppResult};

const USER_AGENT: &str = concat!(
    "fact-or-fake-server/",
    env!("CARGO_PKG_VERSION"),
    " (trivia generator)"
);

/// Source of reference text for a topic.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleProvider: Send + Sync {
    /// Plain-text article for `title`, or `None` when no usable article exists.
    async fn fetch_article(&self, title: &str) -> AppResult<Option<String>>;
}

pub struct WikipediaArticleProvider {
    client: reqwest::Client,
    api_url: String,
}

impl WikipediaArticleProvider {
    pub fn new(config: &Config) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_url: config.wikipedia_api_url.clone(),
        })
    }
}

#[async_trait]
impl ArticleProvider for WikipediaArticleProvider {
    async fn fetch_article(&self, title: &str) -> AppResult<Option<String>> {
        log::debug!("Fetching Wikipedia article for '{}'", title);

        let response: QueryResponse = self
            .client
            .get(&self.api_url)
            .query(&[
                ("action", "query"),
                ("prop", "extracts|pageprops"),
                ("ppprop", "disambiguation"),
                ("explaintext", "1"),
                ("redirects", "1"),
                ("format", "json"),
                ("formatversion", "2"),
                ("titles", title),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(article_text(response, title))
    }
}

#[derive(Debug, Deserialize)]
struct QueryResponse {
    #[serde(default)]
    query: Option<Query>,
}

#[derive(Debug, Deserialize)]
struct Query {
    #[serde(default)]
    pages: Vec<Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    title: Option<String>,
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    invalid: bool,
    extract: Option<String>,
    pageprops: Option<PageProps>,
}

#[derive(Debug, Deserialize)]
struct PageProps {
    disambiguation: Option<serde_json::Value>,
}

impl Page {
    fn is_disambiguation(&self) -> bool {
        self.pageprops
            .as_ref()
            .is_some_and(|p| p.disambiguation.is_some())
    }
}

fn article_text(response: QueryResponse, requested: &str) -> Option<String> {
    let page = response.query?.pages.into_iter().next()?;

    if page.missing || page.invalid {
        log::warn!("Wikipedia has no page for '{}'", requested);
        return None;
    }

    if page.is_disambiguation() {
        log::warn!(
            "Wikipedia page '{}' is a disambiguation page",
            page.title.as_deref().unwrap_or(requested)
        );
        return None;
    }

    page.extract
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(body: &str) -> QueryResponse {
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn returns_extract_for_existing_page() {
        let body = r#"{
            "batchcomplete": true,
            "query": {
                "pages": [
                    { "pageid": 22989, "ns": 0, "title": "Paris",
                      "extract": "  Paris is the capital of France.  " }
                ]
            }
        }"#;

        assert_eq!(
            article_text(parse(body), "Paris").as_deref(),
            Some("Paris is the capital of France.")
        );
    }

    #[test]
    fn missing_page_yields_none() {
        let body = r#"{"query": {"pages": [{"ns": 0, "title": "Qwzxv", "missing": true}]}}"#;

        assert!(article_text(parse(body), "Qwzxv").is_none());
    }

    #[test]
    fn invalid_title_yields_none() {
        let body = r#"{"query": {"pages": [{"title": "<>", "invalid": true, "invalidreason": "bad"}]}}"#;

        assert!(article_text(parse(body), "<>").is_none());
    }

    #[test]
    fn disambiguation_page_yields_none() {
        let body = r#"{"query": {"pages": [
            { "pageid": 1, "ns": 0, "title": "Mercury",
              "extract": "Mercury may refer to:", "pageprops": { "disambiguation": "" } }
        ]}}"#;

        assert!(article_text(parse(body), "Mercury").is_none());
    }

    #[test]
    fn empty_extract_yields_none() {
        let body = r#"{"query": {"pages": [{ "pageid": 1, "title": "Stub", "extract": "   " }]}}"#;

        assert!(article_text(parse(body), "Stub").is_none());
    }

    #[test]
    fn response_without_query_yields_none() {
        assert!(article_text(parse(r#"{"batchcomplete": true}"#), "Paris").is_none());
    }

    #[test]
    fn provider_builds_from_config() {
        let config = Config::test_config();
        let provider = WikipediaArticleProvider::new(&config).unwrap();

        assert_eq!(provider.api_url, config.wikipedia_api_url);
    }
}
