use crate::domain::content::{ArticleRecord, BlogRecord, ContentApiError, ContentRepository, Interest};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// `ContentRepository` backed by the content API's REST endpoints
pub struct HttpContentRepository {
    base_url: String,
    api_token: Option<String>,
    http_client: Client,
}

impl HttpContentRepository {
    pub fn new(
        base_url: impl Into<String>,
        api_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder()
            .timeout(timeout)
            .user_agent("content-feed-backend")
            .build()?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_token,
            http_client,
        })
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn send(&self, request: RequestBuilder, path: &str) -> Result<Response, ContentApiError> {
        let response = self
            .authorize(request)
            .send()
            .await
            .map_err(|source| ContentApiError::Transport {
                path: path.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ContentApiError::Status {
                path: path.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ContentApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.send(self.http_client.get(&url), path).await?;

        let parsed = response
            .json::<T>()
            .await
            .map_err(|source| ContentApiError::Decode {
                path: path.to_string(),
                source,
            })?;

        tracing::debug!(path = %path, "Content API request succeeded");
        Ok(parsed)
    }

    async fn delete(&self, path: &str) -> Result<(), ContentApiError> {
        let url = format!("{}{}", self.base_url, path);
        self.send(self.http_client.delete(&url), path).await?;
        Ok(())
    }
}

#[async_trait]
impl ContentRepository for HttpContentRepository {
    async fn list_articles(&self) -> Result<Vec<ArticleRecord>, ContentApiError> {
        self.get_json("/articles").await
    }

    async fn list_blogs(&self) -> Result<Vec<BlogRecord>, ContentApiError> {
        self.get_json("/blogs").await
    }

    async fn list_interests(&self) -> Result<Vec<Interest>, ContentApiError> {
        self.get_json("/interests").await
    }

    async fn list_articles_by_author(
        &self,
        author_id: &str,
    ) -> Result<Vec<ArticleRecord>, ContentApiError> {
        self.get_json(&format!("/articles/user/{}", urlencoding::encode(author_id)))
            .await
    }

    async fn list_blogs_by_author(
        &self,
        author_id: &str,
    ) -> Result<Vec<BlogRecord>, ContentApiError> {
        self.get_json(&format!("/blogs/user/{}", urlencoding::encode(author_id)))
            .await
    }

    async fn delete_article(&self, id: &str) -> Result<(), ContentApiError> {
        self.delete(&format!("/articles/{}", urlencoding::encode(id)))
            .await
    }

    async fn delete_blog(&self, id: &str) -> Result<(), ContentApiError> {
        self.delete(&format!("/blogs/{}", urlencoding::encode(id)))
            .await
    }
}
