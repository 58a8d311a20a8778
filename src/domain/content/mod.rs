pub mod model;

pub use model::{ArticleRecord, Author, BlogRecord, Interest};

use async_trait::async_trait;

/// Failure talking to the content API
#[derive(Debug, thiserror::Error)]
pub enum ContentApiError {
    #[error("request to {path} failed: {source}")]
    Transport {
        path: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{path} responded with status {status}: {body}")]
    Status {
        path: String,
        status: u16,
        body: String,
    },
    #[error("could not decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ContentApiError {
    /// The API answered 404 for the requested path
    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentApiError::Status { status: 404, .. })
    }
}

/// Read and delete access to the external content API.
///
/// Persistence is owned by the API; implementations only translate calls
/// into requests and responses into records.
#[async_trait]
pub trait ContentRepository: Send + Sync {
    async fn list_articles(&self) -> Result<Vec<ArticleRecord>, ContentApiError>;

    async fn list_blogs(&self) -> Result<Vec<BlogRecord>, ContentApiError>;

    async fn list_interests(&self) -> Result<Vec<Interest>, ContentApiError>;

    async fn list_articles_by_author(
        &self,
        author_id: &str,
    ) -> Result<Vec<ArticleRecord>, ContentApiError>;

    async fn list_blogs_by_author(&self, author_id: &str)
        -> Result<Vec<BlogRecord>, ContentApiError>;

    async fn delete_article(&self, id: &str) -> Result<(), ContentApiError>;

    async fn delete_blog(&self, id: &str) -> Result<(), ContentApiError>;
}
