use crate::domain::content::ContentApiError;
use crate::error::AppError;

#[derive(Debug, thiserror::Error)]
pub enum FeedServiceError {
    #[error("content fetch failed: {0}")]
    Fetch(#[from] ContentApiError),
    #[error("content deletion failed: {0}")]
    Delete(#[source] ContentApiError),
    #[error("sign-in required")]
    Unauthorized,
    #[error("admin role required")]
    Forbidden,
    #[error("post not found")]
    NotFound,
}

impl From<FeedServiceError> for AppError {
    fn from(err: FeedServiceError) -> Self {
        match err {
            FeedServiceError::Fetch(_) => {
                AppError::ExternalService("Error loading content".to_string())
            }
            FeedServiceError::Delete(_) => {
                AppError::ExternalService("Error deleting post".to_string())
            }
            FeedServiceError::Unauthorized => {
                AppError::Unauthorized("Sign in to continue".to_string())
            }
            FeedServiceError::Forbidden => AppError::Forbidden("Admin role required".to_string()),
            FeedServiceError::NotFound => AppError::NotFound("Post not found".to_string()),
        }
    }
}
