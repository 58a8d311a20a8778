use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension,
};
use std::sync::Arc;

use crate::{
    domain::feed::{FeedService, FeedServiceApi, PostKey, PostKind, Viewer},
    error::{AppError, AppResult},
};

pub struct PostController {
    feed_service: Arc<FeedService>,
}

impl PostController {
    pub fn new(feed_service: Arc<FeedService>) -> Self {
        Self { feed_service }
    }

    /// DELETE /api/posts/{kind}/{postId} - Delete an article or blog
    pub async fn delete_post(
        State(controller): State<Arc<PostController>>,
        Extension(viewer): Extension<Viewer>,
        Path((kind, post_id)): Path<(String, String)>,
    ) -> AppResult<StatusCode> {
        let kind: PostKind = kind.parse().map_err(AppError::BadRequest)?;
        let key = PostKey { kind, id: post_id };

        controller.feed_service.delete_post(&viewer, &key).await?;
        Ok(StatusCode::NO_CONTENT)
    }
}
