use axum::{
    extract::{Query, State},
    Extension, Json,
};
use std::sync::Arc;

use crate::controllers::dto::{FeedPageResponse, FeedQuery, PostResponse};
use crate::domain::content::Interest;
use crate::{
    domain::feed::{FeedService, FeedServiceApi, FilterCriteria, Viewer},
    error::AppResult,
};

pub struct FeedController {
    feed_service: Arc<FeedService>,
}

impl FeedController {
    pub fn new(feed_service: Arc<FeedService>) -> Self {
        Self { feed_service }
    }

    /// GET /api/feed - Ranked, filtered articles and blogs
    pub async fn get_feed(
        State(controller): State<Arc<FeedController>>,
        Extension(viewer): Extension<Viewer>,
        Query(query): Query<FeedQuery>,
    ) -> AppResult<Json<FeedPageResponse>> {
        let criteria = FilterCriteria::try_from(query)?;
        let page = controller
            .feed_service
            .home_feed(&viewer, &criteria)
            .await?;
        Ok(Json(FeedPageResponse::from_page(page, &viewer)))
    }

    /// GET /api/interests - Category options for the feed filter
    pub async fn list_interests(
        State(controller): State<Arc<FeedController>>,
    ) -> AppResult<Json<Vec<Interest>>> {
        let interests = controller.feed_service.interests().await?;
        Ok(Json(interests))
    }

    /// GET /api/me/posts - The signed-in viewer's own posts
    pub async fn my_posts(
        State(controller): State<Arc<FeedController>>,
        Extension(viewer): Extension<Viewer>,
        Query(query): Query<FeedQuery>,
    ) -> AppResult<Json<Vec<PostResponse>>> {
        let criteria = FilterCriteria::try_from(query)?;
        let posts = controller
            .feed_service
            .author_feed(&viewer, &criteria)
            .await?;
        Ok(Json(PostResponse::from_posts(posts, &viewer)))
    }
}
