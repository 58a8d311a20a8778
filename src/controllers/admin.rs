use axum::{extract::State, Extension, Json};
use std::sync::Arc;

use crate::controllers::dto::FeedSummaryResponse;
use crate::{
    domain::feed::{FeedService, FeedServiceApi, Viewer},
    error::AppResult,
};

pub struct AdminController {
    feed_service: Arc<FeedService>,
}

impl AdminController {
    pub fn new(feed_service: Arc<FeedService>) -> Self {
        Self { feed_service }
    }

    /// GET /api/admin/overview - Content totals for moderation
    pub async fn overview(
        State(controller): State<Arc<AdminController>>,
        Extension(viewer): Extension<Viewer>,
    ) -> AppResult<Json<FeedSummaryResponse>> {
        let summary = controller.feed_service.overview(&viewer).await?;
        Ok(Json(summary.into()))
    }
}
