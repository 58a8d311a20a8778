use super::error::FeedServiceError;
use super::filter::filter;
use super::model::{FilterCriteria, Post, PostKey, PostKind, Viewer};
use super::normalize::normalize;
use super::rank::rank;
use super::summary::{summarize, FeedSummary};
use crate::domain::content::{ContentRepository, Interest};
use async_trait::async_trait;
use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;

/// Ranked and filtered posts plus the category options to filter by
#[derive(Debug, Clone)]
pub struct FeedPage {
    pub posts: Vec<Post>,
    pub interests: Vec<Interest>,
    /// Number of posts before filtering
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum SnapshotKey {
    AllPosts,
}

pub struct FeedService {
    content_repo: Arc<dyn ContentRepository>,
    snapshot_cache: Option<Cache<SnapshotKey, Arc<Vec<Post>>>>,
}

impl FeedService {
    /// `cache_ttl` of zero disables snapshot caching
    pub fn new(content_repo: Arc<dyn ContentRepository>, cache_ttl: Duration) -> Self {
        let snapshot_cache = if cache_ttl.is_zero() {
            None
        } else {
            Some(
                Cache::builder()
                    .max_capacity(1)
                    .time_to_live(cache_ttl)
                    .build(),
            )
        };

        Self {
            content_repo,
            snapshot_cache,
        }
    }
}

#[async_trait]
pub trait FeedServiceApi: Send + Sync {
    /// Every article and blog, ranked for the viewer and filtered.
    ///
    /// Articles, blogs and interests are fetched together; if any of the
    /// three fails nothing is returned.
    async fn home_feed(
        &self,
        viewer: &Viewer,
        criteria: &FilterCriteria,
    ) -> Result<FeedPage, FeedServiceError>;

    /// The viewer's own posts, newest first
    async fn author_feed(
        &self,
        viewer: &Viewer,
        criteria: &FilterCriteria,
    ) -> Result<Vec<Post>, FeedServiceError>;

    async fn interests(&self) -> Result<Vec<Interest>, FeedServiceError>;

    /// Delete a post the viewer authored, or any post for admins
    async fn delete_post(&self, viewer: &Viewer, key: &PostKey) -> Result<(), FeedServiceError>;

    /// Content totals for the admin console
    async fn overview(&self, viewer: &Viewer) -> Result<FeedSummary, FeedServiceError>;
}

#[async_trait]
impl FeedServiceApi for FeedService {
    async fn home_feed(
        &self,
        viewer: &Viewer,
        criteria: &FilterCriteria,
    ) -> Result<FeedPage, FeedServiceError> {
        let (snapshot, interests) = tokio::try_join!(self.load_snapshot(), self.interests())?;

        let ranked = rank(&snapshot, viewer);
        let posts = filter(&ranked, criteria);

        tracing::debug!(
            viewer_id = ?viewer.id,
            personalized = viewer.personalizes(),
            total = ranked.len(),
            shown = posts.len(),
            "Home feed assembled"
        );

        Ok(FeedPage {
            posts,
            interests,
            total: ranked.len(),
        })
    }

    async fn author_feed(
        &self,
        viewer: &Viewer,
        criteria: &FilterCriteria,
    ) -> Result<Vec<Post>, FeedServiceError> {
        let author_id = viewer.id.as_deref().ok_or(FeedServiceError::Unauthorized)?;

        let (articles, blogs) = tokio::try_join!(
            self.content_repo.list_articles_by_author(author_id),
            self.content_repo.list_blogs_by_author(author_id),
        )
        .map_err(|e| {
            tracing::error!(author_id = %author_id, error = %e, "Failed to fetch author content");
            FeedServiceError::Fetch(e)
        })?;

        let posts = normalize(articles, blogs);
        // Every post shares the author, so interest ordering adds nothing
        let ranked = rank(&posts, &Viewer::anonymous());

        Ok(filter(&ranked, criteria))
    }

    async fn interests(&self) -> Result<Vec<Interest>, FeedServiceError> {
        self.content_repo.list_interests().await.map_err(|e| {
            tracing::error!(error = %e, "Failed to fetch interests");
            FeedServiceError::Fetch(e)
        })
    }

    async fn delete_post(&self, viewer: &Viewer, key: &PostKey) -> Result<(), FeedServiceError> {
        if viewer.id.is_none() {
            return Err(FeedServiceError::Unauthorized);
        }

        let snapshot = self.fetch_snapshot().await?;
        let post = snapshot
            .iter()
            .find(|p| p.kind() == key.kind && p.id == key.id)
            .ok_or(FeedServiceError::NotFound)?;

        if !viewer.can_manage(post) {
            tracing::warn!(
                viewer_id = ?viewer.id,
                post = %key,
                "Viewer attempted to delete a post they do not manage"
            );
            return Err(FeedServiceError::NotFound);
        }

        let deleted = match key.kind {
            PostKind::Article => self.content_repo.delete_article(&key.id).await,
            PostKind::Blog => self.content_repo.delete_blog(&key.id).await,
        };
        deleted.map_err(|e| {
            if e.is_not_found() {
                // Removed upstream since the lookup
                return FeedServiceError::NotFound;
            }
            tracing::error!(post = %key, error = %e, "Failed to delete post");
            FeedServiceError::Delete(e)
        })?;

        if let Some(cache) = &self.snapshot_cache {
            cache.invalidate_all();
        }

        tracing::info!(viewer_id = ?viewer.id, post = %key, "Post deleted");
        Ok(())
    }

    async fn overview(&self, viewer: &Viewer) -> Result<FeedSummary, FeedServiceError> {
        if viewer.id.is_none() {
            return Err(FeedServiceError::Unauthorized);
        }
        if !viewer.is_admin() {
            return Err(FeedServiceError::Forbidden);
        }

        let (snapshot, interests) = tokio::try_join!(self.load_snapshot(), self.interests())?;

        Ok(summarize(&snapshot, &interests))
    }
}

impl FeedService {
    /// Normalized posts, from cache when enabled
    async fn load_snapshot(&self) -> Result<Arc<Vec<Post>>, FeedServiceError> {
        if let Some(cache) = &self.snapshot_cache {
            if let Some(snapshot) = cache.get(&SnapshotKey::AllPosts).await {
                tracing::debug!(posts = snapshot.len(), "Feed snapshot cache hit");
                return Ok(snapshot);
            }
        }

        let snapshot = self.fetch_snapshot().await?;

        if let Some(cache) = &self.snapshot_cache {
            cache
                .insert(SnapshotKey::AllPosts, snapshot.clone())
                .await;
        }

        Ok(snapshot)
    }

    /// Fetch articles and blogs concurrently and normalize them. Either
    /// fetch failing fails the whole snapshot.
    async fn fetch_snapshot(&self) -> Result<Arc<Vec<Post>>, FeedServiceError> {
        let (articles, blogs) = tokio::try_join!(
            self.content_repo.list_articles(),
            self.content_repo.list_blogs(),
        )
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to fetch feed content");
            FeedServiceError::Fetch(e)
        })?;

        tracing::info!(
            articles = articles.len(),
            blogs = blogs.len(),
            "Fetched feed content"
        );

        Ok(Arc::new(normalize(articles, blogs)))
    }
}
