use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::content::{Author, Interest};
use crate::domain::feed::{
    CategoryCount, FeedPage, FeedSummary, FilterCriteria, KindFilter, Post, PostKind, Viewer,
};
use crate::error::AppError;

const UNCATEGORIZED: &str = "Uncategorized";
const ANONYMOUS: &str = "Anonymous";

/// Filter query accepted by feed endpoints
#[derive(Debug, Default, Deserialize)]
pub struct FeedQuery {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

impl TryFrom<FeedQuery> for FilterCriteria {
    type Error = AppError;

    fn try_from(query: FeedQuery) -> Result<Self, Self::Error> {
        let kind = query
            .kind
            .as_deref()
            .unwrap_or("all")
            .parse::<KindFilter>()
            .map_err(AppError::BadRequest)?;

        Ok(FilterCriteria::new(
            query.search.unwrap_or_default(),
            query.category.as_deref().unwrap_or("all"),
            kind,
        ))
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: String,
    pub kind: PostKind,
    /// Unique across kinds, e.g. `blog-42`
    pub key: String,
    pub title: String,
    pub preview: String,
    pub category: Option<Interest>,
    pub category_label: String,
    pub author: Option<Author>,
    pub author_display: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    /// Whether the requesting viewer may edit or delete the post
    pub can_manage: bool,
}

impl PostResponse {
    pub fn from_post(post: Post, viewer: &Viewer) -> Self {
        let can_manage = viewer.can_manage(&post);
        let key = post.key().to_string();
        let kind = post.kind();
        let preview = post.preview().to_string();
        let category_label = post
            .category
            .as_ref()
            .map(|c| c.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(UNCATEGORIZED)
            .to_string();
        let author_display = format!(
            "By {}",
            post.author
                .as_ref()
                .map(|a| a.username.as_str())
                .filter(|name| !name.is_empty())
                .unwrap_or(ANONYMOUS)
        );

        Self {
            id: post.id,
            kind,
            key,
            title: post.title,
            preview,
            category: post.category,
            category_label,
            author: post.author,
            author_display,
            created_at: post.created_at,
            thumbnail_url: post.thumbnail_url,
            can_manage,
        }
    }

    pub fn from_posts(posts: Vec<Post>, viewer: &Viewer) -> Vec<Self> {
        posts
            .into_iter()
            .map(|post| Self::from_post(post, viewer))
            .collect()
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FeedPageResponse {
    pub posts: Vec<PostResponse>,
    pub interests: Vec<Interest>,
    pub total: usize,
    pub shown: usize,
}

impl FeedPageResponse {
    pub fn from_page(page: FeedPage, viewer: &Viewer) -> Self {
        let shown = page.posts.len();
        Self {
            posts: PostResponse::from_posts(page.posts, viewer),
            interests: page.interests,
            total: page.total,
            shown,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoryCountResponse {
    pub id: String,
    pub name: String,
    pub posts: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct FeedSummaryResponse {
    pub articles: usize,
    pub blogs: usize,
    pub interests: usize,
    pub uncategorized: usize,
    pub per_category: Vec<CategoryCountResponse>,
}

impl From<FeedSummary> for FeedSummaryResponse {
    fn from(summary: FeedSummary) -> Self {
        Self {
            articles: summary.articles,
            blogs: summary.blogs,
            interests: summary.interests,
            uncategorized: summary.uncategorized,
            per_category: summary
                .per_category
                .into_iter()
                .map(|CategoryCount { interest, posts }| CategoryCountResponse {
                    id: interest.id,
                    name: interest.name,
                    posts,
                })
                .collect(),
        }
    }
}
