use super::model::{Post, PostKind};
use crate::domain::content::Interest;

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCount {
    pub interest: Interest,
    pub posts: usize,
}

/// Content totals for the moderation console
#[derive(Debug, Clone, PartialEq)]
pub struct FeedSummary {
    pub articles: usize,
    pub blogs: usize,
    pub interests: usize,
    pub per_category: Vec<CategoryCount>,
    /// Posts with no category, or one missing from the catalogue
    pub uncategorized: usize,
}

pub fn summarize(posts: &[Post], interests: &[Interest]) -> FeedSummary {
    let articles = posts
        .iter()
        .filter(|p| p.kind() == PostKind::Article)
        .count();

    let per_category: Vec<CategoryCount> = interests
        .iter()
        .map(|interest| CategoryCount {
            interest: interest.clone(),
            posts: posts
                .iter()
                .filter(|p| p.category_id() == Some(interest.id.as_str()))
                .count(),
        })
        .collect();

    let categorized: usize = per_category.iter().map(|c| c.posts).sum();

    FeedSummary {
        articles,
        blogs: posts.len() - articles,
        interests: interests.len(),
        per_category,
        uncategorized: posts.len().saturating_sub(categorized),
    }
}
