use regex::Regex;
use std::sync::LazyLock;

use super::model::{Post, PostBody};
use crate::domain::content::{ArticleRecord, BlogRecord};

pub const EXCERPT_MAX_CHARS: usize = 200;
const ELLIPSIS: &str = "...";

static TAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"));
static WHITESPACE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Merge articles and blogs into feed posts, articles first, each in
/// input order. Missing optional fields stay `None`.
pub fn normalize<A, B>(articles: A, blogs: B) -> Vec<Post>
where
    A: IntoIterator<Item = ArticleRecord>,
    B: IntoIterator<Item = BlogRecord>,
{
    articles
        .into_iter()
        .map(Post::from)
        .chain(blogs.into_iter().map(Post::from))
        .collect()
}

/// Plain-text preview of an HTML body.
///
/// Each tag is replaced by a space, whitespace runs collapse to a single
/// space, and the result is trimmed. Text longer than
/// [`EXCERPT_MAX_CHARS`] characters is cut there and suffixed with `...`.
pub fn excerpt_of(html: &str) -> String {
    let without_tags = TAG_PATTERN.replace_all(html, " ");
    let collapsed = WHITESPACE_PATTERN.replace_all(&without_tags, " ");
    let text = collapsed.trim();

    match text.char_indices().nth(EXCERPT_MAX_CHARS) {
        Some((cut, _)) => format!("{}{}", &text[..cut], ELLIPSIS),
        None => text.to_string(),
    }
}

impl From<ArticleRecord> for Post {
    fn from(record: ArticleRecord) -> Self {
        let introduction = record
            .introduction
            .or(record.summary)
            .unwrap_or_default();

        Self {
            id: record.id,
            title: record.title,
            body: PostBody::Article { introduction },
            category: record.category,
            author: record.author,
            created_at: record.created_at,
            thumbnail_url: record.thumbnail,
        }
    }
}

impl From<BlogRecord> for Post {
    fn from(record: BlogRecord) -> Self {
        let excerpt = excerpt_of(record.content.as_deref().unwrap_or_default());

        Self {
            id: record.id,
            title: record.title,
            body: PostBody::Blog { excerpt },
            category: record.category,
            author: record.author,
            created_at: record.created_at,
            thumbnail_url: record.thumbnail,
        }
    }
}
