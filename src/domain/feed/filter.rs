use super::model::{CategoryFilter, FilterCriteria, KindFilter, Post};

/// Keep the posts matching every criterion, in their given order
pub fn filter(posts: &[Post], criteria: &FilterCriteria) -> Vec<Post> {
    let needle = criteria.search_text.to_lowercase();

    posts
        .iter()
        .filter(|post| matches_search(post, &needle) && criteria.matches_facets(post))
        .cloned()
        .collect()
}

fn matches_search(post: &Post, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }

    let author = post
        .author
        .as_ref()
        .map(|a| a.username.to_lowercase())
        .unwrap_or_default();

    post.title.to_lowercase().contains(needle) || author.contains(needle)
}

impl FilterCriteria {
    /// Category and kind predicates
    fn matches_facets(&self, post: &Post) -> bool {
        let category_ok = match &self.category {
            CategoryFilter::All => true,
            CategoryFilter::Only(id) => post.category_id() == Some(id.as_str()),
        };
        let kind_ok = match self.kind {
            KindFilter::All => true,
            KindFilter::Only(kind) => post.kind() == kind,
        };

        category_ok && kind_ok
    }
}
