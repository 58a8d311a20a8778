use super::model::{Post, Viewer};

/// Order posts for a viewer.
///
/// Newest first, ties keeping their input order. For an identified viewer
/// with interests, posts in those interests are then moved ahead of the
/// rest while each group keeps its recency order.
pub fn rank(posts: &[Post], viewer: &Viewer) -> Vec<Post> {
    let mut ranked = posts.to_vec();
    ranked.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    if !viewer.personalizes() {
        return ranked;
    }

    stable_partition(ranked, |post| viewer.is_interested_in(post))
}

/// Elements satisfying `pred` first, then the others, each group in its
/// original relative order.
pub fn stable_partition<T, F>(items: Vec<T>, mut pred: F) -> Vec<T>
where
    F: FnMut(&T) -> bool,
{
    let (mut head, tail): (Vec<T>, Vec<T>) = items.into_iter().partition(|item| pred(item));
    head.extend(tail);
    head
}
