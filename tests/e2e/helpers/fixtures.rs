use serde_json::{json, Value};

use super::content_api::FakeContentApi;

pub fn interest(id: &str, name: &str) -> Value {
    json!({ "_id": id, "name": name })
}

pub fn author(id: &str, username: &str) -> Value {
    json!({ "_id": id, "username": username })
}

/// Article record as the content API serves it
pub fn article(id: &str, title: &str, category: &str, author_id: &str, created_at: &str) -> Value {
    json!({
        "_id": id,
        "title": title,
        "introduction": format!("Introduction to {}", title),
        "category": interest(category, &category.to_uppercase()),
        "author": author(author_id, &format!("{}-name", author_id)),
        "createdAt": created_at,
        "thumbnail": format!("https://img.example.com/articles/{}.png", id),
    })
}

/// Blog record as the content API serves it
pub fn blog(id: &str, title: &str, category: &str, author_id: &str, created_at: &str) -> Value {
    json!({
        "_id": id,
        "title": title,
        "content": format!("<h2>{}</h2><p>Body of   <em>{}</em></p>", title, id),
        "category": interest(category, &category.to_uppercase()),
        "author": author(author_id, &format!("{}-name", author_id)),
        "createdAt": created_at,
    })
}

/// A small catalogue:
///
/// | key       | category | author | created            |
/// |-----------|----------|--------|--------------------|
/// | article-1 | sports   | alice  | 2024-05-10 (newest)|
/// | blog-1    | tech     | bob    | 2024-05-09         |
/// | article-2 | tech     | alice  | 2024-05-08         |
/// | blog-2    | sports   | bob    | 2024-05-07 (oldest)|
pub fn seed_catalogue(api: &FakeContentApi) {
    api.add_interest(interest("tech", "Technology"));
    api.add_interest(interest("sports", "Sports"));

    api.add_article(article("1", "Cup final recap", "sports", "alice", "2024-05-10T09:00:00.000Z"));
    api.add_article(article("2", "Async Rust in practice", "tech", "alice", "2024-05-08T09:00:00.000Z"));
    api.add_blog(blog("1", "Annual tooling review", "tech", "bob", "2024-05-09T09:00:00.000Z"));
    api.add_blog(blog("2", "Training diary", "sports", "bob", "2024-05-07T09:00:00.000Z"));
}
