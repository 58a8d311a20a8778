use crate::e2e::helpers;

use helpers::assertions::post_keys;
use helpers::fixtures::seed_catalogue;
use helpers::{generate_test_jwt, generate_test_jwt_with_role, TestContext};
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_require_sign_in_to_delete(ctx: &TestContext) {
    seed_catalogue(&ctx.content_api);

    let response = ctx.client.delete("/api/posts/blog/1").await.unwrap();

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert!(ctx.content_api.deleted().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_let_authors_delete_their_posts(ctx: &TestContext) {
    seed_catalogue(&ctx.content_api);
    let token = generate_test_jwt("bob", &[]);

    let response = ctx
        .client
        .delete_with_auth("/api/posts/blog/1", &token)
        .await
        .unwrap();

    response.assert_status(StatusCode::NO_CONTENT);
    assert_eq!(ctx.content_api.deleted(), vec!["blog-1".to_string()]);

    // article-1 shares the id but is a different post
    let response = ctx.client.get("/api/feed").await.unwrap();
    let body = response.body.as_ref().unwrap();
    assert_eq!(
        post_keys(&body["posts"]),
        vec!["article-1", "article-2", "blog-2"]
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_hide_posts_the_viewer_does_not_manage(ctx: &TestContext) {
    seed_catalogue(&ctx.content_api);
    let token = generate_test_jwt("bob", &[]);

    let response = ctx
        .client
        .delete_with_auth("/api/posts/article/1", &token)
        .await
        .unwrap();

    response
        .assert_status(StatusCode::NOT_FOUND)
        .assert_error_message("Post not found");
    assert!(ctx.content_api.deleted().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_let_admins_delete_any_post(ctx: &TestContext) {
    seed_catalogue(&ctx.content_api);
    let token = generate_test_jwt_with_role("moderator", &[], "admin");

    let response = ctx
        .client
        .delete_with_auth("/api/posts/article/2", &token)
        .await
        .unwrap();

    response.assert_status(StatusCode::NO_CONTENT);
    assert_eq!(ctx.content_api.deleted(), vec!["article-2".to_string()]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_not_found_for_missing_post(ctx: &TestContext) {
    seed_catalogue(&ctx.content_api);
    let token = generate_test_jwt_with_role("moderator", &[], "admin");

    let response = ctx
        .client
        .delete_with_auth("/api/posts/blog/404", &token)
        .await
        .unwrap();

    response.assert_status(StatusCode::NOT_FOUND);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_unknown_post_kind(ctx: &TestContext) {
    let token = generate_test_jwt("bob", &[]);

    let response = ctx
        .client
        .delete_with_auth("/api/posts/video/1", &token)
        .await
        .unwrap();

    response
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("unknown post kind");
}
