use content_feed_backend::domain::content::ContentRepository;
use content_feed_backend::domain::feed::FeedService;
use content_feed_backend::infrastructure::config::{Config, Environment, LogFormat};
use content_feed_backend::infrastructure::http::build_router;
use content_feed_backend::infrastructure::repositories::HttpContentRepository;
use std::sync::Arc;
use std::time::Duration;
use test_context::AsyncTestContext;
use tokio::net::TcpListener;

pub mod content_api;
pub mod fixtures;

use api_client::TestClient;
use content_api::FakeContentApi;

pub const TEST_JWT_SECRET: &str = "test-jwt-secret-key-for-testing-only";
pub const TEST_API_TOKEN: &str = "content-api-test-token";

pub struct TestContext {
    pub client: TestClient,
    pub content_api: FakeContentApi,
    #[allow(dead_code)]
    pub config: Config,
}

impl AsyncTestContext for TestContext {
    fn setup() -> impl std::future::Future<Output = Self> + Send {
        async {
            let content_api = FakeContentApi::start().await;

            let config = Config {
                host: "127.0.0.1".to_string(),
                port: 0, // Will be assigned by the OS
                environment: Environment::Development,
                log_format: LogFormat::Pretty,
                content_api_url: content_api.base_url.clone(),
                content_api_token: Some(TEST_API_TOKEN.to_string()),
                content_api_timeout_secs: 5,
                jwt_secret: TEST_JWT_SECRET.to_string(),
                feed_cache_ttl_secs: 0, // Tests seed data after startup
                cors_allowed_origin: None,
            };

            let content_repo: Arc<dyn ContentRepository> = Arc::new(
                HttpContentRepository::new(
                    config.content_api_url.clone(),
                    config.content_api_token.clone(),
                    config.content_api_timeout(),
                )
                .expect("Failed to build content API client"),
            );
            let feed_service = Arc::new(FeedService::new(
                content_repo.clone(),
                Duration::from_secs(config.feed_cache_ttl_secs),
            ));
            let app = build_router(&config, content_repo, feed_service)
                .expect("Failed to build router");

            // Start server
            let listener = TcpListener::bind("127.0.0.1:0")
                .await
                .expect("Failed to bind listener");
            let addr = listener.local_addr().expect("Failed to get local addr");
            let base_url = format!("http://{}", addr);

            tokio::spawn(async move {
                axum::serve(listener, app).await.unwrap();
            });

            Self {
                client: TestClient::new(&base_url),
                content_api,
                config,
            }
        }
    }

    fn teardown(self) -> impl std::future::Future<Output = ()> + Send {
        async {
            // Servers stop when the test runtime shuts down
        }
    }
}

/// Sign a viewer token the way the identity service would
pub fn generate_test_jwt(user_id: &str, interests: &[&str]) -> String {
    generate_test_jwt_with_role(user_id, interests, "user")
}

pub fn generate_test_jwt_with_role(user_id: &str, interests: &[&str], role: &str) -> String {
    use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
    use serde::Serialize;

    #[derive(Serialize)]
    struct Claims<'a> {
        sub: &'a str,
        interests: &'a [&'a str],
        role: &'a str,
        exp: i64,
        iat: i64,
    }

    let now = chrono::Utc::now();
    let claims = Claims {
        sub: user_id,
        interests,
        role,
        exp: (now + chrono::Duration::hours(1)).timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .unwrap()
}
