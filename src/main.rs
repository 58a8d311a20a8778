use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use content_feed_backend::domain::content::ContentRepository;
use content_feed_backend::domain::feed::FeedService;
use content_feed_backend::infrastructure::config::{Config, LogFormat};
use content_feed_backend::infrastructure::http::{build_router, start_http_server};
use content_feed_backend::infrastructure::repositories::HttpContentRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting Content Feed Backend on {}:{}",
        config.host,
        config.port
    );

    tracing::info!(
        content_api_url = %config.content_api_url,
        has_api_token = config.content_api_token.is_some(),
        timeout_secs = config.content_api_timeout_secs,
        "Configuring content API client"
    );
    let content_repo: Arc<dyn ContentRepository> = Arc::new(HttpContentRepository::new(
        config.content_api_url.clone(),
        config.content_api_token.clone(),
        config.content_api_timeout(),
    )?);

    if config.feed_cache_ttl_secs == 0 {
        tracing::warn!("Feed snapshot cache disabled; every request fetches from the content API");
    } else {
        tracing::info!(ttl_secs = config.feed_cache_ttl_secs, "Feed snapshot cache enabled");
    }
    let feed_service = Arc::new(FeedService::new(
        content_repo.clone(),
        config.feed_cache_ttl(),
    ));

    let app = build_router(&config, content_repo, feed_service)?;

    start_http_server(Arc::new(config), app).await?;

    Ok(())
}

fn init_logging(config: &Config) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "content_feed_backend=debug,tower_http=debug".into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
