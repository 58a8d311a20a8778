use axum::{
    http::{header, HeaderValue, Method},
    middleware,
    routing::{delete, get},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::controllers::{
    admin::AdminController, feed::FeedController, health, posts::PostController,
};
use crate::domain::auth::JwtManager;
use crate::domain::content::ContentRepository;
use crate::domain::feed::FeedService;
use crate::infrastructure::auth::{request_id_middleware, viewer_middleware};
use crate::infrastructure::config::Config;

/// Build the application router with all routes and layers
pub fn build_router(
    config: &Config,
    content_repo: Arc<dyn ContentRepository>,
    feed_service: Arc<FeedService>,
) -> Result<Router, Box<dyn std::error::Error>> {
    let jwt_manager = Arc::new(JwtManager::new(&config.jwt_secret));

    let feed_controller = Arc::new(FeedController::new(feed_service.clone()));
    let post_controller = Arc::new(PostController::new(feed_service.clone()));
    let admin_controller = Arc::new(AdminController::new(feed_service));

    // Feed routes (viewer optional; /api/me/posts requires one)
    let feed_routes = Router::new()
        .route("/api/feed", get(FeedController::get_feed))
        .route("/api/interests", get(FeedController::list_interests))
        .route("/api/me/posts", get(FeedController::my_posts))
        .with_state(feed_controller);

    // Post management (author or admin)
    let post_routes = Router::new()
        .route("/api/posts/:kind/:postId", delete(PostController::delete_post))
        .with_state(post_controller);

    // Admin console
    let admin_routes = Router::new()
        .route("/api/admin/overview", get(AdminController::overview))
        .with_state(admin_controller);

    let api_routes = Router::new()
        .merge(feed_routes)
        .merge(post_routes)
        .merge(admin_routes)
        .route_layer(middleware::from_fn_with_state(jwt_manager, viewer_middleware));

    let app = Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(content_repo)
        .merge(api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_id_middleware))
                .layer(cors_layer(config)?),
        );

    Ok(app)
}

fn cors_layer(config: &Config) -> Result<CorsLayer, Box<dyn std::error::Error>> {
    let layer = match &config.cors_allowed_origin {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin.parse::<HeaderValue>()?)
            .allow_methods([Method::GET, Method::DELETE])
            .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]),
        None if config.is_development() => CorsLayer::permissive(),
        // No origins allowed
        None => CorsLayer::new(),
    };
    Ok(layer)
}

/// Start the HTTP server
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
