use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::{domain::auth::JwtManager, domain::feed::Viewer, error::AppError};

/// Resolve the viewer for a request and attach it as an extension.
///
/// Requests without an `Authorization` header are served to an anonymous
/// viewer. A header that is present but not a valid bearer token is
/// rejected.
pub async fn viewer_middleware(
    State(jwt_manager): State<Arc<JwtManager>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let viewer = match request
        .headers()
        .get("authorization")
        .map(|v| v.to_str())
    {
        None => Viewer::anonymous(),
        Some(Err(_)) => {
            return Err(AppError::Unauthorized(
                "Invalid authorization header".to_string(),
            ))
        }
        Some(Ok(header)) => {
            let token = header.strip_prefix("Bearer ").ok_or_else(|| {
                AppError::Unauthorized("Invalid authorization format".to_string())
            })?;
            jwt_manager.viewer_from_token(token)?
        }
    };

    tracing::Span::current().record("viewer_id", tracing::field::debug(&viewer.id));
    request.extensions_mut().insert(viewer);

    Ok(next.run(request).await)
}
