use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use super::errors::StartupError;

/// Allows a single frontend origin, without credentials. The allow-origin
/// header is only echoed back to a matching `Origin`.
pub fn cors_layer(frontend_url: &str) -> Result<CorsLayer, StartupError> {
    let origin = frontend_url
        .trim_end_matches('/')
        .parse::<HeaderValue>()
        .map_err(|_| StartupError::FrontendUrl(frontend_url.to_string()))?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_headers([CONTENT_TYPE])
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE]))
}
