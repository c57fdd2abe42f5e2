use crate::app::models::api_error::ApiError;
use axum::extract::Path;
use axum_macros::FromRequestParts;

/// `Path<T>` whose rejections render as [`ApiError`] bodies; unparseable
/// parameters are a 422.
#[derive(FromRequestParts)]
#[from_request(via(Path), rejection(ApiError))]
pub struct PathFromRequest<T>(pub T);

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::get,
        Router,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use super::PathFromRequest;

    async fn echo(PathFromRequest(id): PathFromRequest<i64>) -> String {
        id.to_string()
    }

    fn router() -> Router {
        Router::new().route("/items/:id", get(echo))
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn extracts_integer_id() {
        let response = router().oneshot(get_request("/items/42")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        assert_eq!(&bytes[..], b"42");
    }

    #[tokio::test]
    async fn non_integer_id_is_unprocessable_json() {
        let response = router().oneshot(get_request("/items/abc")).await.unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let bytes = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["code"], 422);
        assert!(body["message"].as_str().unwrap().contains("abc"));
    }
}
