use crate::app::models::api_error::ApiError;
use axum::Json;
use axum_macros::FromRequest;

/// `Json<T>` whose rejections render as [`ApiError`] bodies instead of plain text.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct JsonFromRequest<T>(pub T);

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        extract::FromRequest,
        http::{header::CONTENT_TYPE, Request, StatusCode},
    };
    use serde::Deserialize;

    use super::JsonFromRequest;

    #[derive(Debug, Deserialize)]
    struct Payload {
        count: u32,
    }

    fn json_request(body: &'static str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn extracts_valid_body() {
        let JsonFromRequest(payload) =
            JsonFromRequest::<Payload>::from_request(json_request(r#"{"count": 3}"#), &())
                .await
                .unwrap();

        assert_eq!(payload.count, 3);
    }

    #[tokio::test]
    async fn type_mismatch_is_unprocessable() {
        let Err(err) =
            JsonFromRequest::<Payload>::from_request(json_request(r#"{"count": "x"}"#), &()).await
        else {
            panic!("expected rejection");
        };

        assert_eq!(err.code, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let Err(err) =
            JsonFromRequest::<Payload>::from_request(json_request(r#"{"count": "#), &()).await
        else {
            panic!("expected rejection");
        };

        assert_eq!(err.code, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_content_type_is_unsupported() {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(r#"{"count": 3}"#))
            .unwrap();

        let Err(err) = JsonFromRequest::<Payload>::from_request(request, &()).await else {
            panic!("expected rejection");
        };

        assert_eq!(err.code, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
