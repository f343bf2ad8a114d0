use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Errors the HTTP router can answer with. Bodies are plain text.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("Not found")]
    NotFound,
    #[error("Internal server error")]
    Internal(String),
}

impl RouteError {
    pub fn status(&self) -> StatusCode {
        match self {
            RouteError::NotFound => StatusCode::NOT_FOUND,
            RouteError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        if let RouteError::Internal(detail) = &self {
            tracing::error!(error = %detail, "request failed with internal error");
        }
        (self.status(), self.to_string()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn it_displays_plain_messages() {
        assert_eq!(RouteError::NotFound.to_string(), "Not found");
        assert_eq!(
            RouteError::Internal("boom".into()).to_string(),
            "Internal server error"
        );
    }

    #[tokio::test]
    async fn internal_detail_is_not_leaked_to_the_body() {
        let resp = RouteError::Internal("secret detail".into()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"Internal server error");
    }

    #[tokio::test]
    async fn not_found_maps_to_404() {
        let resp = RouteError::NotFound.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let bytes = resp.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"Not found");
    }
}
