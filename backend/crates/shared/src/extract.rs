//! Request body extraction (feature `axum`)
//!
//! [`JsonBody`] behaves like `axum::Json` but rejects with an [`AppError`],
//! so a malformed or incomplete body is answered with the same problem
//! details body as every other bad request.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;

use crate::error::app_error::AppError;

/// JSON request body
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(rejection_to_app_error(rejection)),
        }
    }
}

fn rejection_to_app_error(rejection: JsonRejection) -> AppError {
    match rejection {
        JsonRejection::MissingJsonContentType(_) => {
            AppError::bad_request("request body must be JSON")
                .with_action("Send the body with `Content-Type: application/json`")
        }
        // Names the offending field, e.g. "missing field `title`"
        JsonRejection::JsonDataError(e) => AppError::bad_request(e.body_text()),
        JsonRejection::JsonSyntaxError(e) => AppError::bad_request(e.body_text()),
        other => AppError::bad_request(other.body_text()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::kind::ErrorKind;
    use axum::body::Body;
    use axum::http::header;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Draft {
        title: String,
    }

    fn request(content_type: Option<&str>, body: &str) -> Request {
        let mut builder = axum::http::Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    #[tokio::test]
    async fn test_valid_body_is_extracted() {
        let JsonBody(draft) =
            JsonBody::<Draft>::from_request(request(Some("application/json"), r#"{"title":"T"}"#), &())
                .await
                .unwrap();
        assert_eq!(draft.title, "T");
    }

    #[tokio::test]
    async fn test_missing_field_is_bad_request_naming_it() {
        let err = JsonBody::<Draft>::from_request(request(Some("application/json"), "{}"), &())
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BadRequest);
        assert!(err.message().contains("title"), "{}", err.message());
    }

    #[tokio::test]
    async fn test_syntax_error_is_bad_request() {
        let err = JsonBody::<Draft>::from_request(request(Some("application/json"), "{"), &())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[tokio::test]
    async fn test_missing_content_type_is_bad_request() {
        let err = JsonBody::<Draft>::from_request(request(None, r#"{"title":"T"}"#), &())
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), "request body must be JSON");
    }
}
