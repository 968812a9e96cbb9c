//! Rendering a [`BindError`] as the response sent back to the client.

use crate::error::BindError;
use bytes::Bytes;
use http::header::CONTENT_TYPE;
use http::{HeaderValue, Response};
use tracing::debug;

const TEXT_PLAIN_UTF_8: &str = "text/plain; charset=utf-8";

impl BindError {
    /// Builds a plain text response carrying the error's status and message.
    pub fn into_response(self) -> Response<Bytes> {
        let status = self.status();
        let message = self.message();
        debug!(status = status.as_u16(), message = %message, "rejecting request payload");

        let mut response = Response::new(Bytes::from(message));
        *response.status_mut() = status;
        response.headers_mut().insert(CONTENT_TYPE, HeaderValue::from_static(TEXT_PLAIN_UTF_8));
        response
    }
}

impl From<BindError> for Response<Bytes> {
    fn from(err: BindError) -> Self {
        err.into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::{Method, StatusCode};

    #[test]
    fn content_type_matches_mime_constant() {
        assert_eq!(TEXT_PLAIN_UTF_8, mime::TEXT_PLAIN_UTF_8.as_ref());
    }

    #[test]
    fn bad_request_response() {
        let response = BindError::empty_body(Method::POST).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.headers().get(CONTENT_TYPE).unwrap(), TEXT_PLAIN_UTF_8);
        assert_eq!(response.body(), &Bytes::from_static(b"request body can't be empty"));
    }

    #[test]
    fn unsupported_media_type_response() {
        let response: Response<Bytes> = BindError::unsupported_content_type("text/xml").into();

        assert_eq!(response.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(response.body(), &Bytes::from_static(b"Unsupported Media Type"));
    }
}
