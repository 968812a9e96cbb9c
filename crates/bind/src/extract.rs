//! Binding requests whose body is still a stream.
//!
//! The binder itself only works on buffered bodies. [`bind_body`] collects an
//! [`http_body::Body`] first, then hands the buffered request to [`PayloadBinder::decode`].
//!
//! # Example
//! ```no_run
//! # use micro_bind::extract::bind_body;
//! # use micro_bind::{BindError, PayloadBinder};
//! # use serde::Deserialize;
//! # #[allow(dead_code)]
//! #[derive(Deserialize, Debug)]
//! struct Params {
//!     name: String,
//!     zip: String,
//! }
//!
//! async fn handle<B>(binder: &PayloadBinder, request: http::Request<B>) -> Result<String, BindError>
//! where
//!     B: http_body::Body,
//!     B::Error: std::fmt::Display,
//! {
//!     let params: Params = bind_body(binder, request).await?;
//!     Ok(format!("received params: {:?}", params))
//! }
//! ```

use crate::binder::{DecoderChain, PayloadBinder};
use crate::error::BindError;
use http::Request;
use http_body::Body;
use http_body_util::BodyExt;
use serde::de::DeserializeOwned;
use std::fmt::Display;

/// Collects the body of `request` and binds it with `binder`.
///
/// A failing body stream is reported as [`BindError::UnreadableBody`]. Without a
/// `Content-Length` header the collected length is used as the declared length.
pub async fn bind_body<T, B, C>(binder: &PayloadBinder<C>, request: Request<B>) -> Result<T, BindError>
where
    T: DeserializeOwned,
    B: Body,
    B::Error: Display,
    C: DecoderChain,
{
    let (parts, body) = request.into_parts();
    let bytes = body.collect().await.map_err(BindError::unreadable_body)?.to_bytes();

    binder.decode(&Request::from_parts(parts, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use futures::stream;
    use http::header::CONTENT_TYPE;
    use http::{Method, StatusCode};
    use http_body::Frame;
    use http_body_util::{Empty, Full, StreamBody};
    use serde::Deserialize;
    use std::io;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Person {
        name: String,
        age: u8,
    }

    fn json_request<B>(method: Method, body: B) -> Request<B> {
        Request::builder().method(method).header(CONTENT_TYPE, "application/json").body(body).unwrap()
    }

    #[tokio::test]
    async fn bind_full_body() {
        let request = json_request(Method::POST, Full::new(Bytes::from_static(br#"{"name":"a","age":3}"#)));

        let person: Person = bind_body(&PayloadBinder::new(), request).await.unwrap();

        assert_eq!(person, Person { name: "a".into(), age: 3 });
    }

    #[tokio::test]
    async fn bind_streamed_body() {
        let chunks: Vec<Result<_, io::Error>> = vec![
            Ok(Frame::data(Bytes::from_static(br#"{"name":"#))),
            Ok(Frame::data(Bytes::from_static(br#""b","age""#))),
            Ok(Frame::data(Bytes::from_static(b":4}"))),
        ];
        let request = json_request(Method::PUT, StreamBody::new(stream::iter(chunks)));

        let person: Person = bind_body(&PayloadBinder::new(), request).await.unwrap();

        assert_eq!(person, Person { name: "b".into(), age: 4 });
    }

    #[tokio::test]
    async fn empty_stream_is_empty_body() {
        let request = json_request(Method::POST, Empty::<Bytes>::new());

        let err = bind_body::<Person, _, _>(&PayloadBinder::new(), request).await.unwrap_err();

        assert_eq!(err, BindError::empty_body(Method::POST));
    }

    #[tokio::test]
    async fn get_with_empty_stream() {
        let request = json_request(Method::GET, Empty::<Bytes>::new());

        let err = bind_body::<Person, _, _>(&PayloadBinder::new(), request).await.unwrap_err();

        assert_eq!(err, BindError::method_body_conflict(Method::GET));
    }

    #[tokio::test]
    async fn failing_stream_is_unreadable() {
        let chunks: Vec<Result<Frame<Bytes>, io::Error>> = vec![
            Ok(Frame::data(Bytes::from_static(b"{"))),
            Err(io::Error::new(io::ErrorKind::ConnectionReset, "connection reset")),
        ];
        let request = json_request(Method::POST, StreamBody::new(stream::iter(chunks)));

        let err = bind_body::<Person, _, _>(&PayloadBinder::new(), request).await.unwrap_err();

        assert_eq!(err, BindError::unreadable_body("connection reset"));
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "invalid body: connection reset");
    }

    #[tokio::test]
    async fn type_error_through_stream() {
        let request = json_request(Method::POST, Full::new(Bytes::from_static(br#"{"name":"a","age":300}"#)));

        let err = bind_body::<Person, _, _>(&PayloadBinder::new(), request).await.unwrap_err();

        assert!(
            matches!(&err, BindError::TypeMismatch { expected, field, .. } if expected == "u8" && field == "age"),
            "{err:?}"
        );
    }
}
