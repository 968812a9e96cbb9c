//! Request payload binding for the micro web framework
//!
//! This crate decodes the body of an inbound HTTP request into a typed value. It checks that a
//! body is present, picks a decoder from the declared `Content-Type`, runs it, and turns any
//! failure into a [`BindError`] carrying the status code and message to answer with.
//!
//! # Example
//!
//! ```
//! use bytes::Bytes;
//! use http::{Method, Request, StatusCode};
//! use micro_bind::{Binder, PayloadBinder};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, Default)]
//! struct User {
//!     name: String,
//!     age: u32,
//! }
//!
//! let binder = PayloadBinder::new();
//!
//! let request = Request::builder()
//!     .method(Method::POST)
//!     .header(http::header::CONTENT_TYPE, "application/json; charset=utf-8")
//!     .body(Bytes::from_static(br#"{"name":"zava","age":18}"#))
//!     .unwrap();
//!
//! let mut user = User::default();
//! binder.bind(&mut user, &request).unwrap();
//! assert_eq!(user.name, "zava");
//! assert_eq!(user.age, 18);
//!
//! let request = Request::builder()
//!     .method(Method::POST)
//!     .header(http::header::CONTENT_TYPE, "application/json")
//!     .body(Bytes::from_static(br#"{"name":"zava","age":"eighteen"}"#))
//!     .unwrap();
//!
//! let err = binder.bind(&mut user, &request).unwrap_err();
//! assert_eq!(err.status(), StatusCode::BAD_REQUEST);
//! assert!(err.to_string().contains("field=age"));
//! ```
//!
//! # Architecture
//!
//! - [`binder`]: the [`Binder`] trait and [`PayloadBinder`], presence check and content-type dispatch
//! - [`decode`]: the [`BodyDecoder`](decode::BodyDecoder) strategies, JSON and form
//! - [`request`]: the [`RequestDescriptor`] view the binder reads from
//! - [`extract`]: collecting a streamed body before binding
//!
//! # Error Handling
//!
//! | Kind | Status |
//! |---|---|
//! | [`BindError::MethodBodyConflict`] | 400 |
//! | [`BindError::EmptyBody`] | 400 |
//! | [`BindError::UnsupportedContentType`] | 415 |
//! | [`BindError::MalformedSyntax`] | 400 |
//! | [`BindError::TypeMismatch`] | 400 |
//! | [`BindError::OtherDecodeFailure`] | 400 |
//! | [`BindError::UnreadableBody`] | 400 |
//!
//! [`BindError::into_response`] renders any of them as a plain text response.
//!
//! # Limitations
//!
//! - `GET` and `DELETE` requests without a body are rejected, query parameters are not bound
//! - multipart forms are not supported

pub mod binder;
pub mod decode;
pub mod extract;
pub mod request;

mod error;
mod response;

pub use binder::Binder;
pub use binder::PayloadBinder;
pub use error::BindError;
pub use request::RequestDescriptor;
