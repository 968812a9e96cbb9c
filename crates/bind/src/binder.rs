//! The payload binder: body presence policy, content-type dispatch and decode classification.
//!
//! Binding runs three steps, each either failing with a [`BindError`] or moving on:
//!
//! 1. **presence**: a request declaring no body is rejected, `GET` and `DELETE` with
//!    [`BindError::MethodBodyConflict`], every other method with [`BindError::EmptyBody`]
//! 2. **dispatch**: the content type is matched by prefix against the registered decoders, in
//!    registration order, the first match wins; no match is [`BindError::UnsupportedContentType`]
//! 3. **decode**: the matched [`BodyDecoder`] runs and its [`DecodeError`] is mapped onto the
//!    remaining error kinds
//!
//! The binder keeps no state between calls and never logs, so a single instance can be shared
//! by every worker of a server.
//!
//! # Example
//! ```
//! use bytes::Bytes;
//! use http::{Method, Request, StatusCode};
//! use micro_bind::decode::FormDecoder;
//! use micro_bind::{Binder, PayloadBinder};
//! use serde::Deserialize;
//!
//! #[derive(Deserialize, Debug, Default)]
//! struct Params {
//!     name: String,
//! }
//!
//! let binder = PayloadBinder::new().register("application/x-www-form-urlencoded", FormDecoder);
//!
//! let request = Request::builder()
//!     .method(Method::POST)
//!     .header(http::header::CONTENT_TYPE, "application/x-www-form-urlencoded")
//!     .body(Bytes::from_static(b"name=zava"))
//!     .unwrap();
//!
//! let mut params = Params::default();
//! binder.bind(&mut params, &request).unwrap();
//! assert_eq!(params.name, "zava");
//!
//! let request = Request::builder().method(Method::GET).body(Bytes::new()).unwrap();
//! let err = binder.bind(&mut params, &request).unwrap_err();
//! assert_eq!(err.status(), StatusCode::BAD_REQUEST);
//! ```

use crate::decode::{BodyDecoder, DecodeError, JsonDecoder};
use crate::error::BindError;
use crate::request::RequestDescriptor;
use http::Method;
use serde::de::DeserializeOwned;

/// Binds a request payload into a caller owned destination.
pub trait Binder {
    /// Decodes the body of `req` into `destination`.
    ///
    /// On success the destination holds the decoded value. On failure the bundled decoders leave
    /// it untouched.
    fn bind<T, R>(&self, destination: &mut T, req: &R) -> Result<(), BindError>
    where
        T: DeserializeOwned,
        R: RequestDescriptor + ?Sized;
}

/// An ordered chain of `(prefix, decoder)` pairs.
///
/// Built by [`PayloadBinder::register`]; `()` is the empty chain and `(C, PrefixRoute<D>)`
/// consults `C` before the route appended last.
pub trait DecoderChain: Send + Sync {
    /// Decodes the body of `req` with the first decoder whose prefix matches `content_type`.
    ///
    /// Returns `None` if no prefix matches, in which case the body is never read.
    fn decode<T, R>(&self, content_type: &str, req: &R) -> Option<Result<T, DecodeError>>
    where
        T: DeserializeOwned,
        R: RequestDescriptor + ?Sized;
}

impl DecoderChain for () {
    #[inline]
    fn decode<T, R>(&self, _content_type: &str, _req: &R) -> Option<Result<T, DecodeError>>
    where
        T: DeserializeOwned,
        R: RequestDescriptor + ?Sized,
    {
        None
    }
}

impl<C, D> DecoderChain for (C, PrefixRoute<D>)
where
    C: DecoderChain,
    D: BodyDecoder,
{
    fn decode<T, R>(&self, content_type: &str, req: &R) -> Option<Result<T, DecodeError>>
    where
        T: DeserializeOwned,
        R: RequestDescriptor + ?Sized,
    {
        let (head, route) = self;
        match head.decode(content_type, req) {
            Some(result) => Some(result),
            None if route.matches(content_type) => Some(route.decoder.decode(req.body())),
            None => None,
        }
    }
}

/// A decoder registered for every content type starting with `prefix`.
#[derive(Debug, Clone)]
pub struct PrefixRoute<D> {
    prefix: String,
    decoder: D,
}

impl<D> PrefixRoute<D> {
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    /// ASCII case-insensitive prefix match, so parameters like `; charset=utf-8` are ignored.
    pub fn matches(&self, content_type: &str) -> bool {
        content_type
            .as_bytes()
            .get(..self.prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(self.prefix.as_bytes()))
    }
}

/// The decoder chain of [`PayloadBinder::new`]: JSON only.
pub type JsonChain = ((), PrefixRoute<JsonDecoder>);

/// The default [`Binder`].
///
/// Starts either with JSON support ([`PayloadBinder::new`]) or with nothing registered
/// ([`PayloadBinder::empty`]); more content types are added with [`PayloadBinder::register`].
#[derive(Debug, Clone)]
pub struct PayloadBinder<C = JsonChain> {
    decoders: C,
}

impl PayloadBinder<()> {
    /// A binder rejecting every content type until decoders are registered.
    pub fn empty() -> Self {
        Self { decoders: () }
    }
}

impl PayloadBinder<JsonChain> {
    /// A binder decoding `application/json` bodies.
    pub fn new() -> Self {
        PayloadBinder::empty().register(mime::APPLICATION_JSON.essence_str(), JsonDecoder)
    }
}

impl Default for PayloadBinder<JsonChain> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: DecoderChain> PayloadBinder<C> {
    /// Appends a decoder for content types starting with `prefix`.
    ///
    /// Decoders registered earlier take precedence when several prefixes match.
    pub fn register<D, P>(self, prefix: P, decoder: D) -> PayloadBinder<(C, PrefixRoute<D>)>
    where
        D: BodyDecoder,
        P: Into<String>,
    {
        PayloadBinder { decoders: (self.decoders, PrefixRoute { prefix: prefix.into(), decoder }) }
    }

    pub fn decoders(&self) -> &C {
        &self.decoders
    }

    /// Runs the bind steps and returns the decoded value.
    pub fn decode<T, R>(&self, req: &R) -> Result<T, BindError>
    where
        T: DeserializeOwned,
        R: RequestDescriptor + ?Sized,
    {
        if req.content_length() == 0 {
            let method = req.method();
            // parameter binding for body-less methods is not supported
            if matches!(method, &Method::GET | &Method::DELETE) {
                return Err(BindError::method_body_conflict(method.clone()));
            }
            return Err(BindError::empty_body(method.clone()));
        }

        let content_type = req.content_type();
        match self.decoders.decode(content_type, req) {
            Some(result) => result.map_err(BindError::from),
            None => Err(BindError::unsupported_content_type(content_type)),
        }
    }
}

impl<C: DecoderChain> Binder for PayloadBinder<C> {
    fn bind<T, R>(&self, destination: &mut T, req: &R) -> Result<(), BindError>
    where
        T: DeserializeOwned,
        R: RequestDescriptor + ?Sized,
    {
        *destination = self.decode(req)?;
        Ok(())
    }
}
