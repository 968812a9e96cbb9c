//! Read-only views over an inbound request.
//!
//! The binder never touches the transport: it only needs the method, the declared body length,
//! the declared content type and the already buffered body. [`RequestDescriptor`] exposes exactly
//! these four things, and is implemented for `http::Request<B>` with a buffered body as well as
//! for [`RequestParts`], a borrowed view for transports that don't use the `http` types.

use http::header::{CONTENT_LENGTH, CONTENT_TYPE};
use http::{Method, Request};

/// What the binder reads from a request.
pub trait RequestDescriptor {
    /// The HTTP method of the request.
    fn method(&self) -> &Method;

    /// The declared body length, `0` means the request has no body.
    fn content_length(&self) -> u64;

    /// The raw `Content-Type` value including any parameters, empty if absent.
    fn content_type(&self) -> &str;

    /// The buffered body.
    fn body(&self) -> &[u8];
}

impl<R: RequestDescriptor + ?Sized> RequestDescriptor for &R {
    #[inline]
    fn method(&self) -> &Method {
        (**self).method()
    }

    #[inline]
    fn content_length(&self) -> u64 {
        (**self).content_length()
    }

    #[inline]
    fn content_type(&self) -> &str {
        (**self).content_type()
    }

    #[inline]
    fn body(&self) -> &[u8] {
        (**self).body()
    }
}

/// A request whose body has already been buffered, e.g. `Request<Bytes>`.
///
/// The declared length is the `Content-Length` header when it holds a valid number, otherwise
/// the length of the buffered body. A `Content-Type` value that isn't visible ASCII is treated
/// as absent.
impl<B> RequestDescriptor for Request<B>
where
    B: AsRef<[u8]>,
{
    fn method(&self) -> &Method {
        Request::method(self)
    }

    fn content_length(&self) -> u64 {
        self.headers()
            .get(CONTENT_LENGTH)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<u64>().ok())
            .unwrap_or_else(|| Request::body(self).as_ref().len() as u64)
    }

    fn content_type(&self) -> &str {
        self.headers().get(CONTENT_TYPE).and_then(|value| value.to_str().ok()).unwrap_or_default()
    }

    fn body(&self) -> &[u8] {
        Request::body(self).as_ref()
    }
}

/// A borrowed request view assembled by the caller.
///
/// # Example
/// ```
/// use http::Method;
/// use micro_bind::request::{RequestDescriptor, RequestParts};
///
/// let body = br#"{"name":"a"}"#;
/// let parts = RequestParts::new(&Method::POST, body).with_content_type("application/json");
///
/// assert_eq!(parts.content_length(), body.len() as u64);
/// assert_eq!(parts.content_type(), "application/json");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequestParts<'a> {
    method: &'a Method,
    content_length: u64,
    content_type: &'a str,
    body: &'a [u8],
}

impl<'a> RequestParts<'a> {
    /// Creates a view declaring the body's own length and no content type.
    pub fn new(method: &'a Method, body: &'a [u8]) -> Self {
        Self { method, content_length: body.len() as u64, content_type: "", body }
    }

    #[must_use]
    pub fn with_content_type(mut self, content_type: &'a str) -> Self {
        self.content_type = content_type;
        self
    }

    /// Overrides the declared length, for transports that report it separately from the body.
    #[must_use]
    pub fn with_content_length(mut self, content_length: u64) -> Self {
        self.content_length = content_length;
        self
    }
}

impl RequestDescriptor for RequestParts<'_> {
    fn method(&self) -> &Method {
        self.method
    }

    fn content_length(&self) -> u64 {
        self.content_length
    }

    fn content_type(&self) -> &str {
        self.content_type
    }

    fn body(&self) -> &[u8] {
        self.body
    }
}
