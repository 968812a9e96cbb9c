use http::{Method, StatusCode};
use thiserror::Error;

use crate::decode::DecodeError;

/// The error returned when a request payload can't be bound to a destination.
///
/// Every variant maps onto a client error status, see [`BindError::status`]. The
/// [`Display`](std::fmt::Display) output is the message meant for the client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BindError {
    #[error("GET or DELETE methods can't have body")]
    MethodBodyConflict { method: Method },

    #[error("request body can't be empty")]
    EmptyBody { method: Method },

    #[error("Unsupported Media Type")]
    UnsupportedContentType { content_type: String },

    #[error("syntax error: offset={offset}, error={reason}")]
    MalformedSyntax { offset: usize, reason: String },

    #[error("type error: expected={expected}, got={got}, field={field}, offset={offset}")]
    TypeMismatch { expected: String, got: String, field: String, offset: usize },

    #[error("{reason}")]
    OtherDecodeFailure { reason: String },

    #[error("invalid body: {reason}")]
    UnreadableBody { reason: String },
}

impl BindError {
    pub fn method_body_conflict(method: Method) -> Self {
        Self::MethodBodyConflict { method }
    }

    pub fn empty_body(method: Method) -> Self {
        Self::EmptyBody { method }
    }

    pub fn unsupported_content_type<S: ToString>(content_type: S) -> Self {
        Self::UnsupportedContentType { content_type: content_type.to_string() }
    }

    pub fn unreadable_body<S: ToString>(str: S) -> Self {
        Self::UnreadableBody { reason: str.to_string() }
    }

    /// The status code the error should be answered with.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UnsupportedContentType { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::MethodBodyConflict { .. }
            | Self::EmptyBody { .. }
            | Self::MalformedSyntax { .. }
            | Self::TypeMismatch { .. }
            | Self::OtherDecodeFailure { .. }
            | Self::UnreadableBody { .. } => StatusCode::BAD_REQUEST,
        }
    }

    /// The human readable message, same as the `Display` output.
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl From<DecodeError> for BindError {
    fn from(err: DecodeError) -> Self {
        match err {
            DecodeError::Syntax { offset, reason } => Self::MalformedSyntax { offset, reason },
            DecodeError::TypeMismatch { expected, got, field, offset } => {
                Self::TypeMismatch { expected, got, field, offset }
            }
            DecodeError::Other(reason) => Self::OtherDecodeFailure { reason },
        }
    }
}
