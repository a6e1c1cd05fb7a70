// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Error types for the Ripple observable library
//!
//! Every error signal travelling through an [`Observable`](crate::Observable)
//! carries a [`RippleError`]. Upstream failures, panics caught in observer
//! callbacks and adapter failures are all folded into this one type so that
//! operators can forward them without knowing where they came from.
//!
//! # Examples
//!
//! ```
//! use ripple_core::{Result, RippleError};
//!
//! fn connect() -> Result<()> {
//!     Err(RippleError::stream_error("source not ready"))
//! }
//!
//! assert!(connect().is_err());
//! ```

/// Root error type for all Ripple operations
#[derive(Debug, thiserror::Error)]
pub enum RippleError {
    /// Stream processing encountered an error
    ///
    /// General purpose failure raised by sources and operators.
    #[error("Stream processing error: {context}")]
    StreamProcessingError {
        /// Description of what went wrong
        context: String,
    },

    /// Custom error from user code
    ///
    /// Wraps failures produced by user-provided futures and callbacks.
    #[error("User error: {0}")]
    UserError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// A callback panicked while handling a signal
    ///
    /// Raised when an observer's `next` callback or a producer panics
    /// synchronously. The panic is caught and delivered as an error signal.
    #[error("Callback panicked: {context}")]
    CallbackPanicked {
        /// The panic payload, rendered as text when possible
        context: String,
    },

    /// No async runtime was available to run a timer or a future
    #[error("Runtime unavailable: {context}")]
    RuntimeUnavailable {
        /// What was being scheduled
        context: String,
    },
}

impl RippleError {
    /// Create a stream processing error with the given context
    pub fn stream_error(context: impl Into<String>) -> Self {
        Self::StreamProcessingError {
            context: context.into(),
        }
    }

    /// Wrap a user error
    pub fn user_error(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UserError(Box::new(error))
    }

    /// Create a runtime-unavailable error with the given context
    pub fn runtime_unavailable(context: impl Into<String>) -> Self {
        Self::RuntimeUnavailable {
            context: context.into(),
        }
    }

    /// Build a `CallbackPanicked` error from a payload returned by
    /// [`std::panic::catch_unwind`].
    pub fn callback_panicked(payload: &(dyn std::any::Any + Send)) -> Self {
        let context = if let Some(message) = payload.downcast_ref::<&str>() {
            (*message).to_string()
        } else if let Some(message) = payload.downcast_ref::<String>() {
            message.clone()
        } else {
            "non-string panic payload".to_string()
        };
        Self::CallbackPanicked { context }
    }

    /// Returns `true` if the error was produced by a caught panic.
    #[must_use]
    pub const fn is_panic(&self) -> bool {
        matches!(self, Self::CallbackPanicked { .. })
    }
}

/// Specialized Result type for Ripple operations
pub type Result<T> = std::result::Result<T, RippleError>;

/// Extension trait for converting errors into `RippleError`
pub trait IntoRippleError {
    /// Convert this error into a `RippleError`
    fn into_ripple(self) -> RippleError;
}

impl<E: std::error::Error + Send + Sync + 'static> IntoRippleError for E {
    fn into_ripple(self) -> RippleError {
        RippleError::user_error(self)
    }
}

impl Clone for RippleError {
    fn clone(&self) -> Self {
        match self {
            Self::StreamProcessingError { context } => Self::StreamProcessingError {
                context: context.clone(),
            },
            // The boxed source cannot be cloned, keep its message
            Self::UserError(e) => Self::StreamProcessingError {
                context: format!("User error: {e}"),
            },
            Self::CallbackPanicked { context } => Self::CallbackPanicked {
                context: context.clone(),
            },
            Self::RuntimeUnavailable { context } => Self::RuntimeUnavailable {
                context: context.clone(),
            },
        }
    }
}
