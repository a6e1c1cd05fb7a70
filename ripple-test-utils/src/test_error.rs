// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use ripple_core::RippleError;

/// User-level failure used to exercise error propagation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("test failure: {0}")]
pub struct TestError(pub String);

impl TestError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// A `RippleError::UserError` wrapping a [`TestError`].
pub fn user_error(message: &str) -> RippleError {
    RippleError::user_error(TestError::new(message))
}
