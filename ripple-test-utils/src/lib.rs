// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Test utilities and fixtures for the ripple workspace.
//!
//! Not meant for production code.
//!
//! # Key Types
//!
//! - [`Recorder`] - observer that records every [`Notification`](ripple_core::Notification)
//! - [`TestSource`] - hand-driven observable that counts its subscribers
//! - [`TestEventTarget`] - in-memory event target for `from_event`
//! - [`TestError`] - user error type for error-path tests
//!
//! ## Test Fixtures
//!
//! ```rust
//! use ripple_test_utils::test_data::{person_alice, TestData};
//!
//! match person_alice() {
//!     TestData::Person { name, .. } => assert_eq!(name, "Alice"),
//!     _ => panic!("Expected person"),
//! }
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
pub mod event_target;
pub mod helpers;
pub mod recorder;
pub mod test_data;
pub mod test_error;
pub mod test_source;

pub use event_target::TestEventTarget;
pub use helpers::{assert_completed_once, collect_notifications, collect_values};
pub use recorder::Recorder;
pub use test_data::TestData;
pub use test_error::{user_error, TestError};
pub use test_source::TestSource;
