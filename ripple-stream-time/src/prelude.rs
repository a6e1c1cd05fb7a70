// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module for convenient imports.
//!
//! ```rust
//! use ripple_stream_time::prelude::*;
//! ```

pub use crate::debounce::{CompletionPolicy, DebounceConfig, DebounceExt};
