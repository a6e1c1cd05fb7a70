// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Constructors that adapt plain values, callbacks and event targets.

pub mod from_callback;
pub mod from_event;
pub mod of;
