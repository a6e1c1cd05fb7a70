// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Prelude module re-exporting every operator.
//!
//! ```ignore
//! use ripple_stream::prelude::*;
//!
//! let processed = source.filter(...).map(...).skip_repeats();
//! ```

pub use crate::combine::{combine, CombineWithExt};
pub use crate::combine_latest::{combine_latest, combine_object};
pub use crate::filter::FilterExt;
pub use crate::flat_map::FlatMapExt;
pub use crate::map::MapExt;
pub use crate::merge::{merge, MergeWithExt};
pub use crate::skip::SkipExt;
pub use crate::skip_repeats::SkipRepeatsExt;
pub use crate::start_with::StartWithExt;
pub use crate::switch_latest::SwitchLatestExt;
pub use crate::toggle::ToggleExt;
