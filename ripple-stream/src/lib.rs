// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! Composition operators for [`Observable`](ripple_core::Observable).
//!
//! Every operator builds a new observable whose producer subscribes to its
//! upstream observable(s) and re-emits derived signals. Operator state is
//! created per activation, so an operator result can be subscribed any
//! number of times. Unsubscribing a result unsubscribes every upstream it
//! created, transitively.
//!
//! ## Operator Categories
//!
//! ### Transformation
//!
//! - **[`map`](MapExt::map)** / **[`map_to`](MapExt::map_to)**: transform each value
//! - **[`flat_map`](FlatMapExt::flat_map)**: map to inner observables and merge them
//! - **[`switch_latest`](SwitchLatestExt::switch_latest)**: map to inner observables, keep only the latest
//!
//! ### Filtering
//!
//! - **[`filter`](FilterExt::filter)**: keep values matching a predicate
//! - **[`skip`](SkipExt::skip)**: drop the first n values
//! - **[`skip_repeats`](SkipRepeatsExt::skip_repeats)**: drop consecutive duplicates
//! - **[`toggle`](ToggleExt::toggle)**: gate values with a boolean observable
//!
//! ### Combination
//!
//! - **[`merge`]** / **[`merge_with`](MergeWithExt::merge_with)**: interleave several sources
//! - **[`combine`]** / **[`combine_with`](CombineWithExt::combine_with)**: latest values of two sources through a transform
//! - **[`combine_latest`]**: latest values of many sources as a `Vec`
//! - **[`combine_object`]**: latest values of keyed sources as a `BTreeMap`
//! - **[`start_with`](StartWithExt::start_with)**: prepend a value
//!
//! # Example
//!
//! ```rust
//! use ripple_core::of;
//! use ripple_stream::prelude::*;
//! use ripple_test_utils::collect_values;
//!
//! let result = merge([of([1, 1, 2]), of([3])])
//!     .skip_repeats()
//!     .map(|x| x * 10)
//!     .start_with(0);
//!
//! assert_eq!(collect_values(&result), vec![0, 10, 20, 30]);
//! ```

#![allow(clippy::multiple_crate_versions, clippy::doc_markdown)]
#[macro_use]
mod logging;
pub mod combine;
pub mod combine_latest;
pub mod filter;
pub mod flat_map;
pub mod map;
pub mod merge;
pub mod prelude;
pub mod skip;
pub mod skip_repeats;
pub mod start_with;
pub mod switch_latest;
pub mod toggle;
mod util;

pub use self::combine::{combine, CombineWithExt};
pub use self::combine_latest::{combine_latest, combine_object};
pub use self::filter::FilterExt;
pub use self::flat_map::FlatMapExt;
pub use self::map::MapExt;
pub use self::merge::{merge, MergeWithExt};
pub use self::skip::SkipExt;
pub use self::skip_repeats::SkipRepeatsExt;
pub use self::start_with::StartWithExt;
pub use self::switch_latest::SwitchLatestExt;
pub use self::toggle::ToggleExt;
