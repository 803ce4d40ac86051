//! Process-wide UI state for Wellspring
//!
//! The resolution engine itself is pure; this crate holds the one mutable
//! piece — which display snapshot and theme variant are current — behind a
//! single store with initialize-once semantics. Consumers read immutable
//! [`app_ui::UiContext`] snapshots and never observe a half-applied
//! transition.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod store;

pub use store::{StoreError, UiStore};
