//! Heap-backed types shared by `std` and `no_std` builds.
//!
//! `alloc` is always linked, so the same paths work with or without the
//! `std` feature.

pub use alloc::borrow::{Cow, ToOwned};
pub use alloc::boxed::Box;
pub use alloc::collections::BTreeMap;
pub use alloc::string::{String, ToString};
pub use alloc::sync::Arc;
pub use alloc::vec::Vec;

/// String-keyed detail map carried by every traced error.
pub type Details = BTreeMap<String, String>;

/// Boxed, thread-safe error object accepted wherever a foreign cause is expected.
pub type BoxError = Box<dyn core::error::Error + Send + Sync + 'static>;
