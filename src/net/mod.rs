//! Browser implementations of the `api` platform seams.
//!
//! Everything here is gated behind `#[cfg(feature = "csr")]`; native builds
//! (tests, `cargo check` without the feature) get inert fallbacks that report
//! the platform as unavailable.

pub mod fetch;
pub mod socket;
pub mod storage;
