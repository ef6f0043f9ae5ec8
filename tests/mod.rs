//! Test suite for boardcast
//!
//! Router-level tests drive the full middleware stack with
//! `tower::ServiceExt::oneshot`; property tests exercise the record store
//! directly.

#[cfg(feature = "ssr")]
pub mod common;
#[cfg(feature = "ssr")]
pub mod integration;
#[cfg(feature = "ssr")]
pub mod property;
