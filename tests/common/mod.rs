//! Common test utilities and helpers
//!
//! - In-process application fixture
//! - Authentication helpers
//! - Store fixtures
//! - Assertion macros

pub mod assertions;

pub use app::*;
pub use auth_helpers::*;
pub use database::*;
