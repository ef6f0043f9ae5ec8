//! API integration tests
//!
//! Every endpoint through the full router.

mod cards_test;
mod guard_test;
mod lists_test;
mod token_test;
