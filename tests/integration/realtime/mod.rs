//! Real-time integration tests

mod shutdown_test;
mod sse_test;
