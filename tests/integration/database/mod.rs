//! SQLite-backed integration tests
