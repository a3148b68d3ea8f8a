//! Tests for omni-io crate.
//!
//! Integration tests for bounded file I/O operations.
