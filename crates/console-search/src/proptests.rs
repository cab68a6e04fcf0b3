//! Property-based tests for the filtering pipeline.
