//! Integration test crate for Tilebox.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on the tilebox crates to verify they work together.

#[cfg(test)]
mod collision;
