//! Unit tests for ringlist modules
//!
//! These tests drive the public API only; no files outside temp dirs.

mod test_error_paths;
mod test_ring_list;
