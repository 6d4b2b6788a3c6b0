//! Integration tests for the ringlist binary
//!
//! These drive the compiled `ringlist` executable end to end.
