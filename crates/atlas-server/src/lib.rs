//! Atlas HTTP server library.
//!
//! Exposes the argument parser and the HTTP router so integration tests
//! can drive the service in-process; the `atlas` binary wires the same
//! pieces together in its `main`.

pub mod args;
pub mod http;
