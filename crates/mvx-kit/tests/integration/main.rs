//! Integration tests for mvx-kit.
//!
//! The client tests run against an in-memory [`mock::MockTransport`], so no
//! network access is needed.
//!
//! Run with: `cargo test --test integration`

mod client_integration;
mod mock;
mod signing_integration;
mod transfer_integration;
