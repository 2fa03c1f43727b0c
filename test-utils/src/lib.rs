//! Shared test utilities for the Vault client.
//!
//! This crate provides:
//! - Proptest generators for paths, tokens, policies and CIDR lists
//! - A wiremock-backed mock Vault server with canned expectations
//! - Response envelope fixtures matching the Vault wire format

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod mocks;

pub use generators::*;
pub use mocks::MockVault;
