//! Shared helpers for the integration test binaries
#![allow(dead_code)]

pub mod http_stub;
pub mod mocks;
