/// Shared helpers for integration and end-to-end tests
#[allow(dead_code)]
pub mod index_server;
#[allow(dead_code)]
pub mod mocks;
