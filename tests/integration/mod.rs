//! Integration tests
//!
//! - `api` drives the login router in-process
//! - `provider` runs the HTTP identity provider client against a mock server
