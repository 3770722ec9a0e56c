//! Digest-authenticated telemetry client for Antminer-style mining devices
//!
//! The device gates every endpoint behind HTTP Digest Authentication, so each
//! poll is a two-step dance: an unauthenticated GET collects the challenge
//! and a single retry answers it with the computed `Authorization` header.
//! This crate coordinates that dance over the fixed set of device endpoints
//! and hands the dashboard layer a uniform result envelope.

// Declare modules
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod types;

// Re-export key public items
pub use auth::authenticated_request;
pub use client::AntminerClient;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use types::EndpointResult;
