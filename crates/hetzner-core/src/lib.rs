//! Core abstractions for the Hetzner provider
//!
//! This crate defines the pieces shared by every backend and resource:
//!
//! - [`ApiClient`]: the transport trait both the Robot and Cloud backends
//!   implement (JSON requests plus form-encoded requests)
//! - [`ProviderError`]: the provider-wide error taxonomy, with the HTTP
//!   status carried as a structured field rather than message text
//! - [`ResourceRecord`]: the generic key-value state record exchanged with
//!   the orchestration framework
//! - [`Resource`] / [`DataSource`]: the lifecycle hooks a managed entity
//!   type implements
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │            orchestration framework             │
//! │      (create / read / delete hooks, records)   │
//! └─────────────────┬──────────────────────────────┘
//!                   │
//! ┌─────────────────▼──────────────────────────────┐
//! │                hetzner-provider                │
//! │   config · backend selection · type registry   │
//! └───────┬─────────────────────────┬──────────────┘
//!         │                         │
//! ┌───────▼───────┐         ┌───────▼───────┐
//! │ hetzner-robot │         │ hetzner-cloud │
//! │  Basic Auth   │         │ Bearer token  │
//! └───────────────┘         └───────────────┘
//! ```

pub mod client;
pub mod error;
pub mod record;
pub mod resource;

// Re-exports
pub use client::{ApiClient, Method, Payload, classify_response, encode_form};
pub use error::{ProviderError, Result};
pub use record::ResourceRecord;
pub use resource::{DataSource, Resource};
