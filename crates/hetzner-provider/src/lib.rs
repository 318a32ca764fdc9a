//! Hetzner provider wiring
//!
//! Ties the backends and resource controllers together for the
//! orchestration framework:
//!
//! - [`ProviderConfig`]: credential blocks for the Robot and/or Cloud APIs,
//!   with defaulted base URLs and an environment-variable loader
//! - [`Clients`]: the backend facade; the primary backend is chosen once at
//!   construction (Robot when configured, Cloud otherwise)
//! - [`Provider`]: the type registry dispatching create/read/delete hooks
//!   by resource type name
//!
//! # Example
//!
//! ```ignore
//! use hetzner_provider::{Provider, ProviderConfig};
//! use hetzner_core::ResourceRecord;
//! use serde_json::json;
//!
//! let config = ProviderConfig::from_env();
//! let provider = Provider::new(&config)?;
//!
//! let mut record = ResourceRecord::new()
//!     .with_attribute("fingerprint", json!("56:29:99:..."));
//! provider.read_data_source("hetzner_robot_sshkey", &mut record).await?;
//! ```

pub mod clients;
pub mod config;
pub mod registry;

pub use clients::{Backend, Clients};
pub use config::{CloudConfig, ProviderConfig, RobotConfig};
pub use registry::Provider;
