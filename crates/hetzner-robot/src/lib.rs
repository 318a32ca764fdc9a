//! Hetzner Robot backend
//!
//! The Robot API manages dedicated servers. It authenticates with HTTP
//! Basic credentials and takes `application/x-www-form-urlencoded` bodies
//! on mutating calls.
//!
//! This crate provides the transport client plus the resource controllers
//! and data sources currently wired to it:
//!
//! - [`BootResource`] / [`BootDataSource`]: rescue boot mode for a server
//!   (`GET/POST/DELETE /boot/{server_number}/rescue`)
//! - [`SshKeyResource`] / [`SshKeyDataSource`]: account SSH keys
//!   (`GET/POST /key`, `GET/DELETE /key/{fingerprint}`)
//!
//! # Example
//!
//! ```ignore
//! use hetzner_core::{Resource, ResourceRecord};
//! use hetzner_robot::{RobotClient, SshKeyResource};
//! use serde_json::json;
//!
//! let client = RobotClient::new("user", "password", "https://robot-ws.your-server.de");
//!
//! let mut record = ResourceRecord::new()
//!     .with_attribute("name", json!("deploy"))
//!     .with_attribute("data", json!("ssh-ed25519 AAAA..."));
//! SshKeyResource.create(&client, &mut record).await?;
//! // record.id() now holds the server-assigned fingerprint
//! ```

pub mod boot;
pub mod client;
pub mod sshkey;

#[cfg(test)]
pub(crate) mod testing;

pub use boot::{BOOT_TYPE, BootDataSource, BootResource, Rescue};
pub use client::RobotClient;
pub use sshkey::{SSHKEY_TYPE, SshKey, SshKeyDataSource, SshKeyResource};
