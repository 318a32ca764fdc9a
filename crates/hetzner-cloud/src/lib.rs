//! Hetzner Cloud backend
//!
//! The Cloud API manages virtual infrastructure. It authenticates with a
//! Bearer token and speaks JSON throughout. No resource controller is wired
//! to this backend yet; the client exists so the provider can accept cloud
//! credentials today and serve as the primary backend when no Robot
//! credentials are configured.

pub mod client;

pub use client::CloudClient;
