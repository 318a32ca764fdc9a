//! Provider configuration
//!
//! Two independent credential blocks, mirroring the two backends. At least
//! one must be present for client construction to succeed; defaults only
//! cover the base URLs.

use serde::{Deserialize, Serialize};

pub const DEFAULT_ROBOT_BASE_URL: &str = "https://robot-ws.your-server.de";
pub const DEFAULT_CLOUD_BASE_URL: &str = "https://api.hetzner.cloud/v1";

/// Robot (dedicated server) API credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RobotConfig {
    pub user: String,
    pub password: String,
    #[serde(default = "default_robot_base_url")]
    pub base_url: String,
}

/// Cloud API credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloudConfig {
    pub token: String,
    #[serde(default = "default_cloud_base_url")]
    pub base_url: String,
}

/// Full provider configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default)]
    pub robot: Option<RobotConfig>,
    #[serde(default)]
    pub cloud: Option<CloudConfig>,
}

fn default_robot_base_url() -> String {
    DEFAULT_ROBOT_BASE_URL.to_string()
}

fn default_cloud_base_url() -> String {
    DEFAULT_CLOUD_BASE_URL.to_string()
}

impl ProviderConfig {
    /// Build a configuration from environment variables.
    ///
    /// A robot block needs both `HETZNER_ROBOT_USER` and
    /// `HETZNER_ROBOT_PASSWORD`; a cloud block needs `HETZNER_CLOUD_TOKEN`.
    /// `HETZNER_ROBOT_BASE_URL` / `HETZNER_CLOUD_BASE_URL` override the
    /// defaults. Whether any block is present at all is validated later, at
    /// client construction.
    pub fn from_env() -> Self {
        let robot = match (
            std::env::var("HETZNER_ROBOT_USER"),
            std::env::var("HETZNER_ROBOT_PASSWORD"),
        ) {
            (Ok(user), Ok(password)) => Some(RobotConfig {
                user,
                password,
                base_url: std::env::var("HETZNER_ROBOT_BASE_URL")
                    .unwrap_or_else(|_| default_robot_base_url()),
            }),
            _ => None,
        };

        let cloud = std::env::var("HETZNER_CLOUD_TOKEN").ok().map(|token| CloudConfig {
            token,
            base_url: std::env::var("HETZNER_CLOUD_BASE_URL")
                .unwrap_or_else(|_| default_cloud_base_url()),
        });

        Self { robot, cloud }
    }
}
