//! Backend selection
//!
//! Resource controllers are written against the `ApiClient` trait only;
//! which backend serves them is decided exactly once, when the facade is
//! built from configuration. Robot takes precedence when both backends are
//! configured, since it is the only one with resources wired today.

use async_trait::async_trait;
use hetzner_cloud::CloudClient;
use hetzner_core::{ApiClient, Method, Payload, ProviderError, Result};
use hetzner_robot::RobotClient;

use crate::config::ProviderConfig;

/// The backend chosen to serve resource traffic.
#[derive(Debug, Clone)]
pub enum Backend {
    Robot(RobotClient),
    Cloud(CloudClient),
}

impl Backend {
    pub fn name(&self) -> &'static str {
        match self {
            Backend::Robot(_) => "robot",
            Backend::Cloud(_) => "cloud",
        }
    }
}

#[async_trait]
impl ApiClient for Backend {
    async fn request(
        &self,
        method: Method,
        path: &str,
        payload: Option<Payload>,
    ) -> Result<Vec<u8>> {
        match self {
            Backend::Robot(client) => client.request(method, path, payload).await,
            Backend::Cloud(client) => client.request(method, path, payload).await,
        }
    }

    async fn form_request(
        &self,
        method: Method,
        path: &str,
        fields: &[(String, String)],
    ) -> Result<Vec<u8>> {
        match self {
            Backend::Robot(client) => client.form_request(method, path, fields).await,
            Backend::Cloud(client) => client.form_request(method, path, fields).await,
        }
    }
}

/// Facade over the configured backends.
///
/// Implements `ApiClient` by delegating to the primary backend; the cloud
/// client is also held separately whenever cloud credentials were given, so
/// future cloud resources can reach it even while Robot is primary.
#[derive(Debug)]
pub struct Clients {
    primary: Backend,
    cloud: Option<CloudClient>,
}

impl Clients {
    /// Build the facade, choosing the primary backend.
    ///
    /// Fails with a descriptive error when neither credential block is
    /// present.
    pub fn from_config(config: &ProviderConfig) -> Result<Self> {
        let robot = config
            .robot
            .as_ref()
            .map(|c| RobotClient::new(&c.user, &c.password, &c.base_url));
        let cloud = config
            .cloud
            .as_ref()
            .map(|c| CloudClient::new(&c.token, &c.base_url));

        let primary = match (robot, &cloud) {
            (Some(robot), _) => Backend::Robot(robot),
            (None, Some(cloud)) => Backend::Cloud(cloud.clone()),
            (None, None) => {
                return Err(ProviderError::InvalidConfig(
                    "no credentials: configure robot { user/password } or cloud { token }"
                        .to_string(),
                ));
            }
        };

        tracing::debug!("selected primary backend: {}", primary.name());
        Ok(Self { primary, cloud })
    }

    pub fn primary(&self) -> &Backend {
        &self.primary
    }

    pub fn cloud(&self) -> Option<&CloudClient> {
        self.cloud.as_ref()
    }
}

#[async_trait]
impl ApiClient for Clients {
    async fn request(
        &self,
        method: Method,
        path: &str,
        payload: Option<Payload>,
    ) -> Result<Vec<u8>> {
        self.primary.request(method, path, payload).await
    }

    async fn form_request(
        &self,
        method: Method,
        path: &str,
        fields: &[(String, String)],
    ) -> Result<Vec<u8>> {
        self.primary.form_request(method, path, fields).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CloudConfig, RobotConfig};

    fn robot_block() -> RobotConfig {
        RobotConfig {
            user: "u".to_string(),
            password: "p".to_string(),
            base_url: "https://robot.test".to_string(),
        }
    }

    fn cloud_block() -> CloudConfig {
        CloudConfig {
            token: "t".to_string(),
            base_url: "https://cloud.test/v1".to_string(),
        }
    }

    #[test]
    fn robot_takes_precedence_when_both_configured() {
        let clients = Clients::from_config(&ProviderConfig {
            robot: Some(robot_block()),
            cloud: Some(cloud_block()),
        })
        .unwrap();

        assert_eq!(clients.primary().name(), "robot");
        // Cloud credentials are kept alongside for future wiring.
        assert_eq!(
            clients.cloud().unwrap().base_url(),
            "https://cloud.test/v1"
        );
    }

    #[test]
    fn cloud_serves_as_primary_when_alone() {
        let clients = Clients::from_config(&ProviderConfig {
            robot: None,
            cloud: Some(cloud_block()),
        })
        .unwrap();

        assert_eq!(clients.primary().name(), "cloud");
    }

    #[test]
    fn no_credentials_is_a_config_error() {
        let err = Clients::from_config(&ProviderConfig::default()).unwrap_err();
        assert!(matches!(err, ProviderError::InvalidConfig(_)));
    }
}
