//! Rescue boot mode resource
//!
//! Boot configuration is a one-boolean state machine per server: inactive
//! to active on create, active to inactive on delete, read as a
//! non-mutating probe. Only the `rescue` mode is implemented; other boot
//! modes are rejected up front.

use async_trait::async_trait;
use hetzner_core::{
    ApiClient, DataSource, Method, ProviderError, Resource, ResourceRecord, Result,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Type name registered with the orchestration framework.
pub const BOOT_TYPE: &str = "hetzner_robot_boot";

const RESCUE_MODE: &str = "rescue";

/// Rescue configuration as reported by the Robot API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rescue {
    pub server_number: String,
    pub active: bool,
    pub keyboard: String,
    /// The API reports a list; only the first key is surfaced into records.
    #[serde(rename = "authorized_key", default)]
    pub authorized_keys: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RescueResponse {
    rescue: Rescue,
}

impl Rescue {
    /// Sync server-reported fields into a state record.
    fn write_record(&self, record: &mut ResourceRecord) {
        record.set("server_number", json!(self.server_number));
        record.set("keyboard", json!(self.keyboard));
        if let Some(key) = self.authorized_keys.first() {
            record.set("ssh_key", json!(key));
        }
        record.set("active", json!(self.active));
    }
}

fn rescue_path(server: &str) -> String {
    format!("/boot/{server}/rescue")
}

async fn fetch_rescue(client: &dyn ApiClient, server: &str) -> Result<Rescue> {
    let body = client
        .request(Method::GET, &rescue_path(server), None)
        .await?;
    let response: RescueResponse = serde_json::from_slice(&body)?;
    Ok(response.rescue)
}

/// Rescue boot mode lifecycle controller.
///
/// Resource identity is the server number; the resource exists iff the
/// remote reports `active == true`.
pub struct BootResource;

#[async_trait]
impl Resource for BootResource {
    fn type_name(&self) -> &'static str {
        BOOT_TYPE
    }

    async fn create(&self, client: &dyn ApiClient, record: &mut ResourceRecord) -> Result<()> {
        let server: String = record.require("server_number")?;
        let mode: String = record.require("mode")?;
        if mode != RESCUE_MODE {
            return Err(ProviderError::UnsupportedMode(mode));
        }

        // Probe first: activating twice is an error, not a no-op.
        let current = fetch_rescue(client, &server).await?;
        if current.active {
            return Err(ProviderError::AlreadyActive(server));
        }

        let keyboard: String = record.require("keyboard")?;
        let ssh_key: String = record.require("ssh_key")?;
        let fields = [
            ("keyboard".to_string(), keyboard),
            ("authorized_key".to_string(), ssh_key),
        ];
        client
            .form_request(Method::POST, &rescue_path(&server), &fields)
            .await?;

        tracing::info!("activated rescue boot mode on server {}", server);
        record.set_id(&server);

        // Re-read to pick up the computed fields the server filled in.
        self.read(client, record).await
    }

    async fn read(&self, client: &dyn ApiClient, record: &mut ResourceRecord) -> Result<()> {
        let server: String = record.require("server_number")?;

        let rescue = match fetch_rescue(client, &server).await {
            Ok(rescue) => rescue,
            Err(err) if err.is_not_found() => {
                tracing::debug!("boot entry for server {} not found, clearing state", server);
                record.clear_id();
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        // Deactivated out of band counts as destroyed.
        if !rescue.active {
            tracing::debug!("rescue on server {} no longer active, clearing state", server);
            record.clear_id();
            return Ok(());
        }

        rescue.write_record(record);
        Ok(())
    }

    async fn delete(&self, client: &dyn ApiClient, record: &mut ResourceRecord) -> Result<()> {
        let server: String = record.require("server_number")?;

        match client
            .request(Method::DELETE, &rescue_path(&server), None)
            .await
        {
            Ok(_) => tracing::info!("deactivated rescue boot mode on server {}", server),
            Err(err) if err.is_not_found() => {
                tracing::debug!("rescue on server {} already inactive, nothing to delete", server);
            }
            Err(err) => return Err(err),
        }

        record.clear_id();
        Ok(())
    }
}

/// Read-only rescue status lookup.
pub struct BootDataSource;

#[async_trait]
impl DataSource for BootDataSource {
    fn type_name(&self) -> &'static str {
        BOOT_TYPE
    }

    async fn read(&self, client: &dyn ApiClient, record: &mut ResourceRecord) -> Result<()> {
        let server: String = record.require("server_number")?;
        let mode: String = record.require("mode")?;
        if mode != RESCUE_MODE {
            return Err(ProviderError::UnsupportedMode(mode));
        }

        let rescue = match fetch_rescue(client, &server).await {
            Ok(rescue) => rescue,
            Err(err) if err.is_not_found() => {
                return Err(ProviderError::NotFound(format!(
                    "boot configuration for server {server}"
                )));
            }
            Err(err) => return Err(err),
        };

        record.set_id(&server);
        record.set("active", json!(rescue.active));
        record.set("keyboard", json!(rescue.keyboard));
        if let Some(key) = rescue.authorized_keys.first() {
            record.set("ssh_key", json!(key));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeClient;

    fn rescue_body(active: bool, keys: &[&str]) -> Vec<u8> {
        serde_json::to_vec(&json!({
            "rescue": {
                "server_number": "321",
                "active": active,
                "keyboard": "us",
                "authorized_key": keys,
            }
        }))
        .unwrap()
    }

    fn boot_record() -> ResourceRecord {
        ResourceRecord::new()
            .with_attribute("server_number", json!("321"))
            .with_attribute("mode", json!("rescue"))
            .with_attribute("keyboard", json!("us"))
            .with_attribute("ssh_key", json!("aa:bb"))
    }

    #[tokio::test]
    async fn create_probes_activates_then_reads_back() {
        let client = FakeClient::new()
            .respond(&rescue_body(false, &[]))
            .respond(b"")
            .respond(&rescue_body(true, &["aa:bb"]));
        let mut record = boot_record();

        BootResource.create(&client, &mut record).await.unwrap();

        assert_eq!(record.id(), Some("321"));
        assert_eq!(record.get::<bool>("active"), Some(true));
        assert_eq!(record.get::<String>("keyboard"), Some("us".to_string()));
        assert_eq!(record.get::<String>("ssh_key"), Some("aa:bb".to_string()));

        let calls = client.calls();
        assert_eq!(calls.len(), 3);
        assert_eq!(calls[0].method, Method::GET);
        assert_eq!(calls[0].path, "/boot/321/rescue");
        assert_eq!(calls[1].method, Method::POST);
        assert_eq!(
            calls[1].form.clone().unwrap(),
            vec![
                ("keyboard".to_string(), "us".to_string()),
                ("authorized_key".to_string(), "aa:bb".to_string()),
            ]
        );
        assert_eq!(calls[2].method, Method::GET);
    }

    #[tokio::test]
    async fn create_rejects_unsupported_mode_before_any_call() {
        let client = FakeClient::new();
        let mut record = boot_record();
        record.set("mode", json!("linux"));

        let err = BootResource.create(&client, &mut record).await.unwrap_err();
        assert!(matches!(err, ProviderError::UnsupportedMode(mode) if mode == "linux"));
        assert!(client.calls().is_empty());
    }

    #[tokio::test]
    async fn create_fails_without_issuing_activation_when_already_active() {
        let client = FakeClient::new().respond(&rescue_body(true, &["aa:bb"]));
        let mut record = boot_record();

        let err = BootResource.create(&client, &mut record).await.unwrap_err();
        assert!(matches!(err, ProviderError::AlreadyActive(server) if server == "321"));
        assert_eq!(client.calls().len(), 1);
        assert!(!record.exists());
    }

    #[tokio::test]
    async fn read_clears_identity_on_remote_404() {
        let client = FakeClient::new().respond_err(FakeClient::not_found());
        let mut record = boot_record();
        record.set_id("321");

        BootResource.read(&client, &mut record).await.unwrap();
        assert!(!record.exists());
    }

    #[tokio::test]
    async fn read_clears_identity_when_rescue_inactive() {
        let client = FakeClient::new().respond(&rescue_body(false, &[]));
        let mut record = boot_record();
        record.set_id("321");

        BootResource.read(&client, &mut record).await.unwrap();
        assert!(!record.exists());
    }

    #[tokio::test]
    async fn read_surfaces_only_the_first_authorized_key() {
        let client = FakeClient::new().respond(&rescue_body(true, &["aa:bb", "cc:dd"]));
        let mut record = boot_record();
        record.set_id("321");

        BootResource.read(&client, &mut record).await.unwrap();
        assert_eq!(record.get::<String>("ssh_key"), Some("aa:bb".to_string()));
    }

    #[tokio::test]
    async fn read_propagates_non_404_failures() {
        let client = FakeClient::new().respond_err(FakeClient::server_error());
        let mut record = boot_record();

        let err = BootResource.read(&client, &mut record).await.unwrap_err();
        assert!(matches!(err, ProviderError::Remote { status: 500, .. }));
    }

    #[tokio::test]
    async fn delete_tolerates_already_absent_rescue() {
        let client = FakeClient::new().respond_err(FakeClient::not_found());
        let mut record = boot_record();
        record.set_id("321");

        BootResource.delete(&client, &mut record).await.unwrap();
        assert!(!record.exists());
    }

    #[tokio::test]
    async fn delete_propagates_other_failures() {
        let client = FakeClient::new().respond_err(FakeClient::server_error());
        let mut record = boot_record();
        record.set_id("321");

        let err = BootResource.delete(&client, &mut record).await.unwrap_err();
        assert!(matches!(err, ProviderError::Remote { status: 500, .. }));
    }

    #[tokio::test]
    async fn data_source_missing_server_is_an_error() {
        let client = FakeClient::new().respond_err(FakeClient::not_found());
        let mut record = ResourceRecord::new()
            .with_attribute("server_number", json!("321"))
            .with_attribute("mode", json!("rescue"));

        let err = BootDataSource.read(&client, &mut record).await.unwrap_err();
        assert!(matches!(err, ProviderError::NotFound(_)));
    }

    #[tokio::test]
    async fn data_source_syncs_status() {
        let client = FakeClient::new().respond(&rescue_body(true, &["aa:bb"]));
        let mut record = ResourceRecord::new()
            .with_attribute("server_number", json!("321"))
            .with_attribute("mode", json!("rescue"));

        BootDataSource.read(&client, &mut record).await.unwrap();
        assert_eq!(record.id(), Some("321"));
        assert_eq!(record.get::<bool>("active"), Some(true));
        assert_eq!(record.get::<String>("keyboard"), Some("us".to_string()));
        assert_eq!(record.get::<String>("ssh_key"), Some("aa:bb".to_string()));
    }
}
