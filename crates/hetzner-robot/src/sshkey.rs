//! SSH key resource
//!
//! Keys are registered account-wide; the server assigns the fingerprint,
//! which becomes the resource identity. Every read re-syncs all fields from
//! the remote, including the ones supplied at creation; the remote response
//! is the single source of truth.

use async_trait::async_trait;
use hetzner_core::{
    ApiClient, DataSource, Method, ProviderError, Resource, ResourceRecord, Result,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Type name registered with the orchestration framework.
pub const SSHKEY_TYPE: &str = "hetzner_robot_sshkey";

/// SSH key as reported by the Robot API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SshKey {
    pub name: String,
    pub fingerprint: String,
    #[serde(rename = "type")]
    pub key_type: String,
    pub size: u32,
    pub data: String,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
struct SshKeyResponse {
    key: SshKey,
}

impl SshKey {
    fn write_record(&self, record: &mut ResourceRecord) {
        record.set("name", json!(self.name));
        record.set("data", json!(self.data));
        record.set("fingerprint", json!(self.fingerprint));
        record.set("type", json!(self.key_type));
        record.set("size", json!(self.size));
        record.set("created_at", json!(self.created_at));
    }
}

fn decode_key(body: &[u8]) -> Result<SshKey> {
    let response: SshKeyResponse = serde_json::from_slice(body)?;
    Ok(response.key)
}

/// SSH key lifecycle controller.
pub struct SshKeyResource;

#[async_trait]
impl Resource for SshKeyResource {
    fn type_name(&self) -> &'static str {
        SSHKEY_TYPE
    }

    async fn create(&self, client: &dyn ApiClient, record: &mut ResourceRecord) -> Result<()> {
        let name: String = record.require("name")?;
        let data: String = record.require("data")?;

        let fields = [
            ("name".to_string(), name),
            ("data".to_string(), data),
        ];
        let body = client.form_request(Method::POST, "/key", &fields).await?;
        let key = decode_key(&body)?;

        tracing::info!("registered SSH key: {}", key.fingerprint);
        record.set_id(&key.fingerprint);
        key.write_record(record);
        Ok(())
    }

    async fn read(&self, client: &dyn ApiClient, record: &mut ResourceRecord) -> Result<()> {
        let fingerprint = record
            .id()
            .ok_or(ProviderError::MissingAttribute("id"))?
            .to_string();

        let body = match client
            .request(Method::GET, &format!("/key/{fingerprint}"), None)
            .await
        {
            Ok(body) => body,
            Err(err) if err.is_not_found() => {
                tracing::debug!("SSH key {} gone, clearing state", fingerprint);
                record.clear_id();
                return Ok(());
            }
            Err(err) => return Err(err),
        };

        decode_key(&body)?.write_record(record);
        Ok(())
    }

    async fn delete(&self, client: &dyn ApiClient, record: &mut ResourceRecord) -> Result<()> {
        let fingerprint = record
            .id()
            .ok_or(ProviderError::MissingAttribute("id"))?
            .to_string();

        match client
            .request(Method::DELETE, &format!("/key/{fingerprint}"), None)
            .await
        {
            Ok(_) => tracing::info!("removed SSH key: {}", fingerprint),
            Err(err) if err.is_not_found() => {
                tracing::debug!("SSH key {} already absent, nothing to delete", fingerprint);
            }
            Err(err) => return Err(err),
        }

        record.clear_id();
        Ok(())
    }
}

/// Read-only SSH key lookup by fingerprint.
pub struct SshKeyDataSource;

#[async_trait]
impl DataSource for SshKeyDataSource {
    fn type_name(&self) -> &'static str {
        SSHKEY_TYPE
    }

    async fn read(&self, client: &dyn ApiClient, record: &mut ResourceRecord) -> Result<()> {
        let fingerprint: String = record.require("fingerprint")?;

        let body = match client
            .request(Method::GET, &format!("/key/{fingerprint}"), None)
            .await
        {
            Ok(body) => body,
            Err(err) if err.is_not_found() => {
                return Err(ProviderError::NotFound(format!(
                    "ssh key with fingerprint {fingerprint}"
                )));
            }
            Err(err) => return Err(err),
        };

        let key = decode_key(&body)?;
        record.set_id(&key.fingerprint);
        key.write_record(record);
        Ok(())
    }
}
