//! Resource lifecycle traits
//!
//! Every managed entity type implements [`Resource`]; read-only lookups
//! implement [`DataSource`]. The orchestration framework drives these hooks
//! with a [`ResourceRecord`] per invocation; the provider supplies the
//! transport client.

use crate::client::ApiClient;
use crate::error::Result;
use crate::record::ResourceRecord;
use async_trait::async_trait;

/// Lifecycle hooks for one manageable entity type.
///
/// There is no update hook: every attribute is immutable after creation, so
/// field changes are replacements (delete followed by create) driven by the
/// framework.
#[async_trait]
pub trait Resource: Send + Sync {
    /// Type name the resource registers under (e.g. `hetzner_robot_boot`).
    fn type_name(&self) -> &'static str;

    /// Create the remote entity and set the record's identity from the
    /// authoritative server-side representation.
    async fn create(&self, client: &dyn ApiClient, record: &mut ResourceRecord) -> Result<()>;

    /// Refresh the record from the remote. A remote that reports the entity
    /// gone clears the identity instead of failing.
    async fn read(&self, client: &dyn ApiClient, record: &mut ResourceRecord) -> Result<()>;

    /// Destroy the remote entity. An entity that is already gone counts as
    /// success.
    async fn delete(&self, client: &dyn ApiClient, record: &mut ResourceRecord) -> Result<()>;
}

/// Read-only lookup of an entity assumed to already exist.
///
/// Unlike [`Resource::read`], absence here is an error: a data source models
/// "must already exist".
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Type name the data source registers under.
    fn type_name(&self) -> &'static str;

    async fn read(&self, client: &dyn ApiClient, record: &mut ResourceRecord) -> Result<()>;
}
