//! Resource type registry
//!
//! Maps orchestrator type names to their lifecycle implementations and
//! dispatches hooks through the backend facade. Registration rejects
//! duplicate type names so a future cloud resource set cannot silently
//! shadow a robot one.

use std::collections::HashMap;

use hetzner_core::{DataSource, ProviderError, Resource, ResourceRecord, Result};
use hetzner_robot::{BootDataSource, BootResource, SshKeyDataSource, SshKeyResource};

use crate::clients::Clients;
use crate::config::ProviderConfig;

/// Configured provider: backend facade plus the type registry.
pub struct Provider {
    clients: Clients,
    resources: HashMap<&'static str, Box<dyn Resource>>,
    data_sources: HashMap<&'static str, Box<dyn DataSource>>,
}

impl Provider {
    /// Build a provider with the full robot resource set registered. The
    /// cloud resource set is still empty.
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let mut provider = Self {
            clients: Clients::from_config(config)?,
            resources: HashMap::new(),
            data_sources: HashMap::new(),
        };

        provider.register_resource(Box::new(BootResource))?;
        provider.register_resource(Box::new(SshKeyResource))?;
        provider.register_data_source(Box::new(BootDataSource))?;
        provider.register_data_source(Box::new(SshKeyDataSource))?;

        Ok(provider)
    }

    pub fn register_resource(&mut self, resource: Box<dyn Resource>) -> Result<()> {
        let name = resource.type_name();
        if self.resources.insert(name, resource).is_some() {
            return Err(ProviderError::DuplicateType(name.to_string()));
        }
        Ok(())
    }

    pub fn register_data_source(&mut self, data_source: Box<dyn DataSource>) -> Result<()> {
        let name = data_source.type_name();
        if self.data_sources.insert(name, data_source).is_some() {
            return Err(ProviderError::DuplicateType(name.to_string()));
        }
        Ok(())
    }

    pub fn clients(&self) -> &Clients {
        &self.clients
    }

    /// Registered resource type names, sorted.
    pub fn resource_types(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.resources.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Registered data source type names, sorted.
    pub fn data_source_types(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.data_sources.keys().copied().collect();
        names.sort_unstable();
        names
    }

    fn resource(&self, type_name: &str) -> Result<&dyn Resource> {
        self.resources
            .get(type_name)
            .map(|r| r.as_ref())
            .ok_or_else(|| ProviderError::UnknownResourceType(type_name.to_string()))
    }

    fn data_source(&self, type_name: &str) -> Result<&dyn DataSource> {
        self.data_sources
            .get(type_name)
            .map(|d| d.as_ref())
            .ok_or_else(|| ProviderError::UnknownDataSource(type_name.to_string()))
    }

    // Lifecycle hooks invoked by the orchestration framework.

    pub async fn create(&self, type_name: &str, record: &mut ResourceRecord) -> Result<()> {
        self.resource(type_name)?
            .create(&self.clients, record)
            .await
    }

    pub async fn read(&self, type_name: &str, record: &mut ResourceRecord) -> Result<()> {
        self.resource(type_name)?.read(&self.clients, record).await
    }

    pub async fn delete(&self, type_name: &str, record: &mut ResourceRecord) -> Result<()> {
        self.resource(type_name)?
            .delete(&self.clients, record)
            .await
    }

    pub async fn read_data_source(
        &self,
        type_name: &str,
        record: &mut ResourceRecord,
    ) -> Result<()> {
        self.data_source(type_name)?
            .read(&self.clients, record)
            .await
    }
}
