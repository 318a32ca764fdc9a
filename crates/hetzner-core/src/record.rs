//! Generic resource state record
//!
//! The orchestration framework hands lifecycle hooks an opaque key-value
//! record. [`ResourceRecord`] is the one type that crosses that boundary;
//! entity structs map to and from it explicitly so dynamic field access
//! stays out of controller logic.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{ProviderError, Result};

/// State record for a single managed resource.
///
/// A record with a set identity refers to an existing remote entity; a
/// cleared identity tells the framework the entity does not exist (and
/// should be re-created on the next apply).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceRecord {
    /// Remote identity (`server_number` for boot, fingerprint for SSH keys).
    id: Option<String>,

    /// Resource attributes, keyed by schema field name.
    attributes: HashMap<String, serde_json::Value>,
}

impl ResourceRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = Some(id.into());
    }

    /// Clear the identity, signalling "this resource does not exist".
    pub fn clear_id(&mut self) {
        self.id = None;
    }

    pub fn exists(&self) -> bool {
        self.id.is_some()
    }

    pub fn set(&mut self, key: impl Into<String>, value: serde_json::Value) {
        self.attributes.insert(key.into(), value);
    }

    pub fn get<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.attributes
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Like [`get`](Self::get), but a missing or mistyped attribute is an
    /// error. Controllers use this for their required inputs.
    pub fn require<T: serde::de::DeserializeOwned>(&self, key: &'static str) -> Result<T> {
        self.get(key).ok_or(ProviderError::MissingAttribute(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn identity_lifecycle() {
        let mut record = ResourceRecord::new();
        assert!(!record.exists());

        record.set_id("321");
        assert!(record.exists());
        assert_eq!(record.id(), Some("321"));

        record.clear_id();
        assert!(!record.exists());
        assert_eq!(record.id(), None);
    }

    #[test]
    fn typed_attribute_access() {
        let mut record = ResourceRecord::new()
            .with_attribute("keyboard", json!("us"))
            .with_attribute("size", json!(4096));
        record.set("active", json!(true));

        assert_eq!(record.get::<String>("keyboard"), Some("us".to_string()));
        assert_eq!(record.get::<u32>("size"), Some(4096));
        assert_eq!(record.get::<bool>("active"), Some(true));
        assert_eq!(record.get::<String>("missing"), None);
        // Wrong type reads as absent, not a panic.
        assert_eq!(record.get::<bool>("keyboard"), None);
    }

    #[test]
    fn require_reports_the_missing_key() {
        let record = ResourceRecord::new();
        let err = record.require::<String>("server_number").unwrap_err();
        assert!(matches!(
            err,
            ProviderError::MissingAttribute("server_number")
        ));
    }
}
