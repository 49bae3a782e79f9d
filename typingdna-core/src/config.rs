//! Tenant-scoped connector configuration.
//!
//! The host identity framework stores connector settings as string key/value
//! pairs per tenant. Functions read through the [`ConnectorConfig`] trait on
//! every invocation; values are never cached, so tenant admins can flip a
//! flag without a restart.

use std::collections::HashMap;
use std::sync::RwLock;

use thiserror::Error;

/// Failure to read a connector configuration value for a tenant.
///
/// Carries the provider's underlying cause when one exists.
#[derive(Debug, Error)]
#[error("cannot read connector configuration `{key}` for tenant `{tenant_domain}`")]
pub struct ConfigError {
    pub key: String,
    pub tenant_domain: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ConfigError {
    pub fn new(key: impl Into<String>, tenant_domain: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            tenant_domain: tenant_domain.into(),
            source: None,
        }
    }

    pub fn with_source(
        key: impl Into<String>,
        tenant_domain: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            tenant_domain: tenant_domain.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Keyed lookup of connector configuration, scoped by tenant domain.
///
/// Implemented by the host framework's configuration store; injected into
/// the functions as `Arc<dyn ConnectorConfig>` rather than reached through
/// ambient state.
pub trait ConnectorConfig: Send + Sync {
    /// Look up a configuration value.
    ///
    /// Returns `Ok(None)` when the key is not set for the tenant. An `Err`
    /// means the store itself could not be read.
    fn get(&self, key: &str, tenant_domain: &str) -> Result<Option<String>, ConfigError>;
}

/// Parse a tenant feature flag.
///
/// Only the literal `true` (any letter casing) enables a flag; absent or
/// unparseable values read as disabled.
pub fn flag_enabled(value: Option<&str>) -> bool {
    value
        .map(|v| v.trim().eq_ignore_ascii_case("true"))
        .unwrap_or(false)
}

/// In-memory connector configuration store.
///
/// Useful for wiring demos and tests; production deployments implement
/// [`ConnectorConfig`] over the host framework's store instead.
#[derive(Debug, Default)]
pub struct InMemoryConnectorConfig {
    values: RwLock<HashMap<(String, String), String>>,
}

impl InMemoryConnectorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a configuration value for a tenant.
    pub fn set(
        &self,
        tenant_domain: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) {
        self.values
            .write()
            .unwrap()
            .insert((tenant_domain.into(), key.into()), value.into());
    }
}

impl ConnectorConfig for InMemoryConnectorConfig {
    fn get(&self, key: &str, tenant_domain: &str) -> Result<Option<String>, ConfigError> {
        Ok(self
            .values
            .read()
            .unwrap()
            .get(&(tenant_domain.to_string(), key.to_string()))
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_parses_true_case_insensitively() {
        assert!(flag_enabled(Some("true")));
        assert!(flag_enabled(Some("TRUE")));
        assert!(flag_enabled(Some("True")));
        assert!(flag_enabled(Some(" true ")));
    }

    #[test]
    fn flag_defaults_to_disabled() {
        assert!(!flag_enabled(None));
        assert!(!flag_enabled(Some("")));
        assert!(!flag_enabled(Some("false")));
        assert!(!flag_enabled(Some("yes")));
        assert!(!flag_enabled(Some("1")));
        assert!(!flag_enabled(Some("enabled")));
    }

    #[test]
    fn in_memory_store_is_tenant_scoped() {
        let config = InMemoryConnectorConfig::new();
        config.set("acme", "typingdna.region", "eu");
        config.set("globex", "typingdna.region", "us");

        assert_eq!(
            config.get("typingdna.region", "acme").unwrap().as_deref(),
            Some("eu")
        );
        assert_eq!(
            config.get("typingdna.region", "globex").unwrap().as_deref(),
            Some("us")
        );
        assert_eq!(config.get("typingdna.region", "initech").unwrap(), None);
        assert_eq!(config.get("typingdna.enable", "acme").unwrap(), None);
    }

    #[test]
    fn config_error_reports_key_and_tenant() {
        let err = ConfigError::new("typingdna.enable", "acme");
        let msg = err.to_string();
        assert!(msg.contains("typingdna.enable"));
        assert!(msg.contains("acme"));
    }

    #[test]
    fn config_error_keeps_its_source() {
        let cause = std::io::Error::new(std::io::ErrorKind::Other, "store offline");
        let err = ConfigError::with_source("typingdna.enable", "acme", cause);
        let source = std::error::Error::source(&err).expect("source retained");
        assert!(source.to_string().contains("store offline"));
    }
}
