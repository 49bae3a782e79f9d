//! Per-tenant TypingDNA connector settings.

use typingdna_core::{flag_enabled, ConnectorConfig};

use crate::constants;
use crate::error::TypingDnaFunctionError;

/// Snapshot of the tenant's TypingDNA connector configuration.
///
/// Read through the injected provider on every invocation; never cached, so
/// flag changes take effect immediately.
#[derive(Debug, Clone)]
pub struct TypingDnaSettings {
    pub api_key: String,
    pub api_secret: String,
    pub region: String,
    pub enabled: bool,
    pub advance_mode: bool,
}

impl TypingDnaSettings {
    /// Reads the five connector values for a tenant.
    ///
    /// Missing string values read as empty, missing or unparseable flags as
    /// disabled. A provider failure aborts the whole load.
    pub fn load(
        config: &dyn ConnectorConfig,
        tenant_domain: &str,
    ) -> Result<Self, TypingDnaFunctionError> {
        let get = |key: &str| {
            config
                .get(key, tenant_domain)
                .map_err(TypingDnaFunctionError::Configuration)
        };

        Ok(Self {
            api_key: get(constants::USERNAME)?.unwrap_or_default(),
            api_secret: get(constants::CREDENTIAL)?.unwrap_or_default(),
            region: get(constants::REGION)?.unwrap_or_default(),
            enabled: flag_enabled(get(constants::ENABLE)?.as_deref()),
            advance_mode: flag_enabled(get(constants::ADVANCE_MODE_ENABLED)?.as_deref()),
        })
    }
}
