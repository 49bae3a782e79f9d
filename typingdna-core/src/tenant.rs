//! Core multi-tenant types.

use std::fmt;

/// An isolated customer/organization namespace in the host identity system.
///
/// Connector configuration is scoped per tenant domain, and the domain takes
/// part in deriving the opaque identifiers sent to external services.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TenantDomain(pub String);

impl TenantDomain {
    /// Convenience constructor from a string.
    pub fn new<S: Into<String>>(domain: S) -> Self {
        Self(domain.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TenantDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TenantDomain {
    fn from(domain: &str) -> Self {
        Self(domain.to_string())
    }
}

impl From<String> for TenantDomain {
    fn from(domain: String) -> Self {
        Self(domain)
    }
}
