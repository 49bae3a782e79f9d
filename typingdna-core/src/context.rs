//! Authentication context handed to conditional-auth functions.
//!
//! The host engine drives a policy flow and invokes registered functions
//! with a context carrying the authenticated user plus a string property
//! bag. Earlier flow steps stash captured inputs (such as a typing pattern)
//! as properties; functions publish their outcomes the same way so later
//! policy steps can branch on them.

use std::collections::HashMap;

use crate::tenant::TenantDomain;

/// The user resolved by the preceding authentication steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub username: String,
    pub tenant_domain: TenantDomain,
}

impl AuthenticatedUser {
    pub fn new(username: impl Into<String>, tenant_domain: impl Into<TenantDomain>) -> Self {
        Self {
            username: username.into(),
            tenant_domain: tenant_domain.into(),
        }
    }
}

/// Per-invocation authentication flow context.
///
/// Nothing in the context outlives the flow; functions must not treat it as
/// storage.
#[derive(Debug, Clone)]
pub struct AuthContext {
    user: AuthenticatedUser,
    properties: HashMap<String, String>,
}

impl AuthContext {
    pub fn new(user: AuthenticatedUser) -> Self {
        Self {
            user,
            properties: HashMap::new(),
        }
    }

    pub fn user(&self) -> &AuthenticatedUser {
        &self.user
    }

    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(|s| s.as_str())
    }

    pub fn set_property(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }
}
