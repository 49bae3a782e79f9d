//! Save (enroll) a user's typing pattern in TypingDNA.

use std::sync::Arc;

use typingdna_core::{AuthContext, ConnectorConfig};

use crate::client::{log_transient, TypingDnaClient};
use crate::constants;
use crate::error::TypingDnaFunctionError;
use crate::identity::typingdna_user_id;
use crate::pattern::captured_pattern;
use crate::settings::TypingDnaSettings;

/// Conditional-auth function that forwards the captured typing pattern to
/// TypingDNA so the service can learn the user's typing profile.
///
/// The save call is best-effort: transport failures are logged and
/// swallowed, and the response body is never interpreted. Only a failure to
/// read the tenant configuration is surfaced to the host engine.
pub struct SaveUserInTypingDna {
    config: Arc<dyn ConnectorConfig>,
    client: TypingDnaClient,
}

impl SaveUserInTypingDna {
    pub fn new(config: Arc<dyn ConnectorConfig>) -> Result<Self, TypingDnaFunctionError> {
        let client = TypingDnaClient::new().map_err(TypingDnaFunctionError::ClientInit)?;
        Ok(Self::with_client(config, client))
    }

    /// Constructor with an explicit client, for wiring and tests.
    pub fn with_client(config: Arc<dyn ConnectorConfig>, client: TypingDnaClient) -> Self {
        Self { config, client }
    }

    /// Sends the save request, or does nothing when a gate fails.
    pub async fn save_user(&self, ctx: &AuthContext) -> Result<(), TypingDnaFunctionError> {
        let Some(request) = self.prepare(ctx)? else {
            return Ok(());
        };

        self.client.dispatch_best_effort(request).await;
        Ok(())
    }

    /// Reads the tenant settings and assembles the save request.
    ///
    /// Returns `Ok(None)` when the pattern is absent or the tenant has the
    /// connector or advance mode disabled. The configuration is read before
    /// gating, so a broken provider surfaces even for a blank pattern.
    fn prepare(
        &self,
        ctx: &AuthContext,
    ) -> Result<Option<reqwest::Request>, TypingDnaFunctionError> {
        let user = ctx.user();
        let tenant_domain = user.tenant_domain.as_str();
        let settings = TypingDnaSettings::load(self.config.as_ref(), tenant_domain)?;

        let Some(pattern) = captured_pattern(ctx) else {
            return Ok(None);
        };
        if !settings.enabled || !settings.advance_mode {
            return Ok(None);
        }

        let user_id = typingdna_user_id(&user.username, tenant_domain);
        let url = self.client.endpoint(&settings.region, "save", &user_id);
        let request = self.client.form_post(
            &url,
            &settings.api_key,
            &settings.api_secret,
            &[
                ("tp", pattern),
                ("custom_field", constants::CUSTOM_FIELD_VALUE),
            ],
        );

        match request {
            Ok(request) => Ok(Some(request)),
            Err(err) => {
                // A malformed URL (bad region value) is as best-effort as a
                // failed socket.
                log_transient(&err);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use typingdna_core::{AuthenticatedUser, ConfigError, InMemoryConnectorConfig};

    fn tenant_config(enabled: &str, advance_mode: &str) -> Arc<InMemoryConnectorConfig> {
        let config = InMemoryConnectorConfig::new();
        config.set("acme", constants::USERNAME, "K");
        config.set("acme", constants::CREDENTIAL, "S");
        config.set("acme", constants::REGION, "eu");
        config.set("acme", constants::ENABLE, enabled);
        config.set("acme", constants::ADVANCE_MODE_ENABLED, advance_mode);
        Arc::new(config)
    }

    fn ctx_with_pattern(pattern: &str) -> AuthContext {
        let mut ctx = AuthContext::new(AuthenticatedUser::new("alice", "acme"));
        ctx.set_property(constants::TYPING_PATTERN_PROPERTY, pattern);
        ctx
    }

    fn function(config: Arc<InMemoryConnectorConfig>) -> SaveUserInTypingDna {
        SaveUserInTypingDna::with_client(config, TypingDnaClient::new().unwrap())
    }

    #[test]
    fn gated_off_without_a_pattern() {
        let f = function(tenant_config("true", "true"));
        let ctx = AuthContext::new(AuthenticatedUser::new("alice", "acme"));
        assert!(f.prepare(&ctx).unwrap().is_none());
    }

    #[test]
    fn gated_off_for_blank_and_null_patterns() {
        let f = function(tenant_config("true", "true"));
        assert!(f.prepare(&ctx_with_pattern("")).unwrap().is_none());
        assert!(f.prepare(&ctx_with_pattern("   ")).unwrap().is_none());
        assert!(f.prepare(&ctx_with_pattern("null")).unwrap().is_none());
        assert!(f.prepare(&ctx_with_pattern("NULL")).unwrap().is_none());
    }

    #[test]
    fn gated_off_when_connector_disabled() {
        let f = function(tenant_config("false", "true"));
        assert!(f.prepare(&ctx_with_pattern("abc123")).unwrap().is_none());
    }

    #[test]
    fn gated_off_when_advance_mode_disabled() {
        let f = function(tenant_config("true", "false"));
        assert!(f.prepare(&ctx_with_pattern("abc123")).unwrap().is_none());

        let f = function(tenant_config("true", "not-a-bool"));
        assert!(f.prepare(&ctx_with_pattern("abc123")).unwrap().is_none());
    }

    #[test]
    fn assembles_the_documented_request() {
        let f = function(tenant_config("true", "true"));
        let request = f.prepare(&ctx_with_pattern("abc123")).unwrap().unwrap();

        let expected_id = typingdna_user_id("alice", "acme");
        assert_eq!(
            request.url().as_str(),
            format!("https://api-eu.typingdna.com/save/{expected_id}")
        );
        assert_eq!(request.method(), reqwest::Method::POST);

        let auth = request
            .headers()
            .get(reqwest::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .unwrap();
        assert_eq!(auth, format!("Basic {}", STANDARD.encode("K:S")));

        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(body, b"tp=abc123&custom_field=enroll");
    }

    #[test]
    fn url_encodes_the_pattern() {
        let f = function(tenant_config("true", "true"));
        let request = f.prepare(&ctx_with_pattern("a b&c=d")).unwrap().unwrap();

        let body = request.body().and_then(|b| b.as_bytes()).unwrap();
        assert_eq!(body, b"tp=a+b%26c%3Dd&custom_field=enroll");
    }

    struct FailingConfig;

    impl ConnectorConfig for FailingConfig {
        fn get(&self, key: &str, tenant_domain: &str) -> Result<Option<String>, ConfigError> {
            Err(ConfigError::new(key, tenant_domain))
        }
    }

    #[tokio::test]
    async fn provider_failure_propagates_as_the_configuration_error() {
        let f = SaveUserInTypingDna::with_client(
            Arc::new(FailingConfig),
            TypingDnaClient::new().unwrap(),
        );
        let err = f.save_user(&ctx_with_pattern("abc123")).await.unwrap_err();
        assert!(matches!(err, TypingDnaFunctionError::Configuration(_)));
    }

    #[tokio::test]
    async fn transport_failure_is_swallowed() {
        // Nothing listens on port 1; the connection is refused immediately.
        let client = TypingDnaClient::new()
            .unwrap()
            .with_api_host("http://127.0.0.1:1");
        let f = SaveUserInTypingDna::with_client(tenant_config("true", "true"), client);

        f.save_user(&ctx_with_pattern("abc123"))
            .await
            .expect("transport failures must not surface");
    }
}
