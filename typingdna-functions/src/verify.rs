//! Verify a user's typing pattern against their TypingDNA profile.

use std::sync::Arc;

use typingdna_core::{AuthContext, ConnectorConfig};

use crate::client::{log_transient, TypingDnaClient, VerifyResponse};
use crate::constants;
use crate::error::TypingDnaFunctionError;
use crate::identity::typingdna_user_id;
use crate::pattern::captured_pattern;
use crate::settings::TypingDnaSettings;

/// Conditional-auth function that matches the captured typing pattern
/// against the user's enrolled TypingDNA profile.
///
/// Advance mode selects the `auto` endpoint (richer behavioral matching);
/// otherwise the plain `verify` endpoint is used. The outcome is published
/// into the context properties for the downstream policy flow; transport
/// failures mark TypingDNA as unavailable instead of failing the login.
pub struct VerifyUserWithTypingDna {
    config: Arc<dyn ConnectorConfig>,
    client: TypingDnaClient,
}

impl VerifyUserWithTypingDna {
    pub fn new(config: Arc<dyn ConnectorConfig>) -> Result<Self, TypingDnaFunctionError> {
        let client = TypingDnaClient::new().map_err(TypingDnaFunctionError::ClientInit)?;
        Ok(Self::with_client(config, client))
    }

    /// Constructor with an explicit client, for wiring and tests.
    pub fn with_client(config: Arc<dyn ConnectorConfig>, client: TypingDnaClient) -> Self {
        Self { config, client }
    }

    /// Runs the verify call and publishes the outcome into the context.
    ///
    /// When the pattern is absent or the connector is disabled, nothing is
    /// published and nothing is sent.
    pub async fn verify_user(&self, ctx: &mut AuthContext) -> Result<(), TypingDnaFunctionError> {
        let Some(request) = self.prepare(ctx)? else {
            return Ok(());
        };

        let outcome = match request {
            Ok(request) => self.client.dispatch_verify(request).await,
            Err(err) => {
                log_transient(&err);
                None
            }
        };
        publish(ctx, outcome);
        Ok(())
    }

    /// Reads the tenant settings and assembles the verify request.
    ///
    /// The outer `Option` is the gate; the inner `Result` carries a request
    /// assembly failure, which counts as TypingDNA being unavailable rather
    /// than as a caller-visible error.
    #[allow(clippy::type_complexity)]
    fn prepare(
        &self,
        ctx: &AuthContext,
    ) -> Result<Option<Result<reqwest::Request, reqwest::Error>>, TypingDnaFunctionError> {
        let user = ctx.user();
        let tenant_domain = user.tenant_domain.as_str();
        let settings = TypingDnaSettings::load(self.config.as_ref(), tenant_domain)?;

        let Some(pattern) = captured_pattern(ctx) else {
            return Ok(None);
        };
        if !settings.enabled {
            return Ok(None);
        }

        let operation = if settings.advance_mode { "auto" } else { "verify" };
        let user_id = typingdna_user_id(&user.username, tenant_domain);
        let url = self.client.endpoint(&settings.region, operation, &user_id);
        let request = self.client.form_post(
            &url,
            &settings.api_key,
            &settings.api_secret,
            &[("tp", pattern), ("quality", constants::QUALITY)],
        );

        Ok(Some(request))
    }
}

/// Writes the verify outcome into the context properties.
fn publish(ctx: &mut AuthContext, outcome: Option<VerifyResponse>) {
    match outcome {
        Some(response) => {
            ctx.set_property(constants::AVAILABLE_PROPERTY, "true");
            ctx.set_property(constants::RESULT_PROPERTY, response.result.to_string());
            ctx.set_property(constants::SCORE_PROPERTY, response.score.to_string());
            ctx.set_property(
                constants::CONFIDENCE_PROPERTY,
                response.confidence.to_string(),
            );
        }
        None => {
            ctx.set_property(constants::AVAILABLE_PROPERTY, "false");
        }
    }
}
