// Narrow seam between the host engine and the functions.

use async_trait::async_trait;
use typingdna_core::AuthContext;

use crate::error::TypingDnaFunctionError;
use crate::save::SaveUserInTypingDna;
use crate::verify::VerifyUserWithTypingDna;

/// A callback step in a policy-driven authentication flow.
///
/// The host engine registers functions by name and invokes them with the
/// current flow context; a function either performs its side effect or
/// publishes a decision input back into the context.
#[async_trait]
pub trait ConditionalAuthFunction: Send + Sync {
    fn name(&self) -> &'static str;

    async fn execute(&self, ctx: &mut AuthContext) -> Result<(), TypingDnaFunctionError>;
}

#[async_trait]
impl ConditionalAuthFunction for SaveUserInTypingDna {
    fn name(&self) -> &'static str {
        "saveUserInTypingDNA"
    }

    async fn execute(&self, ctx: &mut AuthContext) -> Result<(), TypingDnaFunctionError> {
        self.save_user(ctx).await
    }
}

#[async_trait]
impl ConditionalAuthFunction for VerifyUserWithTypingDna {
    fn name(&self) -> &'static str {
        "verifyUserWithTypingDNA"
    }

    async fn execute(&self, ctx: &mut AuthContext) -> Result<(), TypingDnaFunctionError> {
        self.verify_user(ctx).await
    }
}
