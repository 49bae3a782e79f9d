// Typed errors surfaced to the host engine.

use thiserror::Error;
use typingdna_core::ConfigError;

/// Errors a TypingDNA conditional-auth function can raise.
///
/// Transport failures during the API calls are deliberately absent: those
/// are logged and swallowed so a TypingDNA outage never blocks a login
/// flow. Only misconfiguration is a caller-visible condition.
#[derive(Debug, Error)]
pub enum TypingDnaFunctionError {
    /// The tenant configuration store could not be read.
    #[error("cannot retrieve configurations from tenant")]
    Configuration(#[source] ConfigError),

    /// The shared HTTP client could not be constructed at wiring time.
    #[error("cannot initialise the TypingDNA HTTP client")]
    ClientInit(#[source] reqwest::Error),
}
