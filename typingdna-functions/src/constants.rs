// Connector configuration keys and wire constants for the TypingDNA APIs.

/// Tenant configuration key for the TypingDNA API key.
pub const USERNAME: &str = "typingdna.username";

/// Tenant configuration key for the TypingDNA API secret.
pub const CREDENTIAL: &str = "typingdna.credential";

/// Tenant configuration key enabling the TypingDNA connector.
pub const ENABLE: &str = "typingdna.enable";

/// Tenant configuration key enabling advanced behavioral matching.
pub const ADVANCE_MODE_ENABLED: &str = "typingdna.advance.mode.enable";

/// Tenant configuration key selecting the API region (`eu` / `us`).
pub const REGION: &str = "typingdna.region";

/// Context property under which the login page stored the captured pattern.
pub const TYPING_PATTERN_PROPERTY: &str = "typingdna.pattern";

/// Literal submitted by login pages when no pattern was captured.
pub const NULL_SENTINEL: &str = "null";

/// Fixed `custom_field` value sent with save requests.
pub const CUSTOM_FIELD_VALUE: &str = "enroll";

/// Fixed `quality` value sent with verify requests.
pub const QUALITY: &str = "2";

/// Context property: whether TypingDNA answered the verify call.
pub const AVAILABLE_PROPERTY: &str = "typingdna.available";

/// Context property: match result (0 or 1) from the verify call.
pub const RESULT_PROPERTY: &str = "typingdna.result";

/// Context property: match score from the verify call.
pub const SCORE_PROPERTY: &str = "typingdna.score";

/// Context property: match confidence from the verify call.
pub const CONFIDENCE_PROPERTY: &str = "typingdna.confidence";
