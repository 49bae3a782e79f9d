//! Typing-pattern extraction from the authentication context.

use typingdna_core::AuthContext;

use crate::constants;

/// Returns the typing pattern captured earlier in the flow, if usable.
///
/// Login pages that fail to record a pattern submit an empty value or the
/// literal string `null` (any letter casing); both read as absent, as does
/// an all-whitespace value.
pub fn captured_pattern(ctx: &AuthContext) -> Option<&str> {
    let pattern = ctx.property(constants::TYPING_PATTERN_PROPERTY)?;
    if pattern.trim().is_empty() || pattern.eq_ignore_ascii_case(constants::NULL_SENTINEL) {
        return None;
    }
    Some(pattern)
}
