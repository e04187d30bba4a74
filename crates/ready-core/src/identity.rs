//! Lead identity and submission-time validation.

use std::sync::LazyLock;

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::IdentityError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Identity {
    pub name: String,
    pub email: String,
    pub consent: bool,
}

impl Identity {
    /// Check the identity is fit to submit.
    ///
    /// Name and email are checked before consent, so a form with everything
    /// missing reports the name/email problem first.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::InvalidNameOrEmail`] for a blank name or a
    /// malformed email, and [`IdentityError::MissingConsent`] when consent
    /// was not given.
    pub fn validate(&self) -> Result<(), IdentityError> {
        if self.name.trim().is_empty() || !is_valid_email(&self.email) {
            return Err(IdentityError::InvalidNameOrEmail);
        }
        if !self.consent {
            return Err(IdentityError::MissingConsent);
        }
        Ok(())
    }
}

/// ECMAScript `\s`: the whitespace and line-terminator code points a
/// browser's `\s` matches. Neither `char::is_whitespace` nor the regex
/// crate's `\s` agrees with it (U+FEFF is in, U+0085 is out).
const JS_WHITESPACE: &str = r"\t\n\x0B\x0C\r \x{00A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let part = format!("[^@{JS_WHITESPACE}]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).expect("email pattern is valid")
});

/// Loose `local@domain.tld` check: `^[^@\s]+@[^@\s]+\.[^@\s]+$` with
/// browser whitespace semantics.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
