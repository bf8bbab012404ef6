use chrono::{DateTime, TimeDelta, Utc};

/// Bearer token together with the instant it stops being valid
///
/// `expires_at` is `None` for pre-issued static tokens, which never expire
/// from the client's point of view.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    token: String,
    expires_at: Option<DateTime<Utc>>,
}

impl Credential {
    pub fn new(token: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            token: token.into(),
            expires_at: Some(expires_at),
        }
    }

    pub fn non_expiring(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            expires_at: None,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Whether the token is still usable at `now` with at least `skew` of
    /// validity left for the request about to be sent
    pub fn is_valid_at(&self, now: DateTime<Utc>, skew: TimeDelta) -> bool {
        match self.expires_at {
            None => true,
            Some(expires_at) => now + skew < expires_at,
        }
    }
}

// Keep the token itself out of debug output.
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}
