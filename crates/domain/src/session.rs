//! Per-client session state
//!
//! One client instance owns exactly one session. The token is the only
//! state that changes after construction, and only the two auth
//! operations touch it: a successful login stores it, logout always
//! clears it.

/// Bearer-token session state for a single client instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// Creates an anonymous session.
    #[must_use]
    pub const fn new() -> Self {
        Self { token: None }
    }

    /// Creates a session pre-seeded with an existing token.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Stores a freshly issued token.
    pub fn authenticate(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    /// Drops the token, returning the session to anonymous.
    pub fn clear(&mut self) {
        self.token = None;
    }

    /// Returns the current token, if any.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns true if a token is held.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Renders the token as an `Authorization` header value.
    #[must_use]
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {token}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_starts_anonymous() {
        let session = Session::new();
        assert!(!session.is_authenticated());
        assert_eq!(session.bearer(), None);
    }

    #[test]
    fn test_authenticate_then_clear() {
        let mut session = Session::new();
        session.authenticate("T");
        assert!(session.is_authenticated());
        assert_eq!(session.bearer().as_deref(), Some("Bearer T"));

        session.clear();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
    }

    #[test]
    fn test_pre_seeded_token() {
        let session = Session::with_token("persisted");
        assert_eq!(session.token(), Some("persisted"));
    }
}
