//! CSRF token supply.

use rand::Rng;
use rand::distr::Alphanumeric;
use std::fmt::Debug;

const TOKEN_LENGTH: usize = 40;

/// Supplies the token embedded in the hidden CSRF field at form close.
pub trait CsrfTokenProvider: Send + Sync + Debug {
    fn token(&self) -> String;
}

/// A fixed token, typically the one stored in the user's session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticToken(String);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// A fresh random alphanumeric token.
    pub fn random() -> Self {
        let token = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LENGTH)
            .map(char::from)
            .collect();
        Self(token)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl CsrfTokenProvider for StaticToken {
    fn token(&self) -> String {
        self.0.clone()
    }
}
