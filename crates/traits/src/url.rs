//! URL generation for link helpers.

use std::fmt::Debug;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum UrlError {
    #[error("Invalid base URL '{url}': {message}")]
    InvalidBase { url: String, message: String },
}

/// Turns application paths into absolute URLs.
pub trait UrlGenerator: Send + Sync + Debug {
    /// Absolute URL for `path`. Already-absolute URLs pass through.
    /// `secure` forces the `https` scheme.
    fn to(&self, path: &str, secure: bool) -> String;
}

/// Resolves paths against a fixed base URL.
#[derive(Debug, Clone)]
pub struct BaseUrlGenerator {
    base: Url,
}

impl BaseUrlGenerator {
    /// # Errors
    ///
    /// Returns `UrlError::InvalidBase` if `base` is not an absolute URL.
    pub fn new(base: &str) -> Result<Self, UrlError> {
        let mut base = Url::parse(base).map_err(|e| UrlError::InvalidBase {
            url: base.to_string(),
            message: e.to_string(),
        })?;
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { base })
    }
}

impl UrlGenerator for BaseUrlGenerator {
    fn to(&self, path: &str, secure: bool) -> String {
        if let Ok(absolute) = Url::parse(path) {
            return absolute.into();
        }
        let mut resolved = match self.base.join(path.trim_start_matches('/')) {
            Ok(url) => url,
            Err(e) => {
                log::warn!("Cannot resolve '{}' against '{}': {}", path, self.base, e);
                return path.to_string();
            }
        };
        if secure && resolved.scheme() == "http" {
            // http -> https is always an allowed scheme change.
            let _ = resolved.set_scheme("https");
        }
        resolved.into()
    }
}
