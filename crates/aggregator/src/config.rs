//! Runtime configuration for the demo binary.
//!
//! All values are read once at startup and passed into the clients
//! explicitly; nothing deeper in the stack touches the environment.

use std::env;

/// Aggregation settings.
#[derive(Debug, Clone)]
pub struct Config {
    /// USDA Market News API key (optional; public tier without it).
    pub mpr_api_key: Option<String>,
    /// NASS Quick Stats API key.
    pub nass_api_key: String,
    /// Market slugs to include in the auction fan-out.
    pub auction_slugs: Vec<String>,
}

/// Markets queried when none are requested explicitly.
const DEFAULT_SLUGS: &[&str] = &["ogallala-livestock", "bassett-livestock", "lexington-livestock"];

impl Config {
    /// Build from the process environment.
    pub fn from_env() -> Self {
        let auction_slugs = match env::var("AUCTION_SLUGS") {
            Ok(raw) if !raw.trim().is_empty() => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            _ => DEFAULT_SLUGS.iter().map(|s| s.to_string()).collect(),
        };

        Self {
            mpr_api_key: env::var("MPR_API_KEY").ok().filter(|k| !k.is_empty()),
            nass_api_key: env::var("NASS_API_KEY").unwrap_or_default(),
            auction_slugs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_slugs_present() {
        assert!(!DEFAULT_SLUGS.is_empty());
        for slug in DEFAULT_SLUGS {
            assert!(common::find_barn(slug).is_some());
        }
    }
}
