//! Server configuration

use crate::receipt::DigestKind;

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: String,
    pub log_level: String,
    /// Comma-separated access tokens for sheet-owner routes (None = open mode)
    pub access_tokens: Option<Vec<String>>,
    /// Base URL used when building receipt lookup links
    pub base_url: String,
    /// Digest strategy for receipt hashes
    pub digest: DigestKind,
}

impl Config {
    /// Parse the comma-separated token list from its raw CLI/env form
    pub fn parse_access_tokens(raw: Option<&str>) -> Option<Vec<String>> {
        raw.map(|s| {
            s.split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect()
        })
        .filter(|v: &Vec<String>| !v.is_empty())
    }
}
