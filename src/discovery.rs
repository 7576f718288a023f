//! Service discovery for `mongodb+srv` broker URIs.
//!
//! The discovery scheme names a single domain; the actual node list,
//! replica-set options, and sometimes credentials come from an external
//! lookup (SRV/TXT records in a real deployment). That lookup is owned by
//! an implementation of [`SrvLookup`] injected into the resolver, so
//! tests and fixture-driven deployments substitute their own without
//! touching global state.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::{TransportError, TransportResult};
use crate::options::OptionsMap;

/// The outcome of a discovery lookup for a broker domain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SrvResolution {
    /// Resolved broker nodes as (host, port) pairs.
    pub nodes: Vec<(String, u16)>,
    /// Database name, when the discovery layer supplies one.
    pub database: Option<String>,
    /// Username, when the discovery layer supplies one.
    pub username: Option<String>,
    /// Password, when the discovery layer supplies one.
    pub password: Option<String>,
    /// Options published by the discovery layer (e.g. TXT records).
    pub options: OptionsMap,
}

/// Resolves a broker domain to its node list and connection metadata.
///
/// Implementations own all network I/O, timeouts, and caching. Errors
/// they return surface unchanged from the resolver as configuration
/// errors; the resolver never retries.
#[async_trait]
pub trait SrvLookup: Send + Sync {
    /// Resolve `domain`, with `port` as the scheme's implied port.
    async fn lookup(&self, domain: &str, port: u16) -> TransportResult<SrvResolution>;
}

/// Table-driven lookup for tests and fixture-driven deployments.
#[derive(Debug, Clone, Default)]
pub struct StaticSrvLookup {
    entries: HashMap<String, SrvResolution>,
}

impl StaticSrvLookup {
    /// Create an empty lookup table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resolution for a domain.
    pub fn with_entry(mut self, domain: impl Into<String>, resolution: SrvResolution) -> Self {
        self.entries.insert(domain.into(), resolution);
        self
    }
}

#[async_trait]
impl SrvLookup for StaticSrvLookup {
    async fn lookup(&self, domain: &str, _port: u16) -> TransportResult<SrvResolution> {
        self.entries.get(domain).cloned().ok_or_else(|| {
            TransportError::config(format!("no discovery entry for domain '{}'", domain))
        })
    }
}
