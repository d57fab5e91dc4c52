//! Core data types for domain scanning.
//!
//! This module defines the main data structures used throughout the library:
//! lookup results, worker completion notices, the merged event stream item,
//! and the scan configuration.

use crate::error::ScanError;
use crate::protocols::parser::WhoisRecord;
use std::time::Duration;

/// Result of a single candidate domain lookup.
///
/// Built exactly once by the classifier from the raw transport/parser output
/// and immutable afterwards. Ownership transfers across the result stream;
/// it is never shared for concurrent mutation.
#[derive(Debug, Clone)]
pub struct LookupResult {
    /// The candidate base name that was looked up (e.g. "ab")
    pub name: String,

    /// The top-level domain the lookup ran against (e.g. "com")
    pub tld: String,

    /// Whether the domain appears available for registration.
    /// `false` is the conservative default: registered, or undetermined
    /// when `error` is set.
    pub available: bool,

    /// Structured WHOIS data, when the response parsed (possibly partial)
    pub record: Option<WhoisRecord>,

    /// Transport or parse failure for this candidate, if any.
    /// Never fatal to the scan.
    pub error: Option<ScanError>,
}

impl LookupResult {
    /// The fully qualified domain this result describes (e.g. "ab.com").
    pub fn fqdn(&self) -> String {
        format!("{}.{}", self.name, self.tld)
    }

    /// Whether the lookup reached a definitive verdict (no error attached).
    pub fn is_determined(&self) -> bool {
        self.error.is_none()
    }
}

/// Completion notice emitted once per TLD worker at termination.
#[derive(Debug, Clone)]
pub struct WorkerCompletion {
    /// The TLD this worker was responsible for
    pub tld: String,

    /// Wall-clock time the worker spent on its candidate slice
    pub elapsed: Duration,
}

/// A single item on the merged scan output stream.
///
/// Workers for different TLDs interleave their results arbitrarily; within
/// one TLD, results arrive in candidate generation order. Every worker emits
/// exactly one `Completed` notice after its last result.
#[derive(Debug, Clone)]
pub enum ScanEvent {
    /// One classified candidate lookup
    Result(LookupResult),

    /// A TLD worker finished its full candidate slice
    Completed(WorkerCompletion),
}

/// Configuration for a scan.
///
/// An explicit immutable value constructed once and handed to the scanner;
/// there is no process-wide mutable state.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// TLDs to scan, one concurrent worker each.
    /// No worker-count throttling is applied beyond this list's length.
    pub tlds: Vec<String>,

    /// Fixed delay between consecutive lookups within one worker.
    /// Per-TLD rate limiting; workers do not coordinate delays globally.
    pub delay: Duration,

    /// Timeout for each individual WHOIS query
    pub lookup_timeout: Duration,

    /// Capacity of the merged result channel. A slow consumer blocks
    /// publication once this fills, throttling lookup issue rate.
    pub channel_capacity: usize,
}

impl Default for ScanConfig {
    /// Create a sensible default configuration.
    ///
    /// The 500ms delay keeps the per-TLD query rate polite enough for
    /// most WHOIS responders.
    fn default() -> Self {
        Self {
            tlds: vec!["com".to_string()],
            delay: Duration::from_millis(500),
            lookup_timeout: Duration::from_secs(10),
            channel_capacity: 64,
        }
    }
}

impl ScanConfig {
    /// Set the TLDs to scan.
    pub fn with_tlds(mut self, tlds: Vec<String>) -> Self {
        self.tlds = tlds;
        self
    }

    /// Set the inter-lookup delay for each worker.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Set the per-query WHOIS timeout.
    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = timeout;
        self
    }

    /// Set the merged result channel capacity (minimum 1).
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity.max(1);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScanConfig::default();
        assert_eq!(config.tlds, vec!["com".to_string()]);
        assert_eq!(config.delay, Duration::from_millis(500));
        assert!(config.channel_capacity > 0);
    }

    #[test]
    fn test_builder_methods() {
        let config = ScanConfig::default()
            .with_tlds(vec!["net".to_string(), "org".to_string()])
            .with_delay(Duration::from_millis(0))
            .with_channel_capacity(0);

        assert_eq!(config.tlds.len(), 2);
        assert_eq!(config.delay, Duration::ZERO);
        // Capacity is clamped to at least 1
        assert_eq!(config.channel_capacity, 1);
    }

    #[test]
    fn test_fqdn() {
        let result = LookupResult {
            name: "ab".to_string(),
            tld: "com".to_string(),
            available: true,
            record: None,
            error: None,
        };
        assert_eq!(result.fqdn(), "ab.com");
        assert!(result.is_determined());
    }
}
