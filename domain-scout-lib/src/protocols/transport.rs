//! WHOIS transport: fetching raw registration data for one domain.
//!
//! The production transport shells out to the system `whois` command through
//! tokio's process API under a timeout, which sidesteps per-registry referral
//! handling since the system tool already follows referrals. The trait seam
//! lets tests substitute canned responses.

use crate::error::ScanError;
use async_trait::async_trait;
use std::time::Duration;
use tokio::process::Command;

/// Transport capability consumed by the classifier.
///
/// Given a fully qualified domain, returns the raw WHOIS response text.
/// Any error is treated as a transport failure for that one candidate;
/// the transport never retries.
#[async_trait]
pub trait WhoisTransport: Send + Sync {
    async fn lookup(&self, domain: &str) -> Result<String, ScanError>;
}

/// WHOIS transport backed by the system's `whois` command.
#[derive(Debug, Clone)]
pub struct SystemWhois {
    /// Timeout for one WHOIS query
    timeout: Duration,
}

impl SystemWhois {
    /// Create a transport with the default 10 second query timeout.
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_secs(10),
        }
    }

    /// Create a transport with a custom query timeout.
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }

    async fn execute_whois(&self, domain: &str) -> Result<String, ScanError> {
        let output = Command::new("whois")
            .arg(domain)
            .output()
            .await
            .map_err(|e| {
                ScanError::transport(
                    domain,
                    format!(
                        "failed to execute whois command: {}. Make sure 'whois' is installed.",
                        e
                    ),
                )
            })?;

        // Some whois builds exit non-zero on "not found" responses while
        // still printing the response; the parser decides what it means.
        let text = String::from_utf8_lossy(&output.stdout).to_string();
        if text.trim().is_empty() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ScanError::transport(
                domain,
                format!("whois produced no output: {}", stderr.trim()),
            ));
        }

        Ok(text)
    }
}

impl Default for SystemWhois {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WhoisTransport for SystemWhois {
    async fn lookup(&self, domain: &str) -> Result<String, ScanError> {
        match tokio::time::timeout(self.timeout, self.execute_whois(domain)).await {
            Ok(result) => result,
            Err(_) => Err(ScanError::transport(
                domain,
                format!("WHOIS query timed out after {:?}", self.timeout),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_creation() {
        let transport = SystemWhois::new();
        assert_eq!(transport.timeout, Duration::from_secs(10));

        let custom = SystemWhois::with_timeout(Duration::from_secs(3));
        assert_eq!(custom.timeout, Duration::from_secs(3));
    }

    #[tokio::test]
    async fn test_lookup_nonexistent_command_path_is_transport_error() {
        // Querying an empty domain makes most whois builds print usage to
        // stderr and nothing to stdout, which must surface as a transport
        // error rather than a panic. Skip silently if whois is missing.
        let transport = SystemWhois::with_timeout(Duration::from_secs(5));
        let result = transport.lookup("").await;
        if let Err(e) = result {
            assert!(matches!(e, ScanError::Transport { .. }));
        }
    }
}
