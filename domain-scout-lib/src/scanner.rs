//! Concurrent scan orchestration.
//!
//! The scanner starts one worker task per requested TLD. Each worker walks
//! its candidate slice in generation order, classifies every candidate, and
//! publishes onto a single bounded channel shared by all workers. A worker
//! sleeps for the configured delay between candidates, rate limiting each
//! TLD independently with no coordination between workers.
//!
//! End-of-stream is structural: every worker holds a sender clone and drops
//! it after publishing its completion notice, so the merged stream ends only
//! once all results and all completions have been drained. There is no
//! counting convention to get wrong.

use crate::classify::classify;
use crate::error::ScanError;
use crate::generate::CandidateDomain;
use crate::protocols::parser::{TextWhoisParser, WhoisParser};
use crate::protocols::registry::is_known_tld;
use crate::protocols::transport::{SystemWhois, WhoisTransport};
use crate::types::{LookupResult, ScanConfig, ScanEvent, WorkerCompletion};
use futures::stream::Stream;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// A boxed stream of scan events.
pub type ScanStream = Pin<Box<dyn Stream<Item = ScanEvent> + Send>>;

/// Coordinates a concurrent availability scan across TLDs.
///
/// # Example
///
/// ```rust,no_run
/// use domain_scout_lib::{ScanConfig, Scanner};
/// use futures::StreamExt;
/// use std::time::Duration;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = ScanConfig::default()
///         .with_tlds(vec!["com".into(), "net".into()])
///         .with_delay(Duration::from_millis(500));
///     let scanner = Scanner::with_config(config);
///
///     let mut stream = scanner.scan_stream(&["example".to_string()])?;
///     while let Some(event) = stream.next().await {
///         println!("{:?}", event);
///     }
///     Ok(())
/// }
/// ```
pub struct Scanner {
    /// Immutable configuration for this scanner instance
    config: ScanConfig,
    /// Transport used for every lookup
    transport: Arc<dyn WhoisTransport>,
    /// Parser used to classify every response
    parser: Arc<dyn WhoisParser>,
}

impl Scanner {
    /// Create a scanner with default configuration and the system WHOIS
    /// transport.
    pub fn new() -> Self {
        Self::with_config(ScanConfig::default())
    }

    /// Create a scanner with custom configuration and the default
    /// collaborators.
    pub fn with_config(config: ScanConfig) -> Self {
        let transport = Arc::new(SystemWhois::with_timeout(config.lookup_timeout));
        Self {
            config,
            transport,
            parser: Arc::new(TextWhoisParser::new()),
        }
    }

    /// Create a scanner with explicit transport and parser collaborators.
    ///
    /// This is the seam embedders and tests use to substitute stubs.
    pub fn with_collaborators(
        config: ScanConfig,
        transport: Arc<dyn WhoisTransport>,
        parser: Arc<dyn WhoisParser>,
    ) -> Self {
        Self {
            config,
            transport,
            parser,
        }
    }

    /// The configuration this scanner was built with.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Validate configuration and inputs before any concurrent work starts.
    ///
    /// Rejects an empty name list, an empty TLD list, and any TLD the zone
    /// registry does not know. All violations are fatal configuration
    /// errors; nothing is spawned when this fails.
    fn validate(&self, names: &[String]) -> Result<(), ScanError> {
        if names.is_empty() {
            return Err(ScanError::config("no candidate names to scan"));
        }
        if self.config.tlds.is_empty() {
            return Err(ScanError::config("no TLDs to scan"));
        }
        for tld in &self.config.tlds {
            if !is_known_tld(tld) {
                return Err(ScanError::config(format!("unknown TLD: {}", tld)));
            }
        }
        Ok(())
    }

    /// Scan the given base names across the configured TLDs, streaming
    /// results as they arrive.
    ///
    /// One worker task is started per TLD; there is no throttling of worker
    /// count beyond the TLD list itself. The stream interleaves results from
    /// different TLDs arbitrarily; within one TLD results keep generation
    /// order. Each worker contributes exactly one `ScanEvent::Completed`
    /// after its last result, and the stream ends once every worker has
    /// finished and all events have been drained.
    ///
    /// Per-candidate transport/parse failures are attached to their result;
    /// only configuration problems make this function fail.
    pub fn scan_stream(&self, names: &[String]) -> Result<ScanStream, ScanError> {
        self.validate(names)?;

        let (tx, rx) = mpsc::channel::<ScanEvent>(self.config.channel_capacity);

        info!(
            names = names.len(),
            tlds = self.config.tlds.len(),
            delay_ms = self.config.delay.as_millis() as u64,
            "starting scan"
        );

        for tld in &self.config.tlds {
            // Each worker owns its slice of the candidate space: every name,
            // restricted to this one TLD, in generation order.
            let candidates: Vec<CandidateDomain> = names
                .iter()
                .map(|name| CandidateDomain {
                    name: name.clone(),
                    tld: tld.clone(),
                })
                .collect();

            tokio::spawn(run_worker(
                candidates,
                tld.clone(),
                self.config.delay,
                self.transport.clone(),
                self.parser.clone(),
                tx.clone(),
            ));
        }
        // Workers hold the only remaining senders; the stream closes when
        // the last worker drops its clone.
        drop(tx);

        let stream = futures::stream::unfold(rx, |mut rx| async move {
            rx.recv().await.map(|event| (event, rx))
        });
        Ok(Box::pin(stream))
    }

    /// Run a scan to completion and return all results plus the per-TLD
    /// completion notices.
    ///
    /// Convenience wrapper over [`scan_stream`](Self::scan_stream) for
    /// callers that don't need streaming output.
    pub async fn scan_collected(
        &self,
        names: &[String],
    ) -> Result<(Vec<LookupResult>, Vec<WorkerCompletion>), ScanError> {
        use futures::StreamExt;

        let mut stream = self.scan_stream(names)?;
        let mut results = Vec::new();
        let mut completions = Vec::new();

        while let Some(event) = stream.next().await {
            match event {
                ScanEvent::Result(result) => results.push(result),
                ScanEvent::Completed(completion) => completions.push(completion),
            }
        }

        Ok((results, completions))
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}

/// One TLD worker: a one-shot unit of work over its candidate slice.
///
/// Classifies each candidate, publishes the result, and sleeps for `delay`
/// before the next. A classification error never halts the worker. After the
/// last candidate it publishes its completion notice and returns, dropping
/// its sender. If the consumer has gone away the sends fail and the worker
/// stops early; that is the caller-driven abandonment path.
async fn run_worker(
    candidates: Vec<CandidateDomain>,
    tld: String,
    delay: std::time::Duration,
    transport: Arc<dyn WhoisTransport>,
    parser: Arc<dyn WhoisParser>,
    tx: mpsc::Sender<ScanEvent>,
) {
    let start = Instant::now();
    let total = candidates.len();

    for (index, candidate) in candidates.iter().enumerate() {
        let result = classify(
            &candidate.name,
            &candidate.tld,
            transport.as_ref(),
            parser.as_ref(),
        )
        .await;

        if tx.send(ScanEvent::Result(result)).await.is_err() {
            debug!(tld = %tld, "consumer dropped, abandoning worker");
            return;
        }

        if index + 1 < total && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    let completion = WorkerCompletion {
        tld: tld.clone(),
        elapsed: start.elapsed(),
    };
    debug!(tld = %tld, elapsed = ?completion.elapsed, candidates = total, "worker finished");
    let _ = tx.send(ScanEvent::Completed(completion)).await;
}
