//! Lookup classification: reducing raw WHOIS output to an availability verdict.
//!
//! `classify` is a pure reducer over the two collaborator outputs. It builds
//! each `LookupResult` exactly once, fully populated; there is no partially
//! built shared value being mutated along the way.
//!
//! Classification policy, evaluated in order:
//! 1. transport failure → undetermined (error attached, available = false)
//! 2. parser's "domain not found" signal, or the generic unregistered
//!    heuristic over the raw text → available
//! 3. any other parse failure → undetermined (error attached)
//! 4. record carries an expiration date → registered
//! 5. record carries a last-updated date → registered
//! 6. otherwise → registered (conservative fallback: a response that parsed
//!    but shows neither date is assumed registered rather than risking a
//!    false availability)

use crate::protocols::parser::WhoisParser;
use crate::protocols::transport::WhoisTransport;
use crate::types::LookupResult;
use tracing::{debug, warn};

/// Look up one candidate and classify the response.
///
/// Errors are data here: a transport or parse failure lands on the returned
/// result and never propagates, so one bad candidate cannot halt a scan.
pub async fn classify(
    name: &str,
    tld: &str,
    transport: &dyn WhoisTransport,
    parser: &dyn WhoisParser,
) -> LookupResult {
    let domain = format!("{}.{}", name, tld);

    let raw = match transport.lookup(&domain).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!(domain = %domain, error = %e, "WHOIS transport failure");
            return LookupResult {
                name: name.to_string(),
                tld: tld.to_string(),
                available: false,
                record: None,
                error: Some(e),
            };
        }
    };

    match parser.parse(&raw) {
        Err(e) if e.is_domain_not_found() => {
            debug!(domain = %domain, "domain not registered");
            LookupResult {
                name: name.to_string(),
                tld: tld.to_string(),
                available: true,
                record: None,
                error: None,
            }
        }
        Err(e) => {
            // Structured parsing failed; the raw-text heuristic may still
            // recognize an unregistered-domain response.
            if parser.looks_unregistered(&raw) {
                debug!(domain = %domain, "domain not registered (heuristic)");
                LookupResult {
                    name: name.to_string(),
                    tld: tld.to_string(),
                    available: true,
                    record: None,
                    error: None,
                }
            } else {
                warn!(domain = %domain, error = %e, "unparseable WHOIS response");
                LookupResult {
                    name: name.to_string(),
                    tld: tld.to_string(),
                    available: false,
                    record: None,
                    error: Some(e),
                }
            }
        }
        Ok(record) => {
            if parser.looks_unregistered(&raw) {
                // Partially populated record on an unregistered response is
                // kept for the caller's benefit.
                debug!(domain = %domain, "domain not registered");
                return LookupResult {
                    name: name.to_string(),
                    tld: tld.to_string(),
                    available: true,
                    record: Some(record),
                    error: None,
                };
            }

            let has_expiration = record
                .expiration_date
                .as_deref()
                .is_some_and(|d| !d.is_empty());
            let has_updated = record
                .updated_date
                .as_deref()
                .is_some_and(|d| !d.is_empty());

            if has_expiration {
                debug!(domain = %domain, expires = ?record.expiration_date, "registered");
            } else if has_updated {
                debug!(domain = %domain, updated = ?record.updated_date, "registered");
            } else {
                // Neither date present: assume registered rather than report
                // a false availability.
                debug!(domain = %domain, "registered (no dates in record)");
            }

            LookupResult {
                name: name.to_string(),
                tld: tld.to_string(),
                available: false,
                record: Some(record),
                error: None,
            }
        }
    }
}
