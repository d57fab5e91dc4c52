//! WHOIS response text parsing.
//!
//! WHOIS output is unstructured and varies significantly between registries.
//! This module extracts the handful of fields the classifier cares about
//! (dates, registrar, nameservers) from common key spellings and recognizes
//! the wide family of "no such domain" phrasings.

use crate::error::ScanError;
use serde::{Deserialize, Serialize};

/// Structured data extracted from a WHOIS response.
///
/// All fields are optional; registries differ in which they publish.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WhoisRecord {
    /// The registrar that manages this domain
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registrar: Option<String>,

    /// When the domain was first registered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,

    /// When the domain registration expires
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date: Option<String>,

    /// Last update date of the domain record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_date: Option<String>,

    /// Nameservers associated with the domain
    pub nameservers: Vec<String>,

    /// Domain status codes (e.g., "clientTransferProhibited")
    pub status: Vec<String>,
}

impl WhoisRecord {
    /// True when the record carries no extracted fields at all.
    pub fn is_empty(&self) -> bool {
        self.registrar.is_none()
            && self.creation_date.is_none()
            && self.expiration_date.is_none()
            && self.updated_date.is_none()
            && self.nameservers.is_empty()
            && self.status.is_empty()
    }
}

/// Parser capability consumed by the classifier.
///
/// `parse` reports `ScanError::DomainNotFound` when the response says the
/// domain is not registered, and `ScanError::Parse` when the text is
/// unusable. `looks_unregistered` is the generic heuristic over raw text,
/// usable independently of structured parsing.
pub trait WhoisParser: Send + Sync {
    /// Convert raw WHOIS text into a structured record.
    fn parse(&self, raw: &str) -> Result<WhoisRecord, ScanError>;

    /// Heuristic: does the raw text look like an unregistered-domain response?
    fn looks_unregistered(&self, raw: &str) -> bool;
}

/// Phrases registries use to say a domain is not registered.
const NOT_FOUND_PATTERNS: &[&str] = &[
    "no match",
    "not found",
    "no data found",
    "no entries found",
    "domain not found",
    "domain available",
    "status: available",
    "status: free",
    "no information available",
    "not registered",
    "no matching record",
    "domain status: no object found",
    "the queried object does not exist",
    "object does not exist",
    "no matching entry",
    "domain name not found",
    "this domain name has not been registered",
];

/// Line-oriented WHOIS text parser.
///
/// Matches `key: value` lines against common key spellings, case
/// insensitively. Keys differ per registry ("Registry Expiry Date",
/// "expires", "paid-till", ...), so each field has a small alias list.
#[derive(Debug, Clone, Default)]
pub struct TextWhoisParser;

impl TextWhoisParser {
    pub fn new() -> Self {
        Self
    }

    /// Match a lowercase key against an alias list.
    fn key_matches(key: &str, aliases: &[&str]) -> bool {
        aliases.iter().any(|a| key == *a)
    }
}

const REGISTRAR_KEYS: &[&str] = &["registrar", "registrar name", "sponsoring registrar"];
const CREATION_KEYS: &[&str] = &[
    "creation date",
    "created",
    "created on",
    "registered on",
    "registration date",
];
const EXPIRATION_KEYS: &[&str] = &[
    "registry expiry date",
    "expiry date",
    "expiration date",
    "expires",
    "expires on",
    "paid-till",
];
const UPDATED_KEYS: &[&str] = &[
    "updated date",
    "last updated",
    "last-update",
    "last modified",
    "modified",
    "changed",
];
const NAMESERVER_KEYS: &[&str] = &["name server", "nameserver", "nserver"];
const STATUS_KEYS: &[&str] = &["domain status", "status"];

impl WhoisParser for TextWhoisParser {
    fn parse(&self, raw: &str) -> Result<WhoisRecord, ScanError> {
        if raw.trim().is_empty() {
            return Err(ScanError::parse("empty WHOIS response"));
        }

        if self.looks_unregistered(raw) {
            return Err(ScanError::DomainNotFound);
        }

        let mut record = WhoisRecord::default();

        for line in raw.lines() {
            let line = line.trim();
            // Comment lines in WHOIS output start with % or #
            if line.is_empty() || line.starts_with('%') || line.starts_with('#') {
                continue;
            }

            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim().to_lowercase();
            let value = value.trim();
            if value.is_empty() {
                continue;
            }

            if Self::key_matches(&key, REGISTRAR_KEYS) && record.registrar.is_none() {
                record.registrar = Some(value.to_string());
            } else if Self::key_matches(&key, CREATION_KEYS) && record.creation_date.is_none() {
                record.creation_date = Some(value.to_string());
            } else if Self::key_matches(&key, EXPIRATION_KEYS) && record.expiration_date.is_none() {
                record.expiration_date = Some(value.to_string());
            } else if Self::key_matches(&key, UPDATED_KEYS) && record.updated_date.is_none() {
                record.updated_date = Some(value.to_string());
            } else if Self::key_matches(&key, NAMESERVER_KEYS) {
                record.nameservers.push(value.to_lowercase());
            } else if Self::key_matches(&key, STATUS_KEYS) {
                record.status.push(value.to_string());
            }
        }

        if record.is_empty() {
            return Err(ScanError::parse(
                "no recognizable fields in WHOIS response",
            ));
        }

        Ok(record)
    }

    fn looks_unregistered(&self, raw: &str) -> bool {
        let lower = raw.to_lowercase();
        NOT_FOUND_PATTERNS.iter().any(|p| lower.contains(p))
    }
}
