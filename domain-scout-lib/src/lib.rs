//! # Domain Scout Library
//!
//! A concurrent WHOIS scanner for wildcard-generated candidate domain names.
//!
//! Given a search pattern with wildcard positions (`se_rch` scans `seabch`,
//! `sebbch`, ...) and a set of TLDs, the library expands the full candidate
//! space, runs one rate-limited worker per TLD, and classifies every WHOIS
//! response into a definitive availability verdict.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use domain_scout_lib::{
//!     expand_patterns, CharacterSet, ScanConfig, ScanEvent, Scanner,
//! };
//! use futures::StreamExt;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let charset = CharacterSet::alpha();
//!     let names = expand_patterns(&["gr_y".to_string()], &charset)?;
//!
//!     let config = ScanConfig::default().with_tlds(vec!["com".into()]);
//!     let scanner = Scanner::with_config(config);
//!
//!     let mut stream = scanner.scan_stream(&names)?;
//!     while let Some(event) = stream.next().await {
//!         match event {
//!             ScanEvent::Result(r) => {
//!                 println!("{}: available={}", r.fqdn(), r.available)
//!             }
//!             ScanEvent::Completed(c) => {
//!                 println!(".{} done in {:?}", c.tld, c.elapsed)
//!             }
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Wildcard Expansion**: exhaustive, deterministic candidate generation
//! - **Concurrent Workers**: one rate-limited worker per TLD
//! - **Classification Policy**: conservative availability verdicts from
//!   unstructured WHOIS text
//! - **Trait Seams**: swappable transport and parser for testing/embedding

// Re-export main public API types and functions
pub use classify::classify;
pub use config::{merge_configs, ConfigManager, DefaultsConfig, FileConfig};
pub use error::ScanError;
pub use generate::{
    estimate_pattern_count, expand_pattern, expand_patterns, generate_domains, CandidateDomain,
    CharacterSet, SearchPattern, MAX_EXPANSION,
};
pub use protocols::parser::{TextWhoisParser, WhoisParser, WhoisRecord};
pub use protocols::registry::{is_known_tld, known_tlds, whois_server};
pub use protocols::transport::{SystemWhois, WhoisTransport};
pub use scanner::{ScanStream, Scanner};
pub use types::{LookupResult, ScanConfig, ScanEvent, WorkerCompletion};
pub use utils::{is_valid_name, validate_name};

// Public modules
pub mod generate;
pub mod protocols;

// Internal modules - these are not part of the public API surface
// beyond the re-exports above
mod classify;
mod config;
mod error;
mod scanner;
mod types;
mod utils;

// Type alias for convenience
pub type Result<T> = std::result::Result<T, ScanError>;

// Library version metadata
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
