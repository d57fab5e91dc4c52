//! Protocol collaborators consumed by the scanning core.
//!
//! This module holds the WHOIS transport, the WHOIS response parser, and the
//! zone registry used for configuration-time TLD validation. The transport
//! and parser are trait seams so tests (and embedders) can substitute stubs.

/// WHOIS network transport
pub mod transport;

/// WHOIS response text parser
pub mod parser;

/// Known-TLD registry and zone validation
pub mod registry;

// Re-export commonly used types
pub use parser::{TextWhoisParser, WhoisParser, WhoisRecord};
pub use registry::{is_known_tld, known_tlds, whois_server};
pub use transport::{SystemWhois, WhoisTransport};
