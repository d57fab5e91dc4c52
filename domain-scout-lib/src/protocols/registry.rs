//! Known-TLD registry and zone validation.
//!
//! This module maps TLDs to their authoritative WHOIS servers. The scanner
//! uses it only at configuration time, to reject unsupported TLDs before any
//! worker starts; lookups themselves go through the transport unmodified.

use std::collections::HashMap;

lazy_static::lazy_static! {
    /// TLD -> authoritative WHOIS server hostname.
    static ref WHOIS_REGISTRY: HashMap<&'static str, &'static str> = HashMap::from([
        // Popular gTLDs (Generic Top-Level Domains)
        ("com", "whois.verisign-grs.com"),
        ("net", "whois.verisign-grs.com"),
        ("org", "whois.publicinterestregistry.org"),
        ("info", "whois.identitydigital.services"),
        ("biz", "whois.nic.biz"),
        // Google TLDs
        ("app", "whois.nic.google"),
        ("dev", "whois.nic.google"),
        ("page", "whois.nic.google"),
        // CentralNic managed gTLDs
        ("xyz", "whois.nic.xyz"),
        ("tech", "whois.nic.tech"),
        ("online", "whois.nic.online"),
        ("site", "whois.nic.site"),
        ("website", "whois.nic.website"),
        // Other popular gTLDs
        ("blog", "whois.nic.blog"),
        ("shop", "whois.nic.shop"),
        ("cloud", "whois.nic.cloud"),
        ("zone", "whois.nic.zone"),
        ("digital", "whois.nic.digital"),
        // Identity Digital managed ccTLDs
        ("ai", "whois.nic.ai"),     // Anguilla
        ("io", "whois.nic.io"),     // British Indian Ocean Territory
        ("me", "whois.nic.me"),     // Montenegro
        // Country Code TLDs (ccTLDs)
        ("us", "whois.nic.us"),           // United States
        ("uk", "whois.nic.uk"),           // United Kingdom
        ("de", "whois.denic.de"),         // Germany
        ("ca", "whois.cira.ca"),          // Canada
        ("au", "whois.auda.org.au"),      // Australia
        ("fr", "whois.nic.fr"),           // France
        ("nl", "whois.domain-registry.nl"), // Netherlands
        ("br", "whois.registro.br"),      // Brazil
        ("in", "whois.registry.in"),      // India
        ("co", "whois.nic.co"),           // Colombia
        ("se", "whois.iis.se"),           // Sweden
        ("no", "whois.norid.no"),         // Norway
        ("es", "whois.nic.es"),           // Spain
        ("it", "whois.nic.it"),           // Italy
        ("eu", "whois.eu"),               // European Union
        ("ch", "whois.nic.ch"),           // Switzerland
        ("jp", "whois.jprs.jp"),          // Japan
        // Verisign managed ccTLDs
        ("tv", "whois.nic.tv"),           // Tuvalu
        ("cc", "ccwhois.verisign-grs.com"), // Cocos Islands
    ]);
}

/// Check whether a TLD has a known authoritative WHOIS zone.
///
/// Used to validate configuration before a scan starts; never consulted
/// during lookups.
pub fn is_known_tld(tld: &str) -> bool {
    WHOIS_REGISTRY.contains_key(tld.trim().to_lowercase().as_str())
}

/// The authoritative WHOIS server for a TLD, when known.
pub fn whois_server(tld: &str) -> Option<&'static str> {
    WHOIS_REGISTRY
        .get(tld.trim().to_lowercase().as_str())
        .copied()
}

/// All known TLDs, sorted alphabetically.
pub fn known_tlds() -> Vec<String> {
    let mut tlds: Vec<String> = WHOIS_REGISTRY.keys().map(|t| t.to_string()).collect();
    tlds.sort();
    tlds
}
