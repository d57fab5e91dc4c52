//! Candidate domain generation.
//!
//! This module expands search patterns into concrete base names and crosses
//! them with the requested TLDs. It is a pure combinatorial engine: no state,
//! no I/O, and fully deterministic output for a given input.
//!
//! # Pattern Syntax
//!
//! - `_` is a wildcard slot, substituted by every character in the
//!   configured character set
//! - Any other character is a literal
//!
//! # Examples
//!
//! ```
//! use domain_scout_lib::generate::{expand_pattern, CharacterSet, SearchPattern};
//!
//! let pattern = SearchPattern::parse("a_b").unwrap();
//! let charset = CharacterSet::custom("12").unwrap();
//! let names = expand_pattern(&pattern, &charset).unwrap();
//! assert_eq!(names, vec!["a1b".to_string(), "a2b".to_string()]);
//! ```

use crate::error::ScanError;

/// A single slot in a parsed pattern: a fixed character or a wildcard.
#[derive(Debug, Clone, PartialEq)]
enum Token {
    Literal(char),
    Wildcard,
}

/// A parsed search pattern. Immutable once parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPattern {
    tokens: Vec<Token>,
}

impl SearchPattern {
    /// Parse a pattern string into an ordered token sequence.
    ///
    /// `_` marks a wildcard position; everything else is taken literally.
    /// Literal characters are restricted to the domain-name alphabet
    /// (lowercase letters, digits, hyphen).
    pub fn parse(pattern: &str) -> Result<Self, ScanError> {
        if pattern.is_empty() {
            return Err(ScanError::config("search pattern cannot be empty"));
        }

        let mut tokens = Vec::with_capacity(pattern.len());
        for ch in pattern.chars() {
            match ch {
                '_' => tokens.push(Token::Wildcard),
                'a'..='z' | '0'..='9' | '-' => tokens.push(Token::Literal(ch)),
                other => {
                    return Err(ScanError::invalid_domain(
                        pattern,
                        format!("invalid character '{}' in pattern", other),
                    ));
                }
            }
        }

        Ok(Self { tokens })
    }

    /// Number of wildcard positions in the pattern.
    pub fn wildcard_count(&self) -> usize {
        self.tokens
            .iter()
            .filter(|t| matches!(t, Token::Wildcard))
            .count()
    }

    /// Total pattern length; every generated name has exactly this length.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when the pattern has no tokens (cannot happen after `parse`).
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// An ordered set of substitution characters for wildcard positions.
/// Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterSet {
    chars: Vec<char>,
}

impl CharacterSet {
    /// Alphabetic range: a-z.
    pub fn alpha() -> Self {
        Self {
            chars: ('a'..='z').collect(),
        }
    }

    /// Alphanumeric range: a-z, 0-9.
    pub fn alphanumeric() -> Self {
        let mut chars: Vec<char> = ('a'..='z').collect();
        chars.extend('0'..='9');
        Self { chars }
    }

    /// Full domain-name range: a-z, 0-9, hyphen.
    pub fn all() -> Self {
        let mut set = Self::alphanumeric();
        set.chars.push('-');
        set
    }

    /// A caller-supplied character range (e.g. "abc123").
    ///
    /// Duplicates are dropped, first occurrence wins, order is preserved.
    /// Only domain-name characters are accepted.
    pub fn custom(range: &str) -> Result<Self, ScanError> {
        let mut chars = Vec::new();
        for ch in range.chars() {
            match ch {
                'a'..='z' | '0'..='9' | '-' => {
                    if !chars.contains(&ch) {
                        chars.push(ch);
                    }
                }
                other => {
                    return Err(ScanError::config(format!(
                        "invalid character '{}' in custom range",
                        other
                    )));
                }
            }
        }

        if chars.is_empty() {
            return Err(ScanError::config("character set cannot be empty"));
        }

        Ok(Self { chars })
    }

    /// Number of characters in the set.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True when the set holds no characters.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The characters in substitution order.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }
}

/// A concrete name + TLD pair ready for lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CandidateDomain {
    /// The concrete base name (e.g. "ab")
    pub name: String,

    /// The top-level domain (e.g. "com")
    pub tld: String,
}

impl CandidateDomain {
    /// The fully qualified domain name (e.g. "ab.com").
    pub fn fqdn(&self) -> String {
        format!("{}.{}", self.name, self.tld)
    }
}

/// Upper bound on the number of names a single pattern may expand to.
///
/// Each name costs an allocation and, downstream, a rate-limited WHOIS
/// query; a space past this size cannot realistically be scanned.
pub const MAX_EXPANSION: usize = 1_000_000;

/// How many names a pattern will produce over a given character set.
///
/// For k wildcard positions and a set of c characters this is `c^k`,
/// saturating instead of overflowing for absurdly large spaces.
pub fn estimate_pattern_count(pattern: &SearchPattern, charset: &CharacterSet) -> usize {
    let mut count: usize = 1;
    for token in &pattern.tokens {
        if matches!(token, Token::Wildcard) {
            count = count.saturating_mul(charset.len());
        }
    }
    count
}

/// Expand a pattern into every concrete name it matches.
///
/// Uses an odometer over the wildcard slots: the rightmost wildcard advances
/// fastest, so the leftmost varies slowest and output order is lexicographic
/// over substitution choices. A pattern with zero wildcards yields exactly
/// its literal text.
///
/// Spaces larger than [`MAX_EXPANSION`] are rejected before any allocation.
pub fn expand_pattern(
    pattern: &SearchPattern,
    charset: &CharacterSet,
) -> Result<Vec<String>, ScanError> {
    // The saturating estimate keeps c^k from overflowing; anything past
    // the bound is rejected here rather than truncated or aborted on
    // allocation.
    let total = estimate_pattern_count(pattern, charset);
    if total > MAX_EXPANSION {
        return Err(ScanError::config(format!(
            "pattern expands to more than {} names; add literal characters or shrink the character set",
            MAX_EXPANSION
        )));
    }

    let options: Vec<&[char]> = pattern
        .tokens
        .iter()
        .map(|t| match t {
            Token::Literal(c) => std::slice::from_ref(c),
            Token::Wildcard => charset.chars(),
        })
        .collect();

    let mut results = Vec::with_capacity(total);
    let mut counters = vec![0usize; options.len()];

    for _ in 0..total {
        let name: String = counters
            .iter()
            .enumerate()
            .map(|(i, &c)| options[i][c])
            .collect();
        results.push(name);

        // Advance odometer, rightmost slot first
        for i in (0..counters.len()).rev() {
            counters[i] += 1;
            if counters[i] < options[i].len() {
                break;
            }
            counters[i] = 0;
        }
    }

    Ok(results)
}

/// Expand a list of raw pattern strings into base names.
///
/// Strings without wildcards pass through as literal names; strings with
/// `_` positions are expanded over the character set. Order follows the
/// input list, then substitution order within each pattern.
pub fn expand_patterns(
    patterns: &[String],
    charset: &CharacterSet,
) -> Result<Vec<String>, ScanError> {
    if patterns.is_empty() {
        return Err(ScanError::config("no search patterns or names given"));
    }

    let mut names = Vec::new();
    for raw in patterns {
        let pattern = SearchPattern::parse(raw)?;
        names.extend(expand_pattern(&pattern, charset)?);
    }
    Ok(names)
}

/// Cross a list of base names with a list of TLDs.
///
/// Name-major order: all TLDs for the first name, then all TLDs for the
/// second, and so on. For m names and n TLDs the output holds exactly
/// `m*n` candidates with no duplicate (name, tld) pair for distinct inputs.
pub fn generate_domains(names: &[String], tlds: &[String]) -> Vec<CandidateDomain> {
    let mut candidates = Vec::with_capacity(names.len() * tlds.len());
    for name in names {
        for tld in tlds {
            candidates.push(CandidateDomain {
                name: name.clone(),
                tld: tld.clone(),
            });
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // ── Pattern parsing ─────────────────────────────────────────────

    #[test]
    fn test_parse_literal_only() {
        let pattern = SearchPattern::parse("abc").unwrap();
        assert_eq!(pattern.wildcard_count(), 0);
        assert_eq!(pattern.len(), 3);
    }

    #[test]
    fn test_parse_with_wildcards() {
        let pattern = SearchPattern::parse("a__b").unwrap();
        assert_eq!(pattern.wildcard_count(), 2);
        assert_eq!(pattern.len(), 4);
    }

    #[test]
    fn test_parse_empty_pattern_error() {
        assert!(SearchPattern::parse("").is_err());
    }

    #[test]
    fn test_parse_invalid_character_error() {
        assert!(SearchPattern::parse("ab!c").is_err());
        assert!(SearchPattern::parse("ab c").is_err());
        assert!(SearchPattern::parse("AB").is_err()); // uppercase rejected
    }

    // ── Character sets ──────────────────────────────────────────────

    #[test]
    fn test_builtin_charsets() {
        assert_eq!(CharacterSet::alpha().len(), 26);
        assert_eq!(CharacterSet::alphanumeric().len(), 36);
        assert_eq!(CharacterSet::all().len(), 37);
    }

    #[test]
    fn test_custom_charset_dedup_preserves_order() {
        let set = CharacterSet::custom("abca1").unwrap();
        assert_eq!(set.chars(), &['a', 'b', 'c', '1']);
    }

    #[test]
    fn test_custom_charset_rejects_invalid() {
        assert!(CharacterSet::custom("ab!").is_err());
        assert!(CharacterSet::custom("").is_err());
    }

    // ── Expansion ───────────────────────────────────────────────────

    #[test]
    fn test_expand_zero_wildcards_yields_literal() {
        let pattern = SearchPattern::parse("abc").unwrap();
        let names = expand_pattern(&pattern, &CharacterSet::alpha()).unwrap();
        assert_eq!(names, vec!["abc".to_string()]);
    }

    #[test]
    fn test_expand_single_wildcard() {
        let pattern = SearchPattern::parse("a_b").unwrap();
        let charset = CharacterSet::custom("12").unwrap();
        let names = expand_pattern(&pattern, &charset).unwrap();
        assert_eq!(names, vec!["a1b".to_string(), "a2b".to_string()]);
    }

    #[test]
    fn test_expand_count_is_c_pow_k() {
        // k=2 wildcards over c=3 chars → exactly 9 names, all distinct,
        // all of pattern length
        let pattern = SearchPattern::parse("x__").unwrap();
        let charset = CharacterSet::custom("abc").unwrap();
        let names = expand_pattern(&pattern, &charset).unwrap();

        assert_eq!(names.len(), 9);
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), 9);
        assert!(names.iter().all(|n| n.len() == pattern.len()));
    }

    #[test]
    fn test_expand_leftmost_wildcard_varies_slowest() {
        let pattern = SearchPattern::parse("__").unwrap();
        let charset = CharacterSet::custom("ab").unwrap();
        let names = expand_pattern(&pattern, &charset).unwrap();
        assert_eq!(names, vec!["aa", "ab", "ba", "bb"]);
    }

    #[test]
    fn test_expand_deterministic() {
        let pattern = SearchPattern::parse("s_t_").unwrap();
        let charset = CharacterSet::alphanumeric();
        let first = expand_pattern(&pattern, &charset).unwrap();
        let second = expand_pattern(&pattern, &charset).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_expand_oversized_space_rejected_without_overflow() {
        // 14 wildcards over 37 characters is past usize::MAX; the count
        // must saturate and the expansion must fail cleanly, not wrap or
        // panic.
        let pattern = SearchPattern::parse("______________").unwrap();
        let charset = CharacterSet::all();
        assert_eq!(pattern.wildcard_count(), 14);
        let result = expand_pattern(&pattern, &charset);
        assert!(matches!(result, Err(ScanError::Config { .. })));
    }

    #[test]
    fn test_expand_bound_enforced_for_representable_spaces() {
        // 26^5 is representable but past MAX_EXPANSION; 26^4 is under it
        let charset = CharacterSet::alpha();
        let over = SearchPattern::parse("_____").unwrap();
        assert!(matches!(
            expand_pattern(&over, &charset),
            Err(ScanError::Config { .. })
        ));

        let under = SearchPattern::parse("____").unwrap();
        let names = expand_pattern(&under, &charset).unwrap();
        assert_eq!(names.len(), 26 * 26 * 26 * 26);
    }

    #[test]
    fn test_expand_patterns_propagates_bound_error() {
        let charset = CharacterSet::all();
        let result = expand_patterns(&["______________".to_string()], &charset);
        assert!(matches!(result, Err(ScanError::Config { .. })));
    }

    #[test]
    fn test_expand_patterns_mixes_literals_and_wildcards() {
        let charset = CharacterSet::custom("12").unwrap();
        let names = expand_patterns(
            &["ab".to_string(), "c_".to_string()],
            &charset,
        )
        .unwrap();
        assert_eq!(names, vec!["ab", "c1", "c2"]);
    }

    #[test]
    fn test_expand_patterns_empty_input_error() {
        let result = expand_patterns(&[], &CharacterSet::alpha());
        assert!(matches!(result, Err(ScanError::Config { .. })));
    }

    // ── Estimates ───────────────────────────────────────────────────

    #[test]
    fn test_estimate_counts() {
        let charset = CharacterSet::alpha();
        let literal = SearchPattern::parse("abc").unwrap();
        assert_eq!(estimate_pattern_count(&literal, &charset), 1);

        let two = SearchPattern::parse("a__").unwrap();
        assert_eq!(estimate_pattern_count(&two, &charset), 26 * 26);
    }

    #[test]
    fn test_estimate_saturates() {
        let pattern = SearchPattern::parse("________________").unwrap();
        let charset = CharacterSet::all();
        // 37^16 overflows usize on 32-bit targets; must not panic
        let _ = estimate_pattern_count(&pattern, &charset);
    }

    // ── Cartesian product with TLDs ─────────────────────────────────

    #[test]
    fn test_generate_domains_full_product() {
        let names = vec!["ab".to_string(), "cd".to_string()];
        let tlds = vec!["com".to_string(), "net".to_string()];
        let candidates = generate_domains(&names, &tlds);

        assert_eq!(candidates.len(), 4);
        let fqdns: Vec<String> = candidates.iter().map(|c| c.fqdn()).collect();
        assert_eq!(fqdns, vec!["ab.com", "ab.net", "cd.com", "cd.net"]);

        // Full Cartesian product, no omissions or repeats
        let pairs: HashSet<_> = candidates.iter().collect();
        assert_eq!(pairs.len(), 4);
    }

    #[test]
    fn test_generate_domains_name_major_order() {
        let names = vec!["x".to_string()];
        let tlds = vec!["com".to_string(), "org".to_string(), "net".to_string()];
        let candidates = generate_domains(&names, &tlds);
        let tld_order: Vec<&str> = candidates.iter().map(|c| c.tld.as_str()).collect();
        assert_eq!(tld_order, vec!["com", "org", "net"]);
    }

    #[test]
    fn test_generate_domains_deterministic() {
        let names = vec!["aa".to_string(), "bb".to_string()];
        let tlds = vec!["com".to_string(), "io".to_string()];
        assert_eq!(
            generate_domains(&names, &tlds),
            generate_domains(&names, &tlds)
        );
    }

    #[test]
    fn test_generate_domains_empty_inputs() {
        assert!(generate_domains(&[], &["com".to_string()]).is_empty());
        assert!(generate_domains(&["ab".to_string()], &[]).is_empty());
    }
}
