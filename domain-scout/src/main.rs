//! Domain Scout CLI Application
//!
//! A command-line interface for scanning wildcard domain name patterns
//! against WHOIS. This is a thin layer over domain-scout-lib: it parses
//! flags, resolves configuration, and renders the result stream.

mod ui;

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;
use domain_scout_lib::{
    expand_patterns, generate_domains, is_valid_name, known_tlds, CharacterSet, ConfigManager,
    DefaultsConfig, FileConfig, ScanConfig, ScanEvent, Scanner,
};
use futures::StreamExt;
use std::process;
use std::time::Duration;
use tracing::debug;

const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Yellow.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// CLI arguments for domain-scout
#[derive(Parser, Debug)]
#[command(name = "domain-scout")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan wildcard domain name patterns for availability via WHOIS")]
#[command(
    long_about = "Scan candidate domain names for availability via WHOIS.\n\nPatterns may contain '_' wildcards, each substituted by every character\nin the selected character set (e.g. 'se_rch' with --alpha scans seabch,\nsebbch, ... through sezbch). One rate-limited worker runs per TLD."
)]
#[command(styles = STYLES)]
pub struct Args {
    /// Name patterns to scan ('_' is a wildcard position)
    #[arg(value_name = "PATTERNS", help_heading = "Candidate Selection")]
    pub patterns: Vec<String>,

    /// TLDs to scan (comma-separated or multiple -t flags)
    #[arg(short = 't', long = "tld", value_name = "TLD", value_delimiter = ',', action = clap::ArgAction::Append, help_heading = "Candidate Selection")]
    pub tlds: Option<Vec<String>>,

    /// List all supported TLDs and exit
    #[arg(long = "list-tlds", help_heading = "Candidate Selection")]
    pub list_tlds: bool,

    /// Use the alphabetic wildcard range (a-z)
    #[arg(long = "alpha", help_heading = "Wildcard Range")]
    pub alpha: bool,

    /// Use the alphanumeric wildcard range (a-z, 0-9)
    #[arg(long = "alphanum", help_heading = "Wildcard Range")]
    pub alphanum: bool,

    /// Use all domain characters (a-z, 0-9, -). This is the default
    #[arg(long = "all-chars", help_heading = "Wildcard Range")]
    pub all_chars: bool,

    /// Use a custom wildcard range (e.g. abc123)
    #[arg(long = "custom", value_name = "CHARS", help_heading = "Wildcard Range")]
    pub custom: Option<String>,

    /// Delay between lookups within one TLD worker, in milliseconds
    #[arg(long = "delay", value_name = "MS", help_heading = "Performance")]
    pub delay: Option<u64>,

    /// Preview generated candidates without scanning
    #[arg(long = "dry-run", help_heading = "Output Format")]
    pub dry_run: bool,

    /// Output results in JSON format
    #[arg(short = 'j', long = "json", help_heading = "Output Format")]
    pub json: bool,

    /// Colored, symbol-decorated output
    #[arg(short = 'p', long = "pretty", help_heading = "Output Format")]
    pub pretty: bool,

    /// Use specific config file instead of automatic discovery
    #[arg(long = "config", value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Verbose logging
    #[arg(short = 'v', long = "verbose", help_heading = "Configuration")]
    pub verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if args.verbose {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "domain_scout=debug,domain_scout_lib=debug".into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    if args.list_tlds {
        for tld in known_tlds() {
            println!("{}", tld);
        }
        return;
    }

    if let Err(e) = run_scan(args).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Resolve configuration, expand candidates, and run the scan.
async fn run_scan(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    if args.patterns.is_empty() {
        return Err("no search patterns given. Try: domain-scout 'gr_y' -t com".into());
    }

    let file_config = load_file_config(&args)?;
    let defaults = file_config.defaults.unwrap_or_default();

    let charset = resolve_charset(&args, &defaults)?;
    let tlds = normalize_tlds(
        args.tlds
            .clone()
            .or(defaults.tlds)
            .unwrap_or_else(|| vec!["com".to_string()]),
    );
    let delay_ms = args.delay.or(defaults.delay_ms).unwrap_or(500);
    let pretty = args.pretty || defaults.pretty.unwrap_or(false);

    // Expand patterns, then drop names that are not registrable (wildcard
    // substitution with '-' can produce leading/trailing hyphens)
    let expanded = expand_patterns(&args.patterns, &charset)?;
    let names: Vec<String> = expanded.into_iter().filter(|n| is_valid_name(n)).collect();
    if names.is_empty() {
        return Err("pattern expansion produced no valid candidate names".into());
    }
    debug!(candidates = names.len() * tlds.len(), "candidate space expanded");

    if args.dry_run {
        for candidate in generate_domains(&names, &tlds) {
            println!("{}", candidate.fqdn());
        }
        return Ok(());
    }

    let config = ScanConfig::default()
        .with_tlds(tlds)
        .with_delay(Duration::from_millis(delay_ms));
    let scanner = Scanner::with_config(config);

    let mut stream = scanner.scan_stream(&names)?;

    let mut stats = ui::ScanStats::default();
    let mut results = Vec::new();
    let mut completions = Vec::new();

    while let Some(event) = stream.next().await {
        match event {
            ScanEvent::Result(result) => {
                stats.record(&result);
                if args.json {
                    results.push(result);
                } else {
                    ui::print_result(&result, pretty);
                }
            }
            ScanEvent::Completed(completion) => completions.push(completion),
        }
    }

    if args.json {
        let doc = ui::render_json(&results, &completions);
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        ui::print_summary(&stats, &completions, pretty);
    }

    Ok(())
}

/// Load TOML configuration: explicit file if given, discovery otherwise.
fn load_file_config(args: &Args) -> Result<FileConfig, Box<dyn std::error::Error>> {
    let manager = ConfigManager::new(args.verbose);
    match &args.config {
        Some(path) => Ok(manager.load_file(path)?),
        None => Ok(manager.discover_and_load().unwrap_or_default()),
    }
}

/// Normalize a TLD list: trim, lowercase, drop empty entries.
///
/// Zone validation is case and whitespace insensitive, so without this a
/// TLD like `COM` or ` com` would pass validation but query and display
/// the unnormalized form.
fn normalize_tlds(tlds: Vec<String>) -> Vec<String> {
    tlds.into_iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

/// Resolve the wildcard character set from flags and config defaults.
///
/// Precedence mirrors the flag override rules: a custom range beats every
/// built-in choice, --alpha beats --alphanum, and --all-chars is the
/// fallback default.
fn resolve_charset(
    args: &Args,
    defaults: &DefaultsConfig,
) -> Result<CharacterSet, Box<dyn std::error::Error>> {
    if let Some(custom) = &args.custom {
        return Ok(CharacterSet::custom(custom)?);
    }
    if args.alpha {
        return Ok(CharacterSet::alpha());
    }
    if args.alphanum {
        return Ok(CharacterSet::alphanumeric());
    }
    if args.all_chars {
        return Ok(CharacterSet::all());
    }

    // No flag: fall back to the config file, then to the full range
    match defaults.charset.as_deref() {
        Some("alpha") => Ok(CharacterSet::alpha()),
        Some("alphanum") => Ok(CharacterSet::alphanumeric()),
        Some("all") | None => Ok(CharacterSet::all()),
        Some(custom) => Ok(CharacterSet::custom(custom)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_from(argv: &[&str]) -> Args {
        Args::parse_from(std::iter::once("domain-scout").chain(argv.iter().copied()))
    }

    #[test]
    fn test_charset_precedence_custom_wins() {
        let args = args_from(&["x_", "--custom", "ab", "--alpha", "--alphanum"]);
        let charset = resolve_charset(&args, &DefaultsConfig::default()).unwrap();
        assert_eq!(charset.len(), 2);
    }

    #[test]
    fn test_charset_alpha_beats_alphanum() {
        let args = args_from(&["x_", "--alpha", "--alphanum"]);
        let charset = resolve_charset(&args, &DefaultsConfig::default()).unwrap();
        assert_eq!(charset.len(), 26);
    }

    #[test]
    fn test_charset_defaults_to_all() {
        let args = args_from(&["x_"]);
        let charset = resolve_charset(&args, &DefaultsConfig::default()).unwrap();
        assert_eq!(charset.len(), 37);
    }

    #[test]
    fn test_charset_from_config_default() {
        let args = args_from(&["x_"]);
        let defaults = DefaultsConfig {
            charset: Some("alpha".to_string()),
            ..Default::default()
        };
        let charset = resolve_charset(&args, &defaults).unwrap();
        assert_eq!(charset.len(), 26);
    }

    #[test]
    fn test_tld_flag_parses_comma_separated() {
        let args = args_from(&["x_", "-t", "com,org,net"]);
        assert_eq!(args.tlds.unwrap().len(), 3);
    }

    #[test]
    fn test_tld_normalization() {
        let args = args_from(&["x_", "-t", " COM , Net"]);
        let tlds = normalize_tlds(args.tlds.unwrap());
        assert_eq!(tlds, vec!["com", "net"]);
    }

    #[test]
    fn test_tld_normalization_drops_empty_entries() {
        let tlds = normalize_tlds(vec![
            "com".to_string(),
            "  ".to_string(),
            String::new(),
        ]);
        assert_eq!(tlds, vec!["com"]);
    }
}
