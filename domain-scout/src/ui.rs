//! Display logic for the domain-scout CLI.
//!
//! This module renders streaming result lines, the per-TLD completion
//! summary, and JSON output. Colors come from the `console` crate and are
//! only applied in pretty mode so plain output stays pipe-friendly.

use console::style;
use domain_scout_lib::{LookupResult, ScanError, WorkerCompletion};
use serde_json::json;

/// Running tally of verdicts for the end-of-scan summary.
#[derive(Debug, Default)]
pub struct ScanStats {
    pub available: usize,
    pub taken: usize,
    pub undetermined: usize,
}

impl ScanStats {
    pub fn record(&mut self, result: &LookupResult) {
        if result.error.is_some() {
            self.undetermined += 1;
        } else if result.available {
            self.available += 1;
        } else {
            self.taken += 1;
        }
    }

    pub fn total(&self) -> usize {
        self.available + self.taken + self.undetermined
    }
}

/// Print one result as it arrives.
pub fn print_result(result: &LookupResult, pretty: bool) {
    if pretty {
        if let Some(error) = &result.error {
            println!(
                "{} {} {}",
                style("?").yellow().bold(),
                result.fqdn(),
                style(short_error(error)).dim()
            );
        } else if result.available {
            println!(
                "{} {} {}",
                style("✓").green().bold(),
                style(result.fqdn()).green(),
                style("AVAILABLE").green()
            );
        } else {
            println!("{} {} {}", style("✗").red(), result.fqdn(), style("taken").dim());
        }
    } else if let Some(error) = &result.error {
        println!("{} ERROR {}", result.fqdn(), short_error(error));
    } else if result.available {
        println!("{} AVAILABLE", result.fqdn());
    } else {
        println!("{} TAKEN", result.fqdn());
    }
}

/// Print the end-of-scan summary: verdict counts plus per-TLD timings.
pub fn print_summary(stats: &ScanStats, completions: &[WorkerCompletion], pretty: bool) {
    if pretty {
        println!();
        println!(
            "{} {} available, {} taken, {} undetermined ({} total)",
            style("Summary:").bold(),
            style(stats.available).green(),
            style(stats.taken).red(),
            style(stats.undetermined).yellow(),
            stats.total()
        );
        for completion in completions {
            println!(
                "  .{} finished in {:.1}s",
                completion.tld,
                completion.elapsed.as_secs_f64()
            );
        }
    } else {
        println!(
            "Summary: {} available, {} taken, {} undetermined ({} total)",
            stats.available,
            stats.taken,
            stats.undetermined,
            stats.total()
        );
        for completion in completions {
            println!(
                ".{} finished in {:.1}s",
                completion.tld,
                completion.elapsed.as_secs_f64()
            );
        }
    }
}

/// Serialize collected results and completions as a JSON document.
pub fn render_json(
    results: &[LookupResult],
    completions: &[WorkerCompletion],
) -> serde_json::Value {
    json!({
        "results": results
            .iter()
            .map(|r| {
                json!({
                    "domain": r.fqdn(),
                    "name": r.name,
                    "tld": r.tld,
                    "available": r.available,
                    "record": r.record,
                    "error": r.error.as_ref().map(|e| e.to_string()),
                })
            })
            .collect::<Vec<_>>(),
        "tlds": completions
            .iter()
            .map(|c| {
                json!({
                    "tld": c.tld,
                    "elapsed_seconds": c.elapsed.as_secs_f64(),
                })
            })
            .collect::<Vec<_>>(),
    })
}

/// Compact one-line rendering of a per-candidate error.
fn short_error(error: &ScanError) -> String {
    match error {
        ScanError::Transport { message, .. } => format!("transport: {}", message),
        ScanError::Parse { message } => format!("parse: {}", message),
        other => other.to_string(),
    }
}
