//! Terminal formatting for the conversion summary.

use crate::report::ConversionStats;

/// Format the end-of-run summary printed to stdout.
pub fn format_summary(stats: &ConversionStats) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Done. Extracted {} questions ({} train & {} dev)\n",
        stats.total, stats.train, stats.dev
    ));
    out.push_str(&format!("Max Context Length: {} tokens\n", stats.max_context_tokens));
    out.push_str(&format!("Contexts truncated: {}\n", stats.contexts_truncated));
    out.push_str(&format!(
        "Used Factoid questions: {} / {}\n",
        stats.factoid.used, stats.factoid.original
    ));
    out.push_str(&format!(
        "Used List questions: {} / {}",
        stats.list.used, stats.list.original
    ));

    out
}
