//! logtally-report: plain-text rendering of [`Metrics`].
//!
//! The layout is fixed: a banner, the headline counts, then one section per
//! non-empty frequency table with keys in ascending byte order. Output is
//! deterministic for a given [`Metrics`], so it can be snapshot-tested.

use std::io::{self, Write};

use logtally_core::metrics::{FrequencyTable, Metrics};

const BANNER: &str = "========== Log Analysis Report ==========";

/// Write the report for `metrics` to `out`.
pub fn render(metrics: &Metrics, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{BANNER}")?;
    writeln!(out, "Total entries: {}", metrics.total)?;
    writeln!(out, "Active users: {}", metrics.active_users())?;
    writeln!(out, "Errors: {}", metrics.errors)?;
    if let Some(rate) = metrics.error_rate() {
        writeln!(out, "Error rate: {rate:.2}%")?;
    }

    section(out, "By level", &metrics.by_level)?;
    section(out, "By action", &metrics.by_action)?;
    section(out, "By source", &metrics.by_source)?;
    Ok(())
}

/// Render the report into a `String`.
pub fn render_to_string(metrics: &Metrics) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = render(metrics, &mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}

fn section(out: &mut impl Write, title: &str, table: &FrequencyTable) -> io::Result<()> {
    if table.is_empty() {
        return Ok(());
    }
    writeln!(out)?;
    writeln!(out, "--- {title} ---")?;
    for (key, count) in table {
        writeln!(out, "  {key}: {count}")?;
    }
    Ok(())
}
