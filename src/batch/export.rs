use chrono::{DateTime, SecondsFormat, Utc};

use crate::validator::ValidationResult;

/// Serializes results for export. Header line `email,valid,reason`, then
/// one line per result: `email` and `reason` are always double-quote
/// wrapped with embedded quotes doubled, `valid` renders as `yes`/`no`.
/// Export only — the ingest side never re-reads this format.
pub fn serialize_results(results: &[ValidationResult]) -> String {
    let mut csv = String::from("email,valid,reason\n");
    for r in results {
        push_quoted(&mut csv, &r.email);
        csv.push(',');
        csv.push_str(if r.valid { "yes" } else { "no" });
        csv.push(',');
        push_quoted(&mut csv, &r.reason);
        csv.push('\n');
    }
    csv
}

fn push_quoted(out: &mut String, field: &str) {
    out.push('"');
    out.push_str(&field.replace('"', "\"\""));
    out.push('"');
}

/// Download name for an export: `<prefix>-<UTC timestamp>.csv`, with the
/// `:` and `.` of the ISO 8601 stamp replaced so the name stays
/// file-system safe.
pub fn export_filename(prefix: &str) -> String {
    export_filename_at(prefix, Utc::now())
}

pub fn export_filename_at(prefix: &str, at: DateTime<Utc>) -> String {
    let stamp = at
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("{prefix}-{stamp}.csv")
}
