use crate::report::{REPORT_HEADER, ReportRow};

/// Renders report rows as CSV text, header first.
///
/// Output matches Python's `csv` module defaults: CRLF row endings and
/// minimal quoting, so downstream tooling that consumed the old reports sees
/// byte-identical framing.
#[must_use]
pub fn render_csv(rows: &[ReportRow]) -> String {
    let mut out = String::new();
    write_record(&mut out, &REPORT_HEADER);
    for row in rows {
        write_record(&mut out, &row.fields());
    }
    out
}

fn write_record(out: &mut String, fields: &[&str; 6]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        push_field(out, field);
    }
    out.push_str("\r\n");
}

/// Quotes a field only when it contains a delimiter, quote, or line break.
/// Embedded quotes are doubled.
fn push_field(out: &mut String, field: &str) {
    if field.contains(['"', ',', '\r', '\n']) {
        out.push('"');
        out.push_str(&field.replace('"', "\"\""));
        out.push('"');
    } else {
        out.push_str(field);
    }
}

#[cfg(test)]
#[path = "csv_tests.rs"]
mod tests;
