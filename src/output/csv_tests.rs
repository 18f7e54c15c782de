use super::*;

fn row(relpath: &str, detail: &str) -> ReportRow {
    ReportRow {
        section: "violation",
        relpath: relpath.to_string(),
        metric: "forbidden_import".to_string(),
        value: "1".to_string(),
        detail: detail.to_string(),
        line: "3".to_string(),
    }
}

#[test]
fn header_comes_first_with_crlf() {
    let csv = render_csv(&[]);
    assert_eq!(csv, "section,relpath,metric,value,detail,line\r\n");
}

#[test]
fn plain_fields_are_not_quoted() {
    let csv = render_csv(&[row("core/a.py", "no punctuation here")]);
    let mut lines = csv.split("\r\n");
    lines.next();
    assert_eq!(
        lines.next(),
        Some("violation,core/a.py,forbidden_import,1,no punctuation here,3")
    );
}

#[test]
fn comma_in_field_forces_quoting() {
    let csv = render_csv(&[row("core/a.py", "one, two")]);
    assert!(csv.contains("\"one, two\""));
}

#[test]
fn embedded_quotes_are_doubled() {
    let csv = render_csv(&[row("core/a.py", "say \"hi\"")]);
    assert!(csv.contains("\"say \"\"hi\"\"\""));
}

#[test]
fn newline_in_field_forces_quoting() {
    let csv = render_csv(&[row("core/a.py", "first\nsecond")]);
    assert!(csv.contains("\"first\nsecond\""));
}

#[test]
fn every_row_ends_with_crlf() {
    let csv = render_csv(&[row("a.py", "x"), row("b.py", "y")]);
    assert!(csv.ends_with("\r\n"));
    assert_eq!(csv.matches("\r\n").count(), 3);
}

#[test]
fn rendering_is_deterministic() {
    let rows = vec![row("a.py", "x"), row("b.py", "y")];
    assert_eq!(render_csv(&rows), render_csv(&rows));
}
