use super::*;

#[test]
fn line_span_single_line() {
    let record = FunctionRecord {
        relpath: "a.py".to_string(),
        name: "noop".to_string(),
        start_line: 7,
        end_line: 7,
    };
    assert_eq!(record.line_span(), 1);
}

#[test]
fn line_span_is_inclusive() {
    let record = FunctionRecord {
        relpath: "a.py".to_string(),
        name: "long_one".to_string(),
        start_line: 10,
        end_line: 42,
    };
    assert_eq!(record.line_span(), 33);
}
