use super::*;

#[test]
fn exit_codes_are_distinct() {
    assert_ne!(EXIT_SUCCESS, EXIT_FAILURE);
    assert_ne!(EXIT_SUCCESS, EXIT_VIOLATIONS);
    assert_ne!(EXIT_FAILURE, EXIT_VIOLATIONS);
}

#[test]
fn violations_exit_code_is_two() {
    // CI pipelines key off this value to tell dirty trees from crashes.
    assert_eq!(EXIT_VIOLATIONS, 2);
    assert_eq!(EXIT_FAILURE, 1);
    assert_eq!(EXIT_SUCCESS, 0);
}
