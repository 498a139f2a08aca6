use super::*;

#[test]
fn trailing_spaces_fail() {
    assert_eq!(
        TrailingWhitespaceCheck.check("foo   ").as_deref(),
        Some("trailing whitespace")
    );
}

#[test]
fn trailing_tab_fails() {
    assert!(TrailingWhitespaceCheck.check("foo\t").is_some());
}

#[test]
fn clean_line_passes() {
    assert_eq!(TrailingWhitespaceCheck.check("foo"), None);
    assert_eq!(TrailingWhitespaceCheck.check(""), None);
}

#[test]
fn carriage_return_is_not_whitespace() {
    assert_eq!(TrailingWhitespaceCheck.check("foo\r"), None);
}

#[test]
fn whitespace_only_line_fails() {
    assert!(TrailingWhitespaceCheck.check("\t").is_some());
}
