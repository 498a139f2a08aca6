use super::*;

#[test]
fn check_names_round_trip_through_from_str() {
    for name in CheckName::ALL {
        assert_eq!(name.as_str().parse::<CheckName>(), Ok(name));
    }
}

#[test]
fn unknown_check_name_is_rejected() {
    let err = "tabs".parse::<CheckName>().unwrap_err();
    assert_eq!(err, "Unknown check: tabs");
}

#[test]
fn display_uses_kebab_case() {
    assert_eq!(CheckName::TrailingWhitespace.to_string(), "trailing-whitespace");
}

#[test]
fn default_limits() {
    let limits = Limits::default();
    assert_eq!(limits.max_line_length, 80);
    assert_eq!(limits.max_file_lines, 1000);
}
