use std::path::Path;

use super::*;

fn capture(f: impl FnOnce(&mut Vec<u8>)) -> String {
    let mut buf = Vec::new();
    f(&mut buf);
    String::from_utf8(buf).unwrap()
}

#[test]
fn read_failure_plain() {
    let output = ErrorOutput::with_colors(false);
    let text = capture(|w| output.write_read_failure(w, Path::new("missing.go")));
    assert_eq!(text, "line-guard: couldn't lint file: missing.go\n");
}

#[test]
fn read_failure_colored_keeps_path() {
    let output = ErrorOutput::with_colors(true);
    let text = capture(|w| output.write_read_failure(w, Path::new("missing.go")));
    assert!(text.starts_with("line-guard: "));
    assert!(text.contains("\x1b[31m"));
    assert!(text.trim_end().ends_with("missing.go"));
}

#[test]
fn fatal_plain() {
    let output = ErrorOutput::with_colors(false);
    let text = capture(|w| output.write_fatal(w, "Configuration error: bad"));
    assert_eq!(text, "line-guard: error: Configuration error: bad\n");
}

#[test]
fn never_mode_disables_colors() {
    let output = ErrorOutput::new(ColorMode::Never);
    let text = capture(|w| output.write_read_failure(w, Path::new("x")));
    assert!(!text.contains('\x1b'));
}
