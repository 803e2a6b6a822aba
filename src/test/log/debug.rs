use super::format_log_line;
use crate::log::LogLevel;

#[test]
fn formats_lines_with_timestamp_level_and_message() {
    let line = format_log_line(LogLevel::Debug, "hello");
    assert!(line.starts_with('['));
    assert!(line.contains("[DEBUG]"));
    assert!(line.ends_with("hello\n"));
}

#[test]
fn level_labels_match_their_variants() {
    assert!(format_log_line(LogLevel::Info, "x").contains("[INFO]"));
    assert!(format_log_line(LogLevel::Warning, "x").contains("[WARN]"));
    assert!(format_log_line(LogLevel::Error, "x").contains("[ERROR]"));
}
