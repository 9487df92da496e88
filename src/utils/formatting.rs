//! Formatting helpers for report lines.

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// End-year field: the year right-aligned, or blanks for "present".
pub fn end_label(end_year: Option<i32>, width: usize) -> String {
    match end_year {
        Some(y) => pad_left(&y.to_string(), width),
        None => " ".repeat(width),
    }
}

/// `"<start>-<end>: <name>"`
pub fn tenure_line(start_year: i32, end: &str, name: &str) -> String {
    format!("{}-{}: {}", start_year, end, name)
}
