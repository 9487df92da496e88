#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use resume::core::History;
use resume::models::Position;

pub fn rsm() -> Command {
    let mut cmd = cargo_bin_cmd!("resume");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// The expected stdout of the built-in history for a given current year.
pub fn builtin_output(current_year: i32) -> String {
    format!(
        "2001-2003: Babylon Software\n\
         2003-2010: CS, Virtual-Reality Dpt\n\
         2010-2012: Diginext (CS Group);\n\
         2012-    : CS, Space Dpt\n\
         {} years of professional experience\n",
        current_year - 2001
    )
}

pub static ABC: [Position; 3] = [
    Position::new(2001, "A"),
    Position::new(2003, "B"),
    Position::new(2010, "C"),
];

pub fn abc_history() -> History {
    History::new(&ABC).expect("valid history")
}

/// Render into an in-memory buffer and return it as text.
pub fn render_to_string(report: &resume::core::Report) -> String {
    let mut buf = Vec::new();
    report.render(&mut buf).expect("render");
    String::from_utf8(buf).expect("utf8")
}
