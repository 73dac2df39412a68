use std::fmt::Write as _;
use std::io::{self, Write};

use crate::table::TagTable;

/// Line terminator of the persisted format.
pub const LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// On-screen listing: one `word : count` line per tag.
pub fn render_display(table: &TagTable) -> String {
    let mut out = String::new();
    for (word, count) in table.entries() {
        let _ = writeln!(out, "{word} : {count}");
    }
    out
}

/// Persisted listing: one `word count` line per tag.
pub fn write_persisted<W: Write>(table: &TagTable, mut sink: W) -> io::Result<()> {
    for (word, count) in table.entries() {
        write!(sink, "{word} {count}{LINE_ENDING}")?;
    }
    sink.flush()
}
