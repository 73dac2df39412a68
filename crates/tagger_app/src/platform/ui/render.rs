use std::io::{self, Write};

use tagger_core::{AppViewModel, Notice, Phase, Severity};

pub fn render<W: Write>(out: &mut W, view: &AppViewModel, show_listing: bool) -> io::Result<()> {
    writeln!(out, "{}", view.file_label)?;
    writeln!(out, "{}", view.stop_words_label)?;
    if let Some(notice) = &view.notice {
        writeln!(out, "{}", notice_line(notice))?;
    }
    if !show_listing {
        return Ok(());
    }
    if view.stale {
        writeln!(out, "(stop words changed; choose the text file again to refresh)")?;
    }
    if view.listing.is_empty() {
        if view.phase == Phase::TextLoaded {
            writeln!(out, "(no tags)")?;
        }
    } else {
        write!(out, "{}", view.listing)?;
    }
    Ok(())
}

fn notice_line(notice: &Notice) -> String {
    let tag = match notice.severity {
        Severity::Info => "info",
        Severity::Error => "error",
    };
    match &notice.detail {
        Some(detail) => format!("[{tag}] {} ({detail})", notice.text),
        None => format!("[{tag}] {}", notice.text),
    }
}
