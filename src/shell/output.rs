//! Text output for the terminal front end

use std::io::{self, Write};

use crate::view::CategoryView;

const INDENT: &str = "    ";

/// Write a rendered listing as indented text
pub fn write_listing<W: Write>(out: &mut W, views: &[CategoryView]) -> io::Result<()> {
    if views.is_empty() {
        writeln!(out, "No matching entries")?;
        return Ok(());
    }

    for (i, category) in views.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "== {} ==", category.name)?;

        if category.entries.is_empty() {
            writeln!(out, "{}(no entries)", INDENT)?;
            continue;
        }

        for entry in &category.entries {
            writeln!(out, "{}", entry.title)?;
            for line in entry.preview.text.lines() {
                writeln!(out, "{}{}", INDENT, line)?;
            }
            if entry.preview.is_truncated() {
                writeln!(
                    out,
                    "{}... {} more lines (cheatsheet show \"{}\" \"{}\")",
                    INDENT, entry.preview.hidden_lines, category.name, entry.title
                )?;
            }
        }
    }

    Ok(())
}

/// Write a rendered listing as pretty JSON
pub fn write_json<W: Write>(out: &mut W, views: &[CategoryView]) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *out, views)?;
    writeln!(out)?;
    Ok(())
}
