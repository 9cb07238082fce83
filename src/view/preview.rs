//! Inline previews of entry bodies

use serde::Serialize;

/// The leading lines of a body, as shown under an entry title
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Preview {
    pub text: String,
    /// Body lines left out of `text`
    pub hidden_lines: usize,
}

impl Preview {
    /// Keep at most `max_lines` lines of `body`
    pub fn of(body: &str, max_lines: usize) -> Self {
        let lines: Vec<&str> = body.lines().collect();
        let shown = lines.len().min(max_lines);

        Self {
            text: lines[..shown].join("\n"),
            hidden_lines: lines.len() - shown,
        }
    }

    /// Whether the full body needs a separate details view
    pub fn is_truncated(&self) -> bool {
        self.hidden_lines > 0
    }
}
