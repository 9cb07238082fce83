//! Category Parser
//!
//! Turns category file text into ordered entries and back.
//! Pure string processing, no I/O.

pub mod block;
pub mod entry;

pub use block::{is_blank, split_blocks};
pub use entry::{Entry, serialize_entries};

/// Parse the text of one category file into its entries
///
/// Blocks are separated by blank lines. The first line of each block is
/// the entry title, the rest is the body. Entry order follows the file.
pub fn parse_category(text: &str) -> Vec<Entry> {
    split_blocks(text)
        .iter()
        .filter_map(|lines| Entry::from_block(lines))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_git_sheet() {
        let text = "git status\nShow working tree status.\n\ngit commit -m \"msg\"\nCreate a commit with the given message.\n";
        let entries = parse_category(text);

        assert_eq!(
            entries,
            vec![
                Entry::new("git status", "Show working tree status."),
                Entry::new(
                    "git commit -m \"msg\"",
                    "Create a commit with the given message."
                ),
            ]
        );
    }

    #[test]
    fn test_parse_empty_file() {
        assert!(parse_category("").is_empty());
    }

    #[test]
    fn test_parse_title_only_blocks() {
        let entries = parse_category("pwd\n\nwhoami");

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], Entry::new("pwd", ""));
        assert_eq!(entries[1], Entry::new("whoami", ""));
    }

    #[test]
    fn test_round_trip() {
        let entries = vec![
            Entry::new("docker ps", "List running containers.\nUse -a for all."),
            Entry::new("docker images", ""),
            Entry::new("docker rm <id>", "Remove a container."),
        ];

        assert_eq!(parse_category(&serialize_entries(&entries)), entries);
    }

    #[test]
    fn test_blank_line_in_body_splits_entry() {
        // Known limitation of the blank-line delimiter
        let entries = vec![Entry::new("title", "first paragraph\n\nsecond paragraph")];
        let reparsed = parse_category(&serialize_entries(&entries));

        assert_eq!(reparsed.len(), 2);
        assert_eq!(reparsed[1].title, "second paragraph");
    }

    #[test]
    fn test_parse_is_deterministic() {
        let text = "a\nb\n\n\nc\nd\ne";
        assert_eq!(parse_category(text), parse_category(text));
    }
}
