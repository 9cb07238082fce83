//! Block Splitter
//!
//! Splits category text into runs of non-blank lines.

/// A line counts as blank when it holds nothing but whitespace
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Split text into blocks of consecutive non-blank lines
///
/// Any number of blank lines separates two blocks. Lines end at `\n`,
/// `\r\n` or a lone `\r`. Lines inside a block are returned verbatim,
/// leading whitespace included.
pub fn split_blocks(text: &str) -> Vec<Vec<&str>> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines().flat_map(|line| line.split('\r')) {
        if is_blank(line) {
            if !current.is_empty() {
                blocks.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }

    if !current.is_empty() {
        blocks.push(current);
    }

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_two_blocks() {
        let blocks = split_blocks("a\nb\n\nc\n");

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], vec!["a", "b"]);
        assert_eq!(blocks[1], vec!["c"]);
    }

    #[test]
    fn test_multiple_blank_lines_are_one_separator() {
        let blocks = split_blocks("a\n\n\n   \n\t\nb");

        assert_eq!(blocks, vec![vec!["a"], vec!["b"]]);
    }

    #[test]
    fn test_leading_and_trailing_blanks_ignored() {
        let blocks = split_blocks("\n\n  \na\n\n\n");
        assert_eq!(blocks, vec![vec!["a"]]);
    }

    #[test]
    fn test_crlf_line_endings() {
        let blocks = split_blocks("a\r\nb\r\n\r\nc\r\n");

        assert_eq!(blocks, vec![vec!["a", "b"], vec!["c"]]);
    }

    #[test]
    fn test_lone_carriage_return_line_endings() {
        let blocks = split_blocks("a\rb\r\rc");

        assert_eq!(blocks, vec![vec!["a", "b"], vec!["c"]]);
    }

    #[test]
    fn test_indentation_preserved() {
        let blocks = split_blocks("title\n    indented body");
        assert_eq!(blocks[0][1], "    indented body");
    }

    #[test]
    fn test_empty_text() {
        assert!(split_blocks("").is_empty());
        assert!(split_blocks("\n \n\t\n").is_empty());
    }
}
