//! Star-bordered comment boxes used as section delimiters in the output.
//!
//! ```text
//! // ****************
//! // * Start of a.h *
//! // ****************
//! ```

/// Prefix put in front of every emitted line so the box is a line comment.
pub const COMMENT_PREFIX: &str = "// ";

/// Returns the length, in characters, of the longest line. Zero when empty.
pub fn longest_line_length<S: AsRef<str>>(lines: &[S]) -> usize {
    lines
        .iter()
        .map(|line| line.as_ref().chars().count())
        .max()
        .unwrap_or(0)
}

/// `ch` repeated `count` times.
pub fn repeat(ch: char, count: usize) -> String {
    std::iter::repeat_n(ch, count).collect()
}

/// A comment line made of `width` stars.
pub fn border(width: usize) -> String {
    format!("{COMMENT_PREFIX}{}", repeat('*', width))
}

/// Wraps `text` in a comment box. Every content row is padded to the same
/// width, and every emitted line ends with `\n`.
pub fn boxed(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let longest = longest_line_length(&lines);
    let edge = border(longest + 4);

    let mut out = String::with_capacity((edge.len() + 1) * (lines.len() + 2));
    out.push_str(&edge);
    out.push('\n');

    for line in &lines {
        let padding = repeat(' ', longest - line.chars().count());
        out.push_str(&format!("{COMMENT_PREFIX}* {line}{padding} *\n"));
    }

    out.push_str(&edge);
    out.push('\n');
    out
}
