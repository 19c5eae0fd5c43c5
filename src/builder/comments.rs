//! Comment stripping, the first pass over raw source text.

/// Removes `//`-to-end-of-line comments and `/* … */` block comments.
///
/// Characters outside comments are passed through untouched, so line structure is preserved except
/// where a block comment spans lines, in which case its interior newlines go with it.
/// A terminator on adjacent characters (`…*/`) closes a block comment; an unterminated block
/// comment swallows the rest of the text.
///
/// ```rust
/// # use reachcnf::builder::comments::strip_comments;
/// let stripped = strip_comments("wire a; // tail\nand /* inline */ g1(a, b, c);");
/// assert_eq!(stripped, "wire a; \nand  g1(a, b, c);");
/// ```
pub fn strip_comments(source: &str) -> String {
    let chars: Vec<char> = source.chars().collect();
    let mut out = String::with_capacity(source.len());

    let mut in_block = false;
    let mut i = 0;

    while i < chars.len() {
        if !in_block && chars[i] == '/' && chars.get(i + 1) == Some(&'/') {
            while i < chars.len() && chars[i] != '\n' {
                i += 1;
            }
            continue;
        }

        if !in_block && chars[i] == '/' && chars.get(i + 1) == Some(&'*') {
            in_block = true;
            i += 2;
            continue;
        }

        if in_block && chars[i] == '*' && chars.get(i + 1) == Some(&'/') {
            in_block = false;
            i += 2;
            continue;
        }

        if !in_block {
            out.push(chars[i]);
        }
        i += 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_comment_to_end_of_line() {
        assert_eq!(strip_comments("a // b\nc"), "a \nc");
    }

    #[test]
    fn block_comment_within_a_line() {
        assert_eq!(strip_comments("a /* b */ c"), "a  c");
    }

    #[test]
    fn block_comment_across_lines() {
        assert_eq!(strip_comments("a /* b\nc\nd */ e"), "a  e");
    }

    #[test]
    fn adjacent_terminator() {
        // The `*/` closing the block sits directly after the opening `/*`.
        assert_eq!(strip_comments("a /**/ b"), "a  b");
    }

    #[test]
    fn unterminated_block_swallows_the_rest() {
        assert_eq!(strip_comments("a /* b c"), "a ");
    }

    #[test]
    fn comment_markers_are_not_nested() {
        // A `//` inside a block comment is comment text, not a second comment.
        assert_eq!(strip_comments("a /* // */ b"), "a  b");
    }

    #[test]
    fn plain_text_untouched() {
        let text = "input a, b;\nwire w;\n";
        assert_eq!(strip_comments(text), text);
    }
}
