/// Splits a document into lines, keeping every terminator character as part
/// of its line so that concatenating the pieces reproduces the input exactly.
///
/// A line ends immediately after `'\n'`; a final line without a terminator is
/// kept as-is. `'\r'` is not a boundary on its own, so `"\r\n"` stays inside
/// the line it terminates.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// Splits sub-line text into maximal runs of non-whitespace characters and
/// maximal runs of whitespace characters.
///
/// Words and the spacing between them stay atomic during alignment, so an
/// edit never matches half a word against another word. Whitespace runs are
/// ordinary tokens: a spacing-only change is a real change.
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut in_whitespace = None;

    for (idx, ch) in text.char_indices() {
        let whitespace = ch.is_whitespace();
        match in_whitespace {
            Some(previous) if previous == whitespace => {}
            Some(_) => {
                tokens.push(&text[start..idx]);
                start = idx;
                in_whitespace = Some(whitespace);
            }
            None => in_whitespace = Some(whitespace),
        }
    }

    if start < text.len() {
        tokens.push(&text[start..]);
    }

    tokens
}
