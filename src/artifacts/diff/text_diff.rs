use derive_new::new;

/// Classification of a [`TextChange`] span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeType {
    NoChange,
    Add,
    Delete,
}

/// A contiguous, typed substring of one side of a diff.
///
/// Offsets are zero-based character positions within the span's line,
/// half-open: `end_index - start_index` equals the character length of
/// `text`. A span never crosses a line boundary; a span whose text ends with
/// `'\n'` ends its line.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TextChange {
    pub text: String,
    pub change_type: ChangeType,
    pub line_number: usize,
    pub start_index: usize,
    pub end_index: usize,
}

/// The aligned, side-by-side result of diffing two documents.
///
/// Both input documents are echoed verbatim. `left_changes` covers the left
/// document exactly once in order and holds only `NoChange` and `Delete`
/// spans; `right_changes` covers the right document and holds only
/// `NoChange` and `Add` spans. The ordered `NoChange` texts are identical
/// between the two sides.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextDiff {
    pub left_file_contents: String,
    pub right_file_contents: String,
    pub left_changes: Vec<TextChange>,
    pub right_changes: Vec<TextChange>,
}
