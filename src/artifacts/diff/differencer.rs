use crate::artifacts::diff::alignment::{AlignOp, Alignment};
use crate::artifacts::diff::text_diff::{ChangeType, TextChange, TextDiff};
use crate::artifacts::diff::tokens::{split_lines, tokenize};
use derive_new::new;

/// Computes a side-by-side [`TextDiff`] between two documents.
///
/// The computation is pure and total: any pair of input strings produces a
/// valid diff, and identical inputs always produce bit-identical output.
/// Alignment happens in two passes with the same routine: first over whole
/// lines, then over word/whitespace tokens inside each changed region, with
/// a final character-level trim of shared prefixes and suffixes between a
/// deleted run and the added run replacing it.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct TextDifferencer<'d> {
    left: &'d str,
    right: &'d str,
}

impl<'d> TextDifferencer<'d> {
    pub fn text_diff(&self) -> TextDiff {
        let left_lines = split_lines(self.left);
        let right_lines = split_lines(self.right);

        let mut spans = SpanAccumulator::default();
        let mut deleted: Vec<&str> = Vec::new();
        let mut inserted: Vec<&str> = Vec::new();

        for op in Alignment::new(&left_lines, &right_lines).script() {
            match op {
                AlignOp::Match { value } => {
                    Self::flush_hunk(&mut spans, &mut deleted, &mut inserted);
                    spans.unchanged(value);
                }
                AlignOp::Delete { value } => deleted.push(value),
                AlignOp::Insert { value } => inserted.push(value),
            }
        }
        Self::flush_hunk(&mut spans, &mut deleted, &mut inserted);

        TextDiff {
            left_file_contents: self.left.to_string(),
            right_file_contents: self.right.to_string(),
            left_changes: spans.left,
            right_changes: spans.right,
        }
    }

    /// Emits one buffered hunk. A hunk containing both deleted and added
    /// lines is refined at token granularity; a one-sided hunk is emitted
    /// wholesale, line by line.
    fn flush_hunk(spans: &mut SpanAccumulator, deleted: &mut Vec<&str>, inserted: &mut Vec<&str>) {
        if deleted.is_empty() && inserted.is_empty() {
            return;
        }

        if inserted.is_empty() {
            for line in deleted.iter() {
                spans.deleted(line);
            }
        } else if deleted.is_empty() {
            for line in inserted.iter() {
                spans.added(line);
            }
        } else {
            Self::refine(spans, &deleted.concat(), &inserted.concat());
        }

        deleted.clear();
        inserted.clear();
    }

    /// Aligns the deleted and added text of a mixed hunk at token
    /// granularity, so a small edit inside a line leaves the rest of the
    /// line unchanged.
    fn refine(spans: &mut SpanAccumulator, left_text: &str, right_text: &str) {
        let left_tokens = tokenize(left_text);
        let right_tokens = tokenize(right_text);

        let mut deleted: Vec<&str> = Vec::new();
        let mut inserted: Vec<&str> = Vec::new();

        for op in Alignment::new(&left_tokens, &right_tokens).script() {
            match op {
                AlignOp::Match { value } => {
                    Self::flush_replacement(spans, &mut deleted, &mut inserted);
                    spans.unchanged(value);
                }
                AlignOp::Delete { value } => deleted.push(value),
                AlignOp::Insert { value } => inserted.push(value),
            }
        }
        Self::flush_replacement(spans, &mut deleted, &mut inserted);
    }

    /// Emits one run of replaced tokens. Tokens are word-sized, so a token
    /// replaced by a near-identical one (`"end."` by `"end!"`) is trimmed at
    /// character granularity first: the shared prefix and suffix stay
    /// unchanged and only the differing middle is marked.
    fn flush_replacement(
        spans: &mut SpanAccumulator,
        deleted: &mut Vec<&str>,
        inserted: &mut Vec<&str>,
    ) {
        if deleted.is_empty() && inserted.is_empty() {
            return;
        }

        let left_text = deleted.concat();
        let right_text = inserted.concat();
        let (prefix, left_middle, right_middle, suffix) =
            trim_common_affixes(&left_text, &right_text);

        if !prefix.is_empty() {
            spans.unchanged(prefix);
        }
        if !left_middle.is_empty() {
            spans.deleted(left_middle);
        }
        if !right_middle.is_empty() {
            spans.added(right_middle);
        }
        if !suffix.is_empty() {
            spans.unchanged(suffix);
        }

        deleted.clear();
        inserted.clear();
    }
}

/// Splits a replaced pair into shared prefix, differing middles, and shared
/// suffix, at character granularity. The prefix is taken first, so prefix
/// and suffix never overlap.
fn trim_common_affixes<'t>(left: &'t str, right: &'t str) -> (&'t str, &'t str, &'t str, &'t str) {
    let mut prefix = 0;
    for (l, r) in left.chars().zip(right.chars()) {
        if l != r {
            break;
        }
        prefix += l.len_utf8();
    }

    let left_rest = &left[prefix..];
    let right_rest = &right[prefix..];

    let mut suffix = 0;
    for (l, r) in left_rest.chars().rev().zip(right_rest.chars().rev()) {
        if l != r {
            break;
        }
        suffix += l.len_utf8();
    }

    (
        &left[..prefix],
        &left_rest[..left_rest.len() - suffix],
        &right_rest[..right_rest.len() - suffix],
        &left_rest[left_rest.len() - suffix..],
    )
}

/// Per-side position while emitting spans: zero-based line index and the
/// character column within that line.
#[derive(Debug, Default, Clone, Copy)]
struct Cursor {
    line: usize,
    column: usize,
}

/// Folds the refined operation stream into the two final span sequences,
/// keeping the offset bookkeeping in one place. Emitted text is first split
/// at line terminators so no span crosses a line, then adjacent same-type
/// segments on the same line are merged.
#[derive(Debug, Default)]
struct SpanAccumulator {
    left: Vec<TextChange>,
    right: Vec<TextChange>,
    left_cursor: Cursor,
    right_cursor: Cursor,
}

impl SpanAccumulator {
    fn unchanged(&mut self, text: &str) {
        Self::emit(&mut self.left, &mut self.left_cursor, text, ChangeType::NoChange);
        Self::emit(&mut self.right, &mut self.right_cursor, text, ChangeType::NoChange);
    }

    fn deleted(&mut self, text: &str) {
        Self::emit(&mut self.left, &mut self.left_cursor, text, ChangeType::Delete);
    }

    fn added(&mut self, text: &str) {
        Self::emit(&mut self.right, &mut self.right_cursor, text, ChangeType::Add);
    }

    fn emit(
        changes: &mut Vec<TextChange>,
        cursor: &mut Cursor,
        text: &str,
        change_type: ChangeType,
    ) {
        for segment in split_lines(text) {
            let length = segment.chars().count();

            match changes.last_mut() {
                Some(last)
                    if last.change_type == change_type && last.line_number == cursor.line =>
                {
                    last.text.push_str(segment);
                    last.end_index += length;
                }
                _ => changes.push(TextChange::new(
                    segment.to_string(),
                    change_type,
                    cursor.line,
                    cursor.column,
                    cursor.column + length,
                )),
            }

            cursor.column += length;
            if segment.ends_with('\n') {
                cursor.line += 1;
                cursor.column = 0;
            }
        }
    }
}
