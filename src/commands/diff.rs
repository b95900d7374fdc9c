use crate::artifacts::diff::text_diff::{ChangeType, TextChange, TextDiff};
use colored::Colorize;
use std::cell::RefCell;
use std::io::Write;

/// Renders a [`TextDiff`] as two aligned columns: the left document with
/// deletions in red, the right document with additions in green.
///
/// Rows are paired by line index; the shorter side is padded with blank
/// rows. The writer is injected so tests can capture the output.
pub struct SideBySide {
    writer: RefCell<Box<dyn std::io::Write>>,
}

#[derive(Debug, Default)]
struct Row {
    painted: String,
    width: usize,
}

impl SideBySide {
    pub fn new(writer: Box<dyn std::io::Write>) -> Self {
        SideBySide {
            writer: RefCell::new(writer),
        }
    }

    pub fn render(&self, text_diff: &TextDiff) -> anyhow::Result<()> {
        let left_rows = Self::rows(&text_diff.left_changes);
        let right_rows = Self::rows(&text_diff.right_changes);

        let width = left_rows.iter().map(|row| row.width).max().unwrap_or(0);
        let empty = Row::default();

        let mut writer = self.writer.borrow_mut();
        for index in 0..left_rows.len().max(right_rows.len()) {
            let left = left_rows.get(index).unwrap_or(&empty);
            let right = right_rows.get(index).unwrap_or(&empty);

            let row = format!(
                "{}{} │ {}",
                left.painted,
                " ".repeat(width - left.width),
                right.painted
            );
            writeln!(writer, "{}", row.trim_end())?;
        }
        writer.flush()?;

        Ok(())
    }

    /// Folds a span sequence into one renderable row per line, painting each
    /// span as it is appended. Line terminators are stripped for display.
    fn rows(changes: &[TextChange]) -> Vec<Row> {
        let mut rows: Vec<Row> = Vec::new();

        for span in changes {
            if span.line_number == rows.len() {
                rows.push(Row::default());
            }

            let text = span.text.strip_suffix('\n').unwrap_or(&span.text);
            let text = text.strip_suffix('\r').unwrap_or(text);

            if let Some(row) = rows.last_mut() {
                row.width += text.chars().count();
                row.painted.push_str(&Self::paint(text, span.change_type));
            }
        }

        rows
    }

    fn paint(text: &str, change_type: ChangeType) -> String {
        match change_type {
            ChangeType::NoChange => text.to_string(),
            ChangeType::Delete => text.red().to_string(),
            ChangeType::Add => text.green().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SideBySide;
    use crate::artifacts::diff::differencer::TextDifferencer;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::cell::RefCell;
    use std::io::Write;
    use std::rc::Rc;

    /// Writer that appends to a shared buffer, taking the place of stdout.
    #[derive(Clone, Default)]
    struct Capture(Rc<RefCell<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn rendered(left: &str, right: &str) -> String {
        colored::control::set_override(false);

        let capture = Capture::default();
        let text_diff = TextDifferencer::new(left, right).text_diff();
        SideBySide::new(Box::new(capture.clone()))
            .render(&text_diff)
            .expect("rendering to a buffer cannot fail");

        let bytes = capture.0.borrow().clone();
        String::from_utf8(bytes).expect("rendered output is UTF-8")
    }

    #[rstest]
    fn pads_left_column_to_the_widest_line() {
        let output = rendered("one\ntwo\n", "one\nthree\n");
        assert_eq!(output, "one │ one\ntwo │ three\n");
    }

    #[rstest]
    fn pairs_missing_rows_with_blanks() {
        let output = rendered("one\n", "one\ntwo\n");
        assert_eq!(output, "one │ one\n    │ two\n");
    }

    #[rstest]
    fn renders_nothing_for_empty_documents() {
        assert_eq!(rendered("", ""), "");
    }

    #[rstest]
    fn strips_line_terminators_from_rows() {
        let output = rendered("crlf\r\n", "crlf\r\n");
        assert_eq!(output, "crlf │ crlf\n");
    }
}
