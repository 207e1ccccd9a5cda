//! Cursor-based editing for prompt and editor fields.

/// An editable text value with a byte-offset cursor. Works for single- and
/// multi-line fields; the cursor always sits on a `char` boundary.
#[derive(Clone, Default)]
pub struct FieldValue {
    pub value: String,
    pub cursor: usize,
}

impl FieldValue {
    pub fn new(value: &str) -> Self {
        FieldValue {
            value: value.to_string(),
            cursor: value.len(),
        }
    }

    pub fn insert_char(&mut self, ch: char) {
        self.value.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let prev = prev_char(&self.value, self.cursor);
        self.value.drain(prev..self.cursor);
        self.cursor = prev;
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = prev_char(&self.value, self.cursor);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = next_char(&self.value, self.cursor);
        }
    }

    pub fn move_up(&mut self) {
        let (starts, line, col) = line_state(&self.value, self.cursor);
        if line == 0 {
            return;
        }
        self.cursor = index_at_col(&self.value, starts[line - 1], col);
    }

    pub fn move_down(&mut self) {
        let (starts, line, col) = line_state(&self.value, self.cursor);
        if line + 1 >= starts.len() {
            return;
        }
        self.cursor = index_at_col(&self.value, starts[line + 1], col);
    }

    /// Line index of the cursor, for scrolling the editor viewport.
    pub fn cursor_line(&self) -> usize {
        self.value[..self.cursor].matches('\n').count()
    }

    /// The text with a caret glyph spliced in at the cursor.
    pub fn with_caret(&self) -> String {
        let mut text = self.value.clone();
        text.insert_str(self.cursor, "▌");
        text
    }
}

fn prev_char(s: &str, idx: usize) -> usize {
    s[..idx]
        .char_indices()
        .next_back()
        .map(|(i, _)| i)
        .unwrap_or(0)
}

fn next_char(s: &str, idx: usize) -> usize {
    s[idx..]
        .chars()
        .next()
        .map(|c| idx + c.len_utf8())
        .unwrap_or(s.len())
}

/// Byte offsets of every line start, the cursor's line index, and the char
/// column within that line.
fn line_state(s: &str, cursor: usize) -> (Vec<usize>, usize, usize) {
    let mut starts = vec![0];
    for (i, b) in s.bytes().enumerate() {
        if b == b'\n' {
            starts.push(i + 1);
        }
    }
    let line = starts.iter().rposition(|&st| st <= cursor).unwrap_or(0);
    let col = s[starts[line]..cursor].chars().count();
    (starts, line, col)
}

/// Byte index of the given char column on the line starting at `line_start`,
/// clamped to the end of that line.
fn index_at_col(s: &str, line_start: usize, col: usize) -> usize {
    let line_end = s[line_start..]
        .find('\n')
        .map(|i| line_start + i)
        .unwrap_or(s.len());
    let mut idx = line_start;
    for (seen, c) in s[line_start..line_end].chars().enumerate() {
        if seen == col {
            break;
        }
        idx += c.len_utf8();
    }
    idx.min(line_end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_backspace_handle_multibyte_chars() {
        let mut field = FieldValue::new("héllo");
        assert_eq!(field.cursor, "héllo".len());
        field.backspace();
        field.backspace();
        field.backspace();
        field.backspace();
        assert_eq!(field.value, "h");
        field.insert_char('é');
        assert_eq!(field.value, "hé");
        assert_eq!(field.cursor, "hé".len());
    }

    #[test]
    fn left_and_right_stop_at_the_ends() {
        let mut field = FieldValue::new("ab");
        field.move_right();
        assert_eq!(field.cursor, 2);
        field.move_left();
        field.move_left();
        field.move_left();
        assert_eq!(field.cursor, 0);
    }

    #[test]
    fn vertical_moves_keep_the_column_where_possible() {
        let mut field = FieldValue::new("alpha\nbe\ngamma");
        // Cursor at end of "gamma" (col 5); moving up clamps to "be".
        field.move_up();
        assert_eq!(&field.value[field.cursor..field.cursor + 1], "\n");
        field.move_up();
        // Back on "alpha", col restored from the clamped position.
        assert_eq!(field.cursor_line(), 0);
        field.move_down();
        assert_eq!(field.cursor_line(), 1);
    }

    #[test]
    fn caret_is_spliced_at_the_cursor() {
        let mut field = FieldValue::new("ab");
        field.move_left();
        assert_eq!(field.with_caret(), "a▌b");
    }

    #[test]
    fn cursor_line_counts_newlines_before_the_cursor() {
        let field = FieldValue::new("one\ntwo\nthree");
        assert_eq!(field.cursor_line(), 2);
    }
}
