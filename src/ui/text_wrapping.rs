//! Word wrapping for transcript text.
//!
//! The transcript is scrolled from the bottom, so the renderer must know
//! exactly how many rows it occupies. Ratatui's `Wrap` does not report where it
//! breaks lines, so message text is split into rows here and rendered without
//! wrapping. Every row returned fits in `width` columns.

use unicode_width::UnicodeWidthChar;

fn char_width(ch: char) -> usize {
    ch.width().unwrap_or(0)
}

fn str_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// Alternating runs of whitespace and non-whitespace.
fn segments(line: &str) -> impl Iterator<Item = &str> {
    let mut rest = line;
    std::iter::from_fn(move || {
        let first = rest.chars().next()?;
        let is_space = first.is_whitespace();
        let end = rest
            .char_indices()
            .find(|(_, ch)| ch.is_whitespace() != is_space)
            .map_or(rest.len(), |(idx, _)| idx);
        let (head, tail) = rest.split_at(end);
        rest = tail;
        Some(head)
    })
}

struct RowBuilder {
    width: usize,
    rows: Vec<String>,
    row: String,
    row_width: usize,
}

impl RowBuilder {
    fn new(width: usize) -> Self {
        Self {
            width: width.max(1),
            rows: Vec::new(),
            row: String::new(),
            row_width: 0,
        }
    }

    fn break_row(&mut self) {
        self.rows.push(std::mem::take(&mut self.row));
        self.row_width = 0;
    }

    fn push_char(&mut self, ch: char) {
        let width = char_width(ch);
        if self.row_width > 0 && self.row_width + width > self.width {
            self.break_row();
        }
        self.row.push(ch);
        self.row_width += width;
    }

    fn push_word(&mut self, spaces: &str, word: &str) {
        let spaces_width = str_width(spaces);
        let word_width = str_width(word);

        if self.row_width + spaces_width + word_width <= self.width {
            self.row.push_str(spaces);
            self.row.push_str(word);
            self.row_width += spaces_width + word_width;
            return;
        }

        // The separating whitespace is dropped at a soft break.
        if self.row_width > 0 {
            self.break_row();
        }
        if word_width <= self.width {
            self.row.push_str(word);
            self.row_width = word_width;
        } else {
            for ch in word.chars() {
                self.push_char(ch);
            }
        }
    }

    fn push_trailing(&mut self, spaces: &str) {
        for ch in spaces.chars() {
            let width = char_width(ch);
            if self.row_width + width > self.width {
                break;
            }
            self.row.push(ch);
            self.row_width += width;
        }
    }

    fn finish_line(&mut self) {
        self.break_row();
    }
}

/// Split `text` into rows no wider than `width` columns, breaking at
/// whitespace and splitting words longer than a full row.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut builder = RowBuilder::new(width);

    for line in text.lines() {
        let mut spaces = "";
        for segment in segments(line) {
            if segment.starts_with(char::is_whitespace) {
                spaces = segment;
            } else {
                builder.push_word(spaces, segment);
                spaces = "";
            }
        }
        builder.push_trailing(spaces);
        builder.finish_line();
    }

    builder.rows
}
