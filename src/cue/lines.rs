use encoding_rs::WINDOWS_1252;
use std::io::BufRead;

/// Line source over a buffered reader that can hand back one line.
///
/// Nested block readers peek at a line to decide whether it belongs to them and
/// return it with [`LineReader::unread`] when it does not.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    pending: Option<String>,
    line_number: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: None,
            line_number: 0,
        }
    }

    /// Next line including its terminator, or `None` at end of stream.
    /// A last line without a trailing newline is still returned.
    pub fn next_line(&mut self) -> std::io::Result<Option<String>> {
        if let Some(line) = self.pending.take() {
            self.line_number += 1;
            return Ok(Some(line));
        }

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }

        self.line_number += 1;
        Ok(Some(decode_line(buf)))
    }

    pub fn unread(&mut self, line: String) {
        debug_assert!(self.pending.is_none(), "only one line can be pushed back");
        self.line_number = self.line_number.saturating_sub(1);
        self.pending = Some(line);
    }

    /// One-based number of the line last returned by [`LineReader::next_line`].
    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

/// UTF-8 when the bytes are valid, otherwise Windows-1252, which maps every byte.
fn decode_line(buf: Vec<u8>) -> String {
    match String::from_utf8(buf) {
        Ok(line) => line,
        Err(err) => {
            let (text, _) = WINDOWS_1252.decode_without_bom_handling(err.as_bytes());
            text.into_owned()
        }
    }
}
