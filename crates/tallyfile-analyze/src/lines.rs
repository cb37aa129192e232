//! Logical line reading.

use std::io::{self, BufRead};

/// Iterator over the logical lines of a reader.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`, so files written with Unix,
/// Windows or classic Mac line endings read the same. A final line without a
/// terminator is still yielded, while a trailing terminator does not produce
/// an extra empty line.
#[derive(Debug)]
pub struct LineReader<R> {
    reader: R,
    lossy: bool,
    buf: Vec<u8>,
    /// The previous line ended at `\r`; a `\n` right after it belongs to it.
    skip_lf: bool,
    done: bool,
}

impl<R: BufRead> LineReader<R> {
    /// Read lines as strict UTF-8; invalid data is reported as an error.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            lossy: false,
            buf: Vec::new(),
            skip_lf: false,
            done: false,
        }
    }

    /// Read lines replacing invalid UTF-8 with U+FFFD.
    pub fn lossy(reader: R) -> Self {
        Self {
            lossy: true,
            ..Self::new(reader)
        }
    }

    fn decode(&self, bytes: &[u8]) -> io::Result<String> {
        if self.lossy {
            return Ok(String::from_utf8_lossy(bytes).into_owned());
        }
        std::str::from_utf8(bytes)
            .map(str::to_owned)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        self.buf.clear();
        let mut read_any = false;
        loop {
            let available = match self.reader.fill_buf() {
                Ok(bytes) => bytes,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            };

            if available.is_empty() {
                if !read_any {
                    self.done = true;
                    return None;
                }
                break;
            }

            if self.skip_lf {
                self.skip_lf = false;
                if available[0] == b'\n' {
                    self.reader.consume(1);
                    continue;
                }
            }

            read_any = true;
            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    self.buf.extend_from_slice(&available[..end]);
                    self.skip_lf = available[end] == b'\r';
                    self.reader.consume(end + 1);
                    break;
                }
                None => {
                    let len = available.len();
                    self.buf.extend_from_slice(available);
                    self.reader.consume(len);
                }
            }
        }

        let line = self.decode(&self.buf);
        if line.is_err() {
            self.done = true;
        }
        Some(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read_all(input: &[u8]) -> Vec<String> {
        LineReader::new(Cursor::new(input.to_vec()))
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_strips_terminators() {
        assert_eq!(read_all(b"a\nb\r\nc"), vec!["a", "b", "c"]);
        assert_eq!(read_all(b"a\nb\n"), vec!["a", "b"]);
    }

    #[test]
    fn test_lone_carriage_return_ends_a_line() {
        assert_eq!(read_all(b"1\r2\r3\r"), vec!["1", "2", "3"]);
        assert_eq!(read_all(b"1\r\n2\r"), vec!["1", "2"]);
        assert_eq!(read_all(b"a\r\rb"), vec!["a", "", "b"]);
        assert_eq!(read_all(b"\r\n\r\n"), vec!["", ""]);
    }

    #[test]
    fn test_crlf_split_across_buffer_refills() {
        let reader = std::io::BufReader::with_capacity(2, Cursor::new(b"1\r\n2\r\n".to_vec()));
        let lines: Vec<String> = LineReader::new(reader)
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(lines, vec!["1", "2"]);
    }

    #[test]
    fn test_empty_input_has_no_lines() {
        assert!(read_all(b"").is_empty());
    }

    #[test]
    fn test_blank_lines_are_kept() {
        assert_eq!(read_all(b"\n\n1\n"), vec!["", "", "1"]);
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let mut lines = LineReader::new(Cursor::new(b"ok\n\xff\xfe\nlater\n".to_vec()));
        assert_eq!(lines.next().unwrap().unwrap(), "ok");

        let err = lines.next().unwrap().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert!(lines.next().is_none());
    }

    #[test]
    fn test_lossy_replaces_invalid_utf8() {
        let lines: Vec<String> = LineReader::lossy(Cursor::new(b"a\xffb\n".to_vec()))
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(lines, vec!["a\u{fffd}b"]);
    }
}
