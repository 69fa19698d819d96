use std::io::{self, BufRead};

/// One physical line that survived classification: its 1-based line number
/// and its tab-separated fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ClassifiedLine {
    pub line: usize,
    pub fields: Vec<String>,
}

/// Iterator over the classified lines of a reader.
///
/// Each physical line is stripped of everything from its first unescaped
/// `#` onward, trimmed of trailing whitespace, and split on tabs. Lines
/// that are empty after stripping produce no item at all, so they are
/// invisible to every downstream row counter. This stage only fails on
/// underlying I/O errors.
pub(crate) struct FieldLines<R> {
    reader: R,
    line: usize,
}

impl<R: BufRead> FieldLines<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, line: 0 }
    }
}

impl<R: BufRead> Iterator for FieldLines<R> {
    type Item = io::Result<ClassifiedLine>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let mut raw = String::new();
            match self.reader.read_line(&mut raw) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(e)),
            }
            self.line += 1;

            let content = strip_comment(&raw).trim_end();
            if content.is_empty() {
                continue;
            }
            let fields = content.split('\t').map(str::to_string).collect();
            return Some(Ok(ClassifiedLine {
                line: self.line,
                fields,
            }));
        }
    }
}

/// Cuts `line` at its first unescaped `#`. A `#` preceded by a backslash
/// is kept verbatim, backslash included, so escaped markers survive a
/// round trip untouched.
fn strip_comment(line: &str) -> &str {
    let bytes = line.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'#' && (i == 0 || bytes[i - 1] != b'\\') {
            return &line[..i];
        }
    }
    line
}
