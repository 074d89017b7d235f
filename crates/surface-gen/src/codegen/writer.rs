//! Indentation-aware output sink
//!
//! [`CodeWriter`] buffers generated source text in memory. Nothing reaches
//! the filesystem until the caller takes the finished buffer, so a module
//! whose generation fails halfway never leaves a partial file behind.

/// One level of indentation
pub const INDENT: &str = "    ";

/// Buffered writer for brace-scoped source text
#[derive(Debug, Default)]
pub struct CodeWriter {
    buffer: String,
    depth: usize,
    pending_separator: bool,
}

impl CodeWriter {
    /// Create an empty writer
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one line at the current indentation
    pub fn write_line(&mut self, line: impl AsRef<str>) {
        if self.pending_separator {
            self.buffer.push('\n');
            self.pending_separator = false;
        }

        let line = line.as_ref();
        if !line.is_empty() {
            for _ in 0..self.depth {
                self.buffer.push_str(INDENT);
            }
            self.buffer.push_str(line);
        }
        self.buffer.push('\n');
    }

    /// Request a blank line before the next line.
    ///
    /// Consecutive requests collapse into one, and a request directly
    /// before a closing brace or at the start of the buffer is dropped.
    pub fn write_separator(&mut self) {
        if !self.buffer.is_empty() {
            self.pending_separator = true;
        }
    }

    /// Write a documentation comment placeholder, optionally pre-filled
    pub fn write_doc_comment(&mut self, summary: Option<&str>) {
        match summary {
            Some(text) => {
                self.write_line("/// <summary>");
                self.write_line(format!("/// {}", text));
                self.write_line("/// </summary>");
            }
            None => self.write_line("/// <summary></summary>"),
        }
    }

    /// Write a `{ ... }` block around `body`, indenting its contents.
    ///
    /// The closing brace is written even when `body` fails.
    pub fn braces<T, E, F>(&mut self, body: F) -> Result<T, E>
    where
        F: FnOnce(&mut Self) -> Result<T, E>,
    {
        self.open_block();
        let result = body(self);
        self.close_block();
        result
    }

    /// Write `{` and indent what follows
    pub fn open_block(&mut self) {
        self.write_line("{");
        self.depth += 1;
    }

    /// Dedent and write `}`, dropping any pending separator
    pub fn close_block(&mut self) {
        self.pending_separator = false;
        self.depth = self.depth.saturating_sub(1);
        self.write_line("}");
    }

    /// Current nesting depth
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Text written so far
    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    /// Take the finished text
    pub fn into_string(self) -> String {
        self.buffer
    }
}
