//! Indentation-managed DDL text builder.

/// Builds DDL output line by line, tracking the current indentation
/// depth.
///
/// Nested blocks are often rendered into a scratch writer first so the
/// caller can decide, after the fact, whether the block was worth
/// emitting at all; [`DdlWriter::append`] splices a scratch writer back
/// in. The scratch writer must have been created at the indentation depth
/// its content will land at.
#[derive(Debug, Default)]
pub struct DdlWriter {
    buf: String,
    indent: usize,
}

const INDENT: &str = "  ";

impl DdlWriter {
    /// Create a writer at depth zero.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_indent(indent: usize) -> Self {
        Self {
            buf: String::new(),
            indent,
        }
    }

    /// Current indentation depth.
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// Whether nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// The accumulated output.
    pub fn into_string(self) -> String {
        self.buf
    }

    /// Write one indented line.
    pub fn write_line(&mut self, line: &str) {
        for _ in 0..self.indent {
            self.buf.push_str(INDENT);
        }
        self.buf.push_str(line);
        self.buf.push('\n');
    }

    /// Write a comment line.
    pub fn write_comment(&mut self, text: &str) {
        self.write_line(&format!("// {text}"));
    }

    /// Write a `Name = value` attribute line.
    pub fn write_attribute(&mut self, name: &str, text: &str) {
        self.write_line(&format!("{name} = {text}"));
    }

    /// Write the explicit clearing marker for a composite attribute.
    pub fn write_clear_marker(&mut self, name: &str) {
        self.write_line(&format!("{name} = null"));
    }

    /// Open an attribute block.
    pub fn begin_attributes(&mut self) {
        self.write_line("[");
        self.indent += 1;
    }

    /// Close an attribute block.
    pub fn end_attributes(&mut self) {
        self.indent -= 1;
        self.write_line("]");
    }

    /// Open a content block.
    pub fn begin_content(&mut self) {
        self.write_line("{");
        self.indent += 1;
    }

    /// Close a content block.
    pub fn end_content(&mut self) {
        self.indent -= 1;
        self.write_line("}");
    }

    /// Splice in a scratch writer rendered at the matching depth.
    pub(crate) fn append(&mut self, scratch: DdlWriter) {
        self.buf.push_str(&scratch.buf);
    }
}
