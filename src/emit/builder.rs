//! Indent-aware source text builder.

/// Two-space indentation, matching the generated JSX/SFC house style.
pub const INDENT: &str = "  ";

/// Append-only builder for generated source text. Tracks the current indent
/// level so callers emit logical lines, not whitespace.
#[derive(Debug, Default)]
pub struct CodeBuilder {
    buf: String,
    level: usize,
}

impl CodeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line at the current indent level.
    pub fn line(&mut self, text: &str) {
        if text.is_empty() {
            self.buf.push('\n');
            return;
        }
        for _ in 0..self.level {
            self.buf.push_str(INDENT);
        }
        self.buf.push_str(text);
        self.buf.push('\n');
    }

    /// Append a blank line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Append pre-formatted lines, re-indented to the current level.
    pub fn lines(&mut self, lines: &[String]) {
        for line in lines {
            self.line(line);
        }
    }

    pub fn indent(&mut self) {
        self.level += 1;
    }

    pub fn dedent(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    pub fn finish(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indents_nested_lines() {
        let mut b = CodeBuilder::new();
        b.line("export function Demo() {");
        b.indent();
        b.line("return null;");
        b.dedent();
        b.line("}");
        assert_eq!(b.finish(), "export function Demo() {\n  return null;\n}\n");
    }

    #[test]
    fn dedent_saturates_at_zero() {
        let mut b = CodeBuilder::new();
        b.dedent();
        b.line("top");
        assert_eq!(b.finish(), "top\n");
    }

    #[test]
    fn blank_lines_carry_no_indent() {
        let mut b = CodeBuilder::new();
        b.indent();
        b.line("a");
        b.blank();
        b.line("b");
        assert_eq!(b.finish(), "  a\n\n  b\n");
    }
}
