//! Code emission.
//!
//! Turns descriptor tables into four blocks of C++ source: style save,
//! style load, color save and color load. Each emitter is a single pass
//! over its table in row order; the sequencer joins the blocks behind
//! banner lines.

mod color;
mod sequencer;
mod style;

pub use color::{emit_color_load, emit_color_save};
pub use sequencer::{banner, generate, Generated, Section};
pub use style::{emit_style_load, emit_style_save};

/// Indentation added per nesting level.
const INDENT_UNIT: &str = "  ";

/// Options that affect the layout of generated code.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmitOptions {
    /// Spaces prepended to every generated line.
    pub indent: usize,
}

/// Line-oriented text buffer with block indentation.
#[derive(Debug, Clone, Default)]
pub struct CodeWriter {
    base: String,
    depth: usize,
    lines: Vec<String>,
}

impl CodeWriter {
    pub fn new(options: &EmitOptions) -> Self {
        Self {
            base: " ".repeat(options.indent),
            depth: 0,
            lines: Vec::new(),
        }
    }

    /// Append one line at the current depth.
    pub fn line(&mut self, text: impl AsRef<str>) {
        let text = text.as_ref();
        let mut out = String::with_capacity(self.base.len() + self.depth * 2 + text.len());
        out.push_str(&self.base);
        for _ in 0..self.depth {
            out.push_str(INDENT_UNIT);
        }
        out.push_str(text);
        self.lines.push(out);
    }

    /// Append a line and indent everything after it.
    pub fn open(&mut self, text: impl AsRef<str>) {
        self.line(text);
        self.depth += 1;
    }

    /// Dedent and append a closing line.
    pub fn close(&mut self, text: impl AsRef<str>) {
        self.depth = self.depth.saturating_sub(1);
        self.line(text);
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}
