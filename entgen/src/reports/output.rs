//! Where reports go.

use std::io::{self, Write};

/// Semantic output operations. Reports say *what* to show, an `Output`
/// decides how it looks.
pub trait Output {
    fn section(&mut self, name: &str);

    fn key_value(&mut self, key: &str, value: &str);

    fn list_item(&mut self, text: &str);

    /// A file or entry that was added.
    fn added_item(&mut self, text: &str);

    fn warning(&mut self, msg: &str);

    /// A labelled separator ahead of a block of text.
    fn divider(&mut self, label: &str);

    fn preformatted(&mut self, text: &str);

    fn newline(&mut self);
}

/// A report that can render itself to an output.
pub trait Report {
    fn render(&self, out: &mut dyn Output);
}

/// Plain text output, stdout for the CLI.
pub struct TerminalOutput<W: Write = io::Stdout> {
    out: W,
}

impl TerminalOutput {
    pub fn new() -> Self {
        Self::to(io::stdout())
    }
}

impl<W: Write> TerminalOutput<W> {
    pub fn to(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: std::fmt::Arguments<'_>) {
        let _ = writeln!(self.out, "{text}");
    }
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> Output for TerminalOutput<W> {
    fn section(&mut self, name: &str) {
        self.line(format_args!("{name}:"));
    }

    fn key_value(&mut self, key: &str, value: &str) {
        self.line(format_args!("{key}: {value}"));
    }

    fn list_item(&mut self, text: &str) {
        self.line(format_args!("  - {text}"));
    }

    fn added_item(&mut self, text: &str) {
        self.line(format_args!("  + {text}"));
    }

    fn warning(&mut self, msg: &str) {
        self.line(format_args!("warning: {msg}"));
    }

    fn divider(&mut self, label: &str) {
        self.line(format_args!("── {label} ──"));
    }

    fn preformatted(&mut self, text: &str) {
        self.line(format_args!("{text}"));
    }

    fn newline(&mut self) {
        self.line(format_args!(""));
    }
}

/// Render `report` to a string.
#[cfg(test)]
pub fn render_to_string(report: &dyn Report) -> String {
    let mut out = TerminalOutput::to(Vec::new());
    report.render(&mut out);
    String::from_utf8(out.into_inner()).unwrap()
}
