//! Progressive display of a streamed reply.
use std::io::{self, Write};

use streamchat_core::error::ChatError;

/// Receives the partial responses of one turn.
///
/// Every `partial` call carries the whole reply so far and replaces whatever
/// was shown before.
pub trait Renderer {
    fn begin(&mut self) -> io::Result<()>;
    fn partial(&mut self, text: &str) -> io::Result<()>;
    fn finish(&mut self) -> io::Result<()>;
    /// Show `err` as the assistant's reply for the current turn.
    fn error(&mut self, err: &ChatError) -> io::Result<()>;
}

/// Writes replies to a terminal-like sink.
///
/// Partials only ever grow, so replacing the previous value amounts to
/// printing the newly appended suffix. Should a partial ever fail to extend
/// the previous one, the whole value is reprinted on a fresh line.
pub struct TerminalRenderer<W> {
    out: W,
    shown: String,
    prefix: &'static str,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            shown: String::new(),
            prefix: "assistant> ",
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn begin(&mut self) -> io::Result<()> {
        self.shown.clear();
        write!(self.out, "{}", self.prefix)?;
        self.out.flush()
    }

    fn partial(&mut self, text: &str) -> io::Result<()> {
        match text.strip_prefix(self.shown.as_str()) {
            Some(suffix) => write!(self.out, "{suffix}")?,
            None => write!(self.out, "\n{}{text}", self.prefix)?,
        }
        self.shown.clear();
        self.shown.push_str(text);
        self.out.flush()
    }

    fn finish(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }

    fn error(&mut self, err: &ChatError) -> io::Result<()> {
        if !self.shown.is_empty() {
            writeln!(self.out)?;
        }
        writeln!(self.out, "[error] {err}")?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn rendered(renderer: TerminalRenderer<Vec<u8>>) -> String {
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_prints_only_new_suffix() {
        let mut renderer = TerminalRenderer::new(Vec::new());

        renderer.begin().unwrap();
        for partial in ["Hel", "Hello", "Hello", "Hello!"] {
            renderer.partial(partial).unwrap();
        }
        renderer.finish().unwrap();

        assert_eq!(rendered(renderer), "assistant> Hello!\n");
    }

    #[test]
    fn test_non_extending_partial_is_reprinted() {
        let mut renderer = TerminalRenderer::new(Vec::new());

        renderer.begin().unwrap();
        renderer.partial("abc").unwrap();
        renderer.partial("xyz").unwrap();
        renderer.finish().unwrap();

        assert_eq!(rendered(renderer), "assistant> abc\nassistant> xyz\n");
    }

    #[test]
    fn test_error_after_partial_keeps_partial_visible() {
        let mut renderer = TerminalRenderer::new(Vec::new());

        renderer.begin().unwrap();
        renderer.partial("par").unwrap();
        renderer
            .error(&ChatError::remote_api(None, "connection reset"))
            .unwrap();

        assert_eq!(
            rendered(renderer),
            "assistant> par\n[error] remote API error: connection reset\n"
        );
    }

    #[test]
    fn test_error_without_partial() {
        let mut renderer = TerminalRenderer::new(Vec::new());

        renderer.begin().unwrap();
        renderer
            .error(&ChatError::remote_api(Some(500), "boom"))
            .unwrap();

        assert_eq!(
            rendered(renderer),
            "assistant> [error] remote API returned status 500: boom\n"
        );
    }

    #[test]
    fn test_begin_resets_between_turns() {
        let mut renderer = TerminalRenderer::new(Vec::new());

        renderer.begin().unwrap();
        renderer.partial("one").unwrap();
        renderer.finish().unwrap();
        renderer.begin().unwrap();
        renderer.partial("two").unwrap();
        renderer.finish().unwrap();

        assert_eq!(rendered(renderer), "assistant> one\nassistant> two\n");
    }
}
