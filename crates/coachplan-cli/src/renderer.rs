//! Terminal rendering module for rich markdown output
//!
//! This module provides terminal rendering capabilities using termimad
//! for rich markdown display with optional fallback to plain text.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{
    crossterm::{
        cursor::MoveTo,
        queue,
        style::Color,
        terminal::{Clear, ClearType},
    },
    MadSkin,
};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Green);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.code_block.set_bg(Color::AnsiValue(238));
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        self.write_lines(&mut out, markdown, "\n")?;
        out.flush()?;
        Ok(())
    }

    /// Redraw the whole screen with `markdown`.
    ///
    /// Lines end in `\r\n` so output stays aligned while the terminal is in
    /// raw mode.
    pub fn render_frame(&self, markdown: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        self.write_lines(&mut out, markdown, "\r\n")?;
        out.flush()?;
        Ok(())
    }

    fn write_lines(&self, out: &mut impl Write, markdown: &str, newline: &str) -> io::Result<()> {
        if !self.rich_enabled {
            for line in markdown.lines() {
                write!(out, "{line}{newline}")?;
            }
            return Ok(());
        }

        for line in markdown.lines() {
            // Headers keep their hash marks so the structure stays visible.
            if line.starts_with('#') {
                write!(out, "\x1b[32m{line}\x1b[0m{newline}")?;
            } else {
                write!(out, "{}{newline}", self.skin.inline(line))?;
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(renderer: &TerminalRenderer, markdown: &str, newline: &str) -> String {
        let mut buffer = Vec::new();
        renderer
            .write_lines(&mut buffer, markdown, newline)
            .expect("writing to a buffer succeeds");
        String::from_utf8(buffer).expect("utf-8 output")
    }

    #[test]
    fn test_plain_output_is_unchanged_markdown() {
        let renderer = TerminalRenderer::new(false);
        assert_eq!(
            written(&renderer, "# Title\n\n- **cue**\n", "\n"),
            "# Title\n\n- **cue**\n"
        );
    }

    #[test]
    fn test_raw_mode_line_endings() {
        let renderer = TerminalRenderer::new(false);
        assert_eq!(written(&renderer, "a\nb", "\r\n"), "a\r\nb\r\n");
    }

    #[test]
    fn test_rich_headers_are_colored() {
        let renderer = TerminalRenderer::new(true);
        let output = written(&renderer, "# Warm-up", "\n");
        assert!(output.starts_with("\x1b[32m# Warm-up"));
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }
}
