//! Terminal rendering of the core's markdown output.

use std::io::{self, Write};

use anyhow::{Context, Result};
use termimad::{crossterm::style::Color, MadSkin};

/// Renders markdown either styled through termimad or as plain text.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkGrey);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();

        if self.rich_enabled {
            for line in markdown.lines() {
                if line.starts_with('#') {
                    // Keep the hashes visible; they separate trips, days and items.
                    writeln!(out, "\x1b[36m{line}\x1b[0m")
                } else {
                    writeln!(out, "{}", self.skin.inline(line))
                }
                .context("Failed to write to stdout")?;
            }
        } else {
            write!(out, "{markdown}").context("Failed to write to stdout")?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
