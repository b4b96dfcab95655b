//! Terminal rendering for markdown output
//!
//! Uses termimad for inline styling and falls back to the raw markdown when
//! color is disabled, which keeps the plain output stable for scripts.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Cyan);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkGrey);
        skin.inline_code.set_bg(Color::AnsiValue(236));

        Self { rich_enabled, skin }
    }

    /// Print `markdown` to stdout.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            for line in markdown.lines() {
                if line.starts_with('#') {
                    // Keep the hashes so day headings line up with plain mode
                    println!("\x1b[36m{line}\x1b[0m");
                } else if let Some(url) = Self::link_target(line) {
                    let label = &line[..line.len() - url.len()];
                    self.skin.print_inline(label);
                    println!("\x1b[4m{url}\x1b[0m");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }

    /// Trailing URL of a transit link line, printed raw so terminals can
    /// detect it. termimad would treat the underscores in it as emphasis.
    fn link_target(line: &str) -> Option<&str> {
        let start = line.find("https://")?;
        let url = &line[start..];
        (!url.contains(char::is_whitespace)).then_some(url)
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

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
        assert!(renderer.render("# Day 1\n").is_ok());
    }

    #[test]
    fn test_default_is_rich() {
        assert!(TerminalRenderer::default().rich_enabled);
    }

    #[test]
    fn test_link_target() {
        let line = "- 1. Museum → 2. Cafe: https://www.google.com/maps/dir/?api=1&travelmode=transit";
        assert_eq!(
            TerminalRenderer::link_target(line),
            Some("https://www.google.com/maps/dir/?api=1&travelmode=transit")
        );
        assert_eq!(TerminalRenderer::link_target("- ID: 4"), None);
        assert_eq!(
            TerminalRenderer::link_target("see https://example.com for more"),
            None
        );
    }
}
