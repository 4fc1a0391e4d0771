use std::io::Write;

use catalog_core::View;
use shared::protocol::{Card, GridContent, ViewUpdate};

const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Palette {
    title: &'static str,
    price: &'static str,
    muted: &'static str,
}

const LIGHT: Palette = Palette {
    title: "\x1b[1;34m",
    price: "\x1b[1;32m",
    muted: "\x1b[90m",
};

const DARK: Palette = Palette {
    title: "\x1b[1;97;40m",
    price: "\x1b[1;93;40m",
    muted: "\x1b[37;40m",
};

/// Writes the grid as one text block per card. Colour codes are only emitted
/// when `color` is set.
pub struct TerminalView<W: Write> {
    out: W,
    color: bool,
    dark: bool,
    loading: bool,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self {
            out,
            color,
            dark: false,
            loading: false,
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn palette(&self) -> Palette {
        if self.dark {
            DARK
        } else {
            LIGHT
        }
    }

    fn paint(&self, style: &str, text: &str) -> String {
        if self.color {
            format!("{style}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn write_update(&mut self, update: ViewUpdate) -> std::io::Result<()> {
        match update {
            ViewUpdate::Grid(grid) => self.write_grid(&grid)?,
            ViewUpdate::Loading(visible) => {
                if visible && !self.loading {
                    let line = self.paint(self.palette().muted, "Loading...");
                    writeln!(self.out, "{line}")?;
                }
                self.loading = visible;
            }
            ViewUpdate::CategoryOptions(categories) => {
                writeln!(self.out, "Categories: {}", categories.join(" | "))?;
            }
            ViewUpdate::DarkMode(dark) => self.dark = dark,
            ViewUpdate::ThemeLabel(label) => {
                let line = self.paint(self.palette().muted, &format!("[{label}]"));
                writeln!(self.out, "Theme toggle: {line}")?;
            }
        }
        self.out.flush()
    }

    fn write_grid(&mut self, grid: &GridContent) -> std::io::Result<()> {
        if let Some(text) = grid.placeholder_text() {
            return writeln!(self.out, "{text}");
        }

        let cards = grid.cards();
        writeln!(self.out, "--- {} products ---", cards.len())?;
        for card in cards {
            self.write_card(card)?;
        }
        Ok(())
    }

    fn write_card(&mut self, card: &Card) -> std::io::Result<()> {
        let palette = self.palette();
        let title = self.paint(palette.title, &card.title);
        let price = self.paint(palette.price, &card.price_label);
        let image = self.paint(palette.muted, &card.image);
        writeln!(self.out, "{title}  {price}")?;
        writeln!(self.out, "  {}", card.description)?;
        writeln!(self.out, "  image: {image}")?;
        writeln!(self.out, "  [{}]", card.action_label)?;
        writeln!(self.out)
    }
}

impl<W: Write> View for TerminalView<W> {
    fn apply(&mut self, update: ViewUpdate) {
        if let Err(err) = self.write_update(update) {
            tracing::warn!("failed to write to terminal: {err}");
        }
    }
}
