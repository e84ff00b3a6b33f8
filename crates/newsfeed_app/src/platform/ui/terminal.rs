use std::io::{self, Write};

use newsfeed_logging::feed_warn;

use super::port::{PageModel, ViewCommand, ViewPort};

/// Display surface that prints the page as text after every batch.
pub struct TerminalView<W: Write> {
    model: PageModel,
    out: W,
}

impl TerminalView<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            model: PageModel::default(),
            out,
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    fn write_page(&mut self) -> io::Result<()> {
        let model = &self.model;
        writeln!(self.out)?;
        writeln!(self.out, "== {} ==", model.heading)?;
        writeln!(self.out, "{}", model.summary)?;
        if let Some(message) = &model.error_banner {
            writeln!(self.out, "! {message}")?;
        }
        if model.loading_visible {
            writeln!(self.out, "Loading...")?;
        } else if model.empty_visible {
            writeln!(self.out, "No articles found (0).")?;
        } else if model.grid_visible {
            writeln!(self.out, "{} articles", model.article_count)?;
            for (index, card) in model.cards.iter().enumerate() {
                writeln!(
                    self.out,
                    "{:>2}. [{}] {} ({}, {})",
                    index + 1,
                    card.category,
                    card.title,
                    card.source,
                    card.time_label
                )?;
                writeln!(self.out, "    {}", card.read_more_url)?;
            }
        }
        self.out.flush()
    }
}

impl<W: Write> ViewPort for TerminalView<W> {
    fn apply(&mut self, command: &ViewCommand) {
        self.model.apply(command);
    }

    fn flush(&mut self) {
        if let Err(err) = self.write_page() {
            feed_warn!("Failed to print page: {}", err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::ui::constants::Element;
    use crate::platform::ui::port::RenderedCard;

    #[test]
    fn prints_cards_and_banner() {
        let mut view = TerminalView::new(Vec::new());
        view.apply_all(&[
            ViewCommand::SetText {
                element: Element::NewsTitle,
                text: "Trending News".to_string(),
            },
            ViewCommand::SetPanelVisible {
                panel: Element::LoadingGrid,
                visible: false,
            },
            ViewCommand::SetPanelVisible {
                panel: Element::NewsGrid,
                visible: true,
            },
            ViewCommand::SetGrid(vec![RenderedCard {
                title: "Launch".to_string(),
                category: "Science".to_string(),
                source: "Wire".to_string(),
                time_label: "5h ago".to_string(),
                read_more_url: "https://news.example.com/launch".to_string(),
                html: String::new(),
            }]),
            ViewCommand::SetText {
                element: Element::ArticleCount,
                text: "1".to_string(),
            },
            ViewCommand::ShowErrorBanner("careful".to_string()),
        ]);

        let text = String::from_utf8(view.into_inner()).unwrap();
        assert!(text.contains("== Trending News =="));
        assert!(text.contains("! careful"));
        assert!(text.contains("1 articles"));
        assert!(text.contains(" 1. [Science] Launch (Wire, 5h ago)"));
        assert!(text.contains("https://news.example.com/launch"));
    }
}
