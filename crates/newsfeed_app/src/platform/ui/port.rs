//! View-binding abstraction between the renderer and a display surface.

use super::constants::Element;

/// A card ready for display: the HTML fragment plus the plain fields text
/// surfaces show instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedCard {
    pub title: String,
    pub category: String,
    pub source: String,
    pub time_label: String,
    pub read_more_url: String,
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    SetPanelVisible { panel: Element, visible: bool },
    SetGrid(Vec<RenderedCard>),
    SetText { element: Element, text: String },
    ShowErrorBanner(String),
    HideErrorBanner,
}

/// A display surface the renderer drives.
pub trait ViewPort {
    fn apply(&mut self, command: &ViewCommand);

    /// Called once after each batch of commands.
    fn flush(&mut self) {}

    fn apply_all(&mut self, commands: &[ViewCommand]) {
        for command in commands {
            self.apply(command);
        }
        self.flush();
    }
}

/// Retained state of the page, built up from view commands.
///
/// Panels start the way the static page does: loading skeleton visible, grid
/// and empty-state panel hidden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageModel {
    pub loading_visible: bool,
    pub grid_visible: bool,
    pub empty_visible: bool,
    pub cards: Vec<RenderedCard>,
    pub article_count: String,
    pub heading: String,
    pub summary: String,
    pub error_banner: Option<String>,
}

impl Default for PageModel {
    fn default() -> Self {
        Self {
            loading_visible: true,
            grid_visible: false,
            empty_visible: false,
            cards: Vec::new(),
            article_count: "0".to_string(),
            heading: String::new(),
            summary: String::new(),
            error_banner: None,
        }
    }
}

impl ViewPort for PageModel {
    fn apply(&mut self, command: &ViewCommand) {
        match command {
            ViewCommand::SetPanelVisible { panel, visible } => match panel {
                Element::LoadingGrid => self.loading_visible = *visible,
                Element::NewsGrid => self.grid_visible = *visible,
                Element::NoResults => self.empty_visible = *visible,
                _ => {}
            },
            ViewCommand::SetGrid(cards) => self.cards = cards.clone(),
            ViewCommand::SetText { element, text } => match element {
                Element::ArticleCount => self.article_count = text.clone(),
                Element::NewsTitle => self.heading = text.clone(),
                Element::NewsSummary => self.summary = text.clone(),
                _ => {}
            },
            ViewCommand::ShowErrorBanner(message) => self.error_banner = Some(message.clone()),
            ViewCommand::HideErrorBanner => self.error_banner = None,
        }
    }
}
