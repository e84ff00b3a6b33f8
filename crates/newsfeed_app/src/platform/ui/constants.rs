/// Page elements the renderer addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    LoadingGrid,
    NewsGrid,
    NoResults,
    ArticleCount,
    ErrorMessage,
    NewsTitle,
    NewsSummary,
}

impl Element {
    /// DOM id of the element in the rendered page.
    pub fn id(self) -> &'static str {
        match self {
            Element::LoadingGrid => "loadingGrid",
            Element::NewsGrid => "newsGrid",
            Element::NoResults => "noResults",
            Element::ArticleCount => "articleCount",
            Element::ErrorMessage => "errorMessage",
            Element::NewsTitle => "newsTitle",
            Element::NewsSummary => "newsSummary",
        }
    }
}

pub const PAGE_FILENAME: &str = "index.html";
pub const NO_RESULTS_TEXT: &str = "No articles match these filters. Try widening the date range or clearing the keywords.";
