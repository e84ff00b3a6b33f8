use crate::view_model::{AppViewModel, CardView};
use crate::{describe_filters, page_heading, Article, FilterState};

pub type RequestGeneration = u64;
pub type BannerId = u64;

/// Which panel currently owns the content area.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Loading,
    Populated(Vec<Article>),
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBanner {
    pub id: BannerId,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    filters: FilterState,
    view_state: ViewState,
    heading: String,
    summary: String,
    article_count: usize,
    latest_generation: RequestGeneration,
    in_flight: Option<RequestGeneration>,
    error_banner: Option<ErrorBanner>,
    next_banner_id: BannerId,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_filters(FilterState::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_filters(filters: FilterState) -> Self {
        Self {
            heading: page_heading(&filters),
            summary: describe_filters(&filters),
            filters,
            view_state: ViewState::Loading,
            article_count: 0,
            latest_generation: 0,
            in_flight: None,
            error_banner: None,
            next_banner_id: 1,
            dirty: false,
        }
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view_state
    }

    /// Generation of the request whose response is still awaited, if any.
    pub fn in_flight(&self) -> Option<RequestGeneration> {
        self.in_flight
    }

    pub fn error_banner(&self) -> Option<&ErrorBanner> {
        self.error_banner.as_ref()
    }

    pub fn view(&self) -> AppViewModel {
        let (loading_visible, grid_visible, empty_visible) = match &self.view_state {
            ViewState::Loading => (true, false, false),
            ViewState::Populated(_) => (false, true, false),
            ViewState::Empty => (false, false, true),
        };
        let cards = match &self.view_state {
            ViewState::Populated(articles) => articles.iter().map(CardView::from_article).collect(),
            ViewState::Loading | ViewState::Empty => Vec::new(),
        };

        AppViewModel {
            loading_visible,
            grid_visible,
            empty_visible,
            cards,
            article_count: self.article_count,
            heading: self.heading.clone(),
            summary: self.summary.clone(),
            error_banner: self.error_banner.as_ref().map(|b| b.message.clone()),
        }
    }

    /// Returns whether a render is pending and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn filters_mut(&mut self) -> &mut FilterState {
        &mut self.filters
    }

    /// Enters Loading for a new request and returns its generation.
    pub(crate) fn begin_request(&mut self) -> RequestGeneration {
        self.latest_generation += 1;
        self.in_flight = Some(self.latest_generation);
        self.view_state = ViewState::Loading;
        self.error_banner = None;
        self.heading = page_heading(&self.filters);
        self.summary = describe_filters(&self.filters);
        self.dirty = true;
        self.latest_generation
    }

    /// True if `generation` is the most recently issued request.
    pub(crate) fn is_latest(&self, generation: RequestGeneration) -> bool {
        generation == self.latest_generation && self.in_flight == Some(generation)
    }

    pub(crate) fn show_articles(&mut self, articles: Vec<Article>) {
        self.in_flight = None;
        self.article_count = articles.len();
        self.view_state = if articles.is_empty() {
            ViewState::Empty
        } else {
            ViewState::Populated(articles)
        };
        self.dirty = true;
    }

    pub(crate) fn show_error(&mut self, message: impl Into<String>) -> BannerId {
        let id = self.next_banner_id;
        self.next_banner_id += 1;
        self.error_banner = Some(ErrorBanner {
            id,
            message: message.into(),
        });
        self.dirty = true;
        id
    }

    /// Hides the banner only if it is still the one the timer was set for.
    pub(crate) fn dismiss_banner(&mut self, banner_id: BannerId) {
        if self.error_banner.as_ref().map(|b| b.id) == Some(banner_id) {
            self.error_banner = None;
            self.dirty = true;
        }
    }
}
