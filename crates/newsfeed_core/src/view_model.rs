use crate::Article;

/// Image shown when an article has none, or when its image fails to load.
pub const FALLBACK_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1504711434969-e33886168f5c?w=400&h=250&fit=crop";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub loading_visible: bool,
    pub grid_visible: bool,
    pub empty_visible: bool,
    pub cards: Vec<CardView>,
    /// Number of articles from the last completed request.
    pub article_count: usize,
    pub heading: String,
    pub summary: String,
    pub error_banner: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub category: String,
    pub source: String,
    /// Raw timestamp; the renderer turns it into a relative label.
    pub published_at: String,
    pub read_more_url: String,
}

impl CardView {
    pub(crate) fn from_article(article: &Article) -> Self {
        let image_url = if article.image_url.trim().is_empty() {
            FALLBACK_IMAGE_URL.to_string()
        } else {
            article.image_url.clone()
        };
        Self {
            title: article.title.clone(),
            description: article.description.clone(),
            image_url,
            category: article.category.clone(),
            source: article.source.clone(),
            published_at: article.published_at.clone(),
            read_more_url: article.read_more_url.clone(),
        }
    }
}
