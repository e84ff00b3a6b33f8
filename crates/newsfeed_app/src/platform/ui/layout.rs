//! Static page skeleton the HTML surface fills in.

use html_escape::encode_text;
use newsfeed_core::PAGE_SIZE;

use super::constants::{Element, NO_RESULTS_TEXT};
use super::port::PageModel;

const STYLESHEET: &str = r#"
:root { --primary-gold: #ffc506; --border-color: #2d3748; --bg: #0f1419; --card: #1a202c; --text: #e2e8f0; --muted: #a0aec0; }
* { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: var(--bg); color: var(--text); padding: 32px; }
h2 { margin-bottom: 8px; }
.news-count { color: var(--muted); margin-bottom: 24px; }
.error-message { background: #742a2a; color: #fed7d7; padding: 12px 16px; border-radius: 8px; margin-bottom: 16px; }
.news-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr)); gap: 24px; }
.news-card, .skeleton-card { background: var(--card); border: 1px solid var(--border-color); border-radius: 12px; overflow: hidden; }
.skeleton-card { height: 380px; animation: pulse 1.5s ease-in-out infinite; }
@keyframes pulse { 50% { opacity: 0.5; } }
.news-image { width: 100%; height: 200px; object-fit: cover; }
.news-content { padding: 16px; }
.news-meta { display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px; }
.category-badge { background: var(--primary-gold); color: #000; padding: 2px 10px; border-radius: 999px; font-size: 12px; font-weight: 600; }
.time-info { display: flex; align-items: center; gap: 4px; color: var(--muted); font-size: 12px; }
.clock-icon { width: 14px; height: 14px; }
.news-title { margin-bottom: 8px; }
.news-description { color: var(--muted); margin-bottom: 16px; }
.news-footer { display: flex; justify-content: space-between; align-items: center; }
.news-source { color: var(--muted); font-size: 13px; }
.read-more-btn { color: var(--primary-gold); text-decoration: none; font-weight: 600; }
.no-results { text-align: center; color: var(--muted); padding: 64px 0; }
"#;

fn display(visible: bool, shown_as: &str) -> String {
    if visible {
        format!("display: {shown_as}")
    } else {
        "display: none".to_string()
    }
}

/// Full HTML document for the current page state.
pub fn page_html(model: &PageModel) -> String {
    let skeleton = r#"<div class="skeleton-card"></div>"#.repeat(PAGE_SIZE as usize);
    let cards = model
        .cards
        .iter()
        .map(|card| card.html.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    let banner = match &model.error_banner {
        Some(message) => format!(
            r#"<div id="{id}" class="error-message" style="display: block">{text}</div>"#,
            id = Element::ErrorMessage.id(),
            text = encode_text(message),
        ),
        None => format!(
            r#"<div id="{id}" class="error-message" style="display: none"></div>"#,
            id = Element::ErrorMessage.id(),
        ),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{heading}</title>
<style>{STYLESHEET}</style>
</head>
<body>
<main>
<h2 id="{title_id}">{heading}</h2>
<p class="news-count"><span id="{count_id}">{count}</span> <span id="{summary_id}">{summary}</span></p>
{banner}
<div id="{loading_id}" class="news-grid" style="{loading_style}">{skeleton}</div>
<div id="{grid_id}" class="news-grid" style="{grid_style}">
{cards}
</div>
<div id="{empty_id}" class="no-results" style="{empty_style}"><p>{no_results}</p></div>
</main>
</body>
</html>
"#,
        heading = encode_text(&model.heading),
        title_id = Element::NewsTitle.id(),
        count_id = Element::ArticleCount.id(),
        count = encode_text(&model.article_count),
        summary_id = Element::NewsSummary.id(),
        summary = encode_text(&model.summary),
        loading_id = Element::LoadingGrid.id(),
        loading_style = display(model.loading_visible, "grid"),
        grid_id = Element::NewsGrid.id(),
        grid_style = display(model.grid_visible, "grid"),
        empty_id = Element::NoResults.id(),
        empty_style = display(model.empty_visible, "block"),
        no_results = NO_RESULTS_TEXT,
    )
}
