use chrono::{DateTime, Utc};
use html_escape::{encode_double_quoted_attribute, encode_text};
use newsfeed_core::{format_published_at, AppViewModel, CardView, FALLBACK_IMAGE_URL};

use super::constants::Element;
use super::port::{RenderedCard, ViewCommand};

/// Translates the view model into commands for a view port.
///
/// `now` anchors the relative time labels on the cards.
#[allow(clippy::vec_init_then_push)]
pub fn render(view: &AppViewModel, now: DateTime<Utc>) -> Vec<ViewCommand> {
    let mut cmds = Vec::new();

    cmds.push(ViewCommand::SetText {
        element: Element::NewsTitle,
        text: view.heading.clone(),
    });
    cmds.push(ViewCommand::SetText {
        element: Element::NewsSummary,
        text: view.summary.clone(),
    });

    cmds.push(ViewCommand::SetPanelVisible {
        panel: Element::LoadingGrid,
        visible: view.loading_visible,
    });
    cmds.push(ViewCommand::SetPanelVisible {
        panel: Element::NewsGrid,
        visible: view.grid_visible,
    });
    cmds.push(ViewCommand::SetPanelVisible {
        panel: Element::NoResults,
        visible: view.empty_visible,
    });

    if view.grid_visible {
        cmds.push(ViewCommand::SetGrid(
            view.cards.iter().map(|card| render_card(card, now)).collect(),
        ));
    }

    // The count keeps its previous value while a request is pending.
    if !view.loading_visible {
        cmds.push(ViewCommand::SetText {
            element: Element::ArticleCount,
            text: view.article_count.to_string(),
        });
    }

    cmds.push(match &view.error_banner {
        Some(message) => ViewCommand::ShowErrorBanner(message.clone()),
        None => ViewCommand::HideErrorBanner,
    });

    cmds
}

fn render_card(card: &CardView, now: DateTime<Utc>) -> RenderedCard {
    let time_label = format_published_at(&card.published_at, now);
    RenderedCard {
        html: card_html(card, &time_label),
        title: card.title.clone(),
        category: card.category.clone(),
        source: card.source.clone(),
        time_label,
        read_more_url: card.read_more_url.clone(),
    }
}

fn card_html(card: &CardView, time_label: &str) -> String {
    format!(
        r#"<div class="news-card">
    <img src="{image}" alt="{alt}" class="news-image" loading="lazy" onerror="this.onerror=null;this.src='{fallback}'">
    <div class="news-content">
        <div class="news-meta">
            <span class="category-badge">{category}</span>
            <div class="time-info">
                <svg class="clock-icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <circle cx="12" cy="12" r="10"></circle>
                    <polyline points="12,6 12,12 16,14"></polyline>
                </svg>
                <span>{time}</span>
            </div>
        </div>
        <h3 class="news-title">{title}</h3>
        <p class="news-description">{description}</p>
        <div class="news-footer">
            <span class="news-source">{source}</span>
            <a class="read-more-btn" href="{href}" target="_blank" rel="noopener noreferrer">Read more</a>
        </div>
    </div>
</div>"#,
        image = encode_double_quoted_attribute(&card.image_url),
        alt = encode_double_quoted_attribute(&card.title),
        fallback = FALLBACK_IMAGE_URL,
        category = encode_text(&card.category),
        time = encode_text(time_label),
        title = encode_text(&card.title),
        description = encode_text(&card.description),
        source = encode_text(&card.source),
        href = encode_double_quoted_attribute(&card.read_more_url),
    )
}
