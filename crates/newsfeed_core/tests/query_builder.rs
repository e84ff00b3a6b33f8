use newsfeed_core::{build_query, page_heading, Endpoint, FilterState, PAGE_SIZE};
use pretty_assertions::assert_eq;

fn params(filters: &FilterState) -> Vec<(&'static str, String)> {
    build_query(filters).params
}

#[test]
fn headlines_scenario_matches_expected_parameters() {
    let filters = FilterState::default()
        .with_topic("tech")
        .with_language("en")
        .with_country("all")
        .with_date_range("week");

    let query = build_query(&filters);

    assert_eq!(query.endpoint, Endpoint::Headlines);
    assert_eq!(query.endpoint.path(), "/api/news");
    assert_eq!(
        query.params,
        vec![
            ("language", "en".to_string()),
            ("max", "9".to_string()),
            ("topic", "tech".to_string()),
            ("country", "all".to_string()),
            ("dateRange", "week".to_string()),
        ]
    );
}

#[test]
fn keywords_switch_to_search_and_drop_topic() {
    let filters = FilterState::default()
        .with_topic("sports")
        .with_country("fr")
        .with_date_range("month")
        .with_keywords("  climate summit ");

    let query = build_query(&filters);

    assert_eq!(query.endpoint, Endpoint::Search);
    assert_eq!(query.endpoint.path(), "/api/search");
    assert_eq!(query.param("topic"), None);
    assert_eq!(
        query.params,
        vec![
            ("language", "en".to_string()),
            ("max", "9".to_string()),
            ("q", "climate summit".to_string()),
            ("dateRange", "month".to_string()),
            ("country", "fr".to_string()),
        ]
    );
}

#[test]
fn never_sends_topic_in_search_mode_or_q_in_headlines_mode() {
    let topics = ["all", "technology", "business", "bogus"];
    let keywords = ["", "   ", "rust", "a b c"];

    for topic in topics {
        for kw in keywords {
            let filters = FilterState::default().with_topic(topic).with_keywords(kw);
            let query = build_query(&filters);
            if kw.trim().is_empty() {
                assert_eq!(query.endpoint, Endpoint::Headlines);
                assert_eq!(query.param("q"), None);
                assert_eq!(query.param("topic"), Some(topic));
            } else {
                assert_eq!(query.endpoint, Endpoint::Search);
                assert_eq!(query.param("topic"), None);
                assert_eq!(query.param("q"), Some(kw.trim()));
            }
        }
    }
}

#[test]
fn language_and_page_size_always_lead() {
    for filters in [
        FilterState::default().with_language("de"),
        FilterState::default().with_language("de").with_keywords("bahn"),
    ] {
        let leading: Vec<_> = params(&filters).into_iter().take(2).collect();
        assert_eq!(
            leading,
            vec![
                ("language", "de".to_string()),
                ("max", PAGE_SIZE.to_string())
            ]
        );
    }
}

#[test]
fn invalid_codes_pass_through_unchanged() {
    let filters = FilterState::default()
        .with_language("zz")
        .with_country("atlantis")
        .with_date_range("decade");
    let query = build_query(&filters);

    assert_eq!(query.param("language"), Some("zz"));
    assert_eq!(query.param("country"), Some("atlantis"));
    assert_eq!(query.param("dateRange"), Some("decade"));
}

#[test]
fn heading_reflects_mode() {
    assert_eq!(page_heading(&FilterState::default()), "Trending News");
    assert_eq!(
        page_heading(&FilterState::default().with_keywords("mars rover")),
        "Search Results for \"mars rover\""
    );
}
