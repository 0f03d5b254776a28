use crate::models::{Tab, TitleRecord};
use crate::services::SearchOutcome;

use super::{detail_href, error_body, escape, loading_body, page, ViewState};

pub const CATALOG_ERROR: &str = "No movies or TV shows found.";

/// Blocking notice shown above the list after a failed search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    NotFound,
    Failed,
}

impl Notice {
    /// Notice for a search outcome that keeps the user on the list view
    pub fn for_outcome(outcome: &SearchOutcome) -> Option<Self> {
        match outcome {
            SearchOutcome::NotFound => Some(Notice::NotFound),
            SearchOutcome::Failed => Some(Notice::Failed),
            SearchOutcome::Empty | SearchOutcome::Found(_) => None,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Notice::NotFound => "Movie not found! Please try another name.",
            Notice::Failed => "Something went wrong! Please try again.",
        }
    }
}

/// Settles the list view from a catalog fetch; an empty catalog is an error
pub fn load(catalog: Vec<TitleRecord>) -> ViewState<Vec<TitleRecord>> {
    let fetched = Some(catalog).filter(|items| !items.is_empty());
    ViewState::Loading.settle(fetched, CATALOG_ERROR)
}

pub fn count_label(tab: Tab, count: usize) -> String {
    format!("{} ({})", tab.label(), count)
}

fn card(item: &TitleRecord) -> String {
    format!(
        r#"<a class="card" href="{href}">
    <span class="rating">&#9733; {rating}</span>
    <img src="{poster}" alt="{title}">
    <h2>{title} ({year})</h2>
</a>"#,
        href = escape(&detail_href(&item.id)),
        rating = escape(&item.rating),
        poster = escape(&item.poster_url),
        title = escape(&item.title),
        year = escape(&item.year),
    )
}

fn tabs(active: Tab) -> String {
    Tab::ALL
        .iter()
        .map(|tab| {
            let class = if *tab == active { "tab active" } else { "tab" };
            format!(
                r#"<a class="{}" href="{}">{}</a>"#,
                class,
                escape(&tab.href()),
                tab.label()
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ")
}

/// Renders the list view for `tab`, optionally with a search notice
pub fn render(state: &ViewState<Vec<TitleRecord>>, tab: Tab, notice: Option<Notice>) -> String {
    let items = match state {
        ViewState::Loading => return page("SMDb", Some(tab), loading_body()),
        ViewState::Error(message) => return page("SMDb", Some(tab), &error_body(message)),
        ViewState::Ready(items) => items,
    };

    let visible = tab.filter(items);
    let notice = notice
        .map(|n| format!(r#"<div class="notice" role="alert">{}</div>"#, n.message()))
        .unwrap_or_default();
    let cards = visible
        .iter()
        .map(|item| card(item))
        .collect::<Vec<_>>()
        .join("\n");

    let body = format!(
        r#"<div class="container">
    <h1>SMDb</h1>
    <p>List of movies &amp; TV shows I have watched till date.</p>
    <p>Feel free to make a suggestion.</p>
    <form class="search" action="/search" method="get">
        <input type="text" name="q" placeholder="Search Movies or TV Shows">
        <input type="hidden" name="tab" value="{tab_value}">
        <button type="submit">Search</button>
    </form>
    {notice}
    <div class="tabs">
        {tabs}
    </div>
    <div class="count">{count}</div>
    <div class="grid">
{cards}
    </div>
</div>"#,
        tab_value = escape(tab.as_query()),
        notice = notice,
        tabs = tabs(tab),
        count = count_label(tab, visible.len()),
        cards = cards,
    );

    page("SMDb", Some(tab), &body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TitleKind;

    fn item(id: &str, title: &str, kind: TitleKind) -> TitleRecord {
        TitleRecord {
            id: id.to_string(),
            title: title.to_string(),
            year: "2021".to_string(),
            poster_url: "https://example.com/p.jpg".to_string(),
            plot: String::new(),
            kind,
            release_date: String::new(),
            runtime: String::new(),
            genres: String::new(),
            rating: "8.0".to_string(),
        }
    }

    fn catalog() -> Vec<TitleRecord> {
        vec![
            item("tt1", "Oblivion", TitleKind::Movie),
            item("tt2", "Loki", TitleKind::Series),
        ]
    }

    #[test]
    fn test_load_empty_catalog_is_error() {
        assert_eq!(load(Vec::new()), ViewState::Error(CATALOG_ERROR.to_string()));
    }

    #[test]
    fn test_load_non_empty_catalog_is_ready() {
        assert!(load(catalog()).is_ready());
    }

    #[test]
    fn test_render_all() {
        let html = render(&load(catalog()), Tab::All, None);
        assert!(html.contains("All (2)"));
        assert!(html.contains(r#"href="/movie/tt1""#));
        assert!(html.contains("Loki (2021)"));
        assert!(!html.contains("role=\"alert\""));
    }

    #[test]
    fn test_render_movies_tab_filters() {
        let html = render(&load(catalog()), Tab::Movies, None);
        assert!(html.contains("Movies (1)"));
        assert!(html.contains("Oblivion (2021)"));
        assert!(!html.contains("Loki (2021)"));
        assert!(html.contains(r#"<a class="tab active" href="/?tab=movies">Movies</a>"#));
    }

    #[test]
    fn test_render_error_state() {
        let html = render(&load(Vec::new()), Tab::All, None);
        assert!(html.contains(CATALOG_ERROR));
        assert!(!html.contains("class=\"grid\""));
    }

    #[test]
    fn test_render_notice() {
        let html = render(&load(catalog()), Tab::All, Some(Notice::NotFound));
        assert!(html.contains("Movie not found! Please try another name."));
    }

    #[test]
    fn test_notice_for_outcome() {
        assert_eq!(
            Notice::for_outcome(&SearchOutcome::NotFound),
            Some(Notice::NotFound)
        );
        assert_eq!(
            Notice::for_outcome(&SearchOutcome::Failed),
            Some(Notice::Failed)
        );
        assert_eq!(Notice::for_outcome(&SearchOutcome::Empty), None);
        assert_eq!(
            Notice::for_outcome(&SearchOutcome::Found("tt1".to_string())),
            None
        );
    }

    #[test]
    fn test_titles_are_escaped() {
        let items = vec![item("tt3", "<script>", TitleKind::Movie)];
        let html = render(&load(items), Tab::All, None);
        assert!(html.contains("&lt;script&gt; (2021)"));
        assert!(!html.contains("<script>"));
    }
}
