//! Server-rendered HTML screens
//!
//! Each screen is a pure function from view state to an HTML string so it can
//! be tested without a running server.

pub mod detail;
pub mod list;
pub mod suggestion;

use crate::models::Tab;

/// Lifecycle of a screen that depends on a remote fetch
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    Loading,
    Ready(T),
    Error(String),
}

impl<T> ViewState<T> {
    /// Moves a loading view to `Ready` with the fetched data, or to `Error` with `message`.
    /// Views that already settled are returned unchanged.
    pub fn settle(self, fetched: Option<T>, message: &str) -> Self {
        match self {
            ViewState::Loading => match fetched {
                Some(data) => ViewState::Ready(data),
                None => ViewState::Error(message.to_string()),
            },
            settled => settled,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, ViewState::Ready(_))
    }
}

/// Escapes text for inclusion in HTML bodies and attribute values
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Link to the detail page of a title
pub fn detail_href(id: &str) -> String {
    format!("/movie/{}", urlencoding::encode(id))
}

const STYLE: &str = r#"
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; background-color: #0e1327; color: #fff; line-height: 1.5; }
    a { color: inherit; text-decoration: none; }
    nav { display: flex; justify-content: space-between; align-items: center; padding: 16px 20px; }
    nav .links { display: flex; gap: 32px; }
    nav .active, .tab.active { color: #818cf8; }
    .logo { font-weight: bold; font-size: 1.4em; }
    .container { padding: 20px; }
    .notice { background: #7f1d1d; padding: 10px 16px; border-radius: 8px; margin-top: 16px; }
    .error { color: #ef4444; text-align: center; margin-top: 40px; }
    .tabs { display: flex; gap: 16px; margin-top: 24px; }
    .tab { padding: 8px 24px; border-radius: 999px; background: #1f2937; }
    .tab.active { background: #818cf8; color: #000; }
    .grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 20px; margin-top: 24px; }
    .card { position: relative; display: block; background: #111827; padding: 12px; border-radius: 8px; }
    .card img { width: 100%; height: 288px; object-fit: cover; border-radius: 4px; }
    .rating { position: absolute; top: 8px; left: 8px; background: rgba(0,0,0,.7); color: #facc15; padding: 2px 8px; border-radius: 8px; }
    .genre { color: #facc15; }
    form.suggest { background: #111827; padding: 24px; border-radius: 8px; width: 320px; margin: 40px auto; }
    form.suggest input, form.suggest select { width: 100%; padding: 8px; margin-bottom: 16px; background: #1f2937; color: #fff; border: none; border-radius: 6px; }
    form.suggest button { width: 100%; padding: 8px; background: #3b82f6; color: #fff; border: none; border-radius: 6px; }
"#;

fn navbar(active: Option<Tab>) -> String {
    let link = |tab: Tab| {
        let class = if active == Some(tab) { " class=\"active\"" } else { "" };
        format!(r#"<a href="{}"{}>{}</a>"#, escape(&tab.href()), class, tab.label())
    };

    format!(
        r#"<nav>
    <a class="logo" href="/">SMDb</a>
    <div class="links">
        {}
        {}
        <a href="/suggest-me">Suggest me &rarr;</a>
    </div>
</nav>"#,
        link(Tab::Movies),
        link(Tab::TvShows),
    )
}

/// Wraps a screen body in the shared document shell and navigation bar
pub fn page(title: &str, active: Option<Tab>, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <style>{}</style>
</head>
<body>
{}
{}
</body>
</html>
"#,
        escape(title),
        STYLE,
        navbar(active),
        body
    )
}

pub fn loading_body() -> &'static str {
    r#"<div class="container">Loading...</div>"#
}

pub fn error_body(message: &str) -> String {
    format!(r#"<div class="error">{}</div>"#, escape(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settle_from_loading() {
        let ready = ViewState::Loading.settle(Some(3), "missing");
        assert_eq!(ready, ViewState::Ready(3));

        let error: ViewState<i32> = ViewState::Loading.settle(None, "missing");
        assert_eq!(error, ViewState::Error("missing".to_string()));
    }

    #[test]
    fn test_settle_is_one_shot() {
        let ready = ViewState::Ready(1).settle(None, "missing");
        assert!(ready.is_ready());
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_detail_href_encodes() {
        assert_eq!(detail_href("tt0903747"), "/movie/tt0903747");
        assert_eq!(detail_href("a b"), "/movie/a%20b");
    }

    #[test]
    fn test_page_highlights_active_tab() {
        let html = page("SMDb", Some(Tab::Movies), "<p>body</p>");
        assert!(html.contains(r#"<a href="/?tab=movies" class="active">Movies</a>"#));
        assert!(html.contains(r#"<a href="/?tab=tv%20shows">TV Shows</a>"#));
        assert!(html.contains("<p>body</p>"));
    }
}
