use crate::models::TitleRecord;

use super::{error_body, escape, loading_body, page, ViewState};

pub const DETAIL_ERROR: &str = "Movie details not found.";

pub fn load(record: Option<TitleRecord>) -> ViewState<TitleRecord> {
    ViewState::Loading.settle(record, DETAIL_ERROR)
}

pub fn render(state: &ViewState<TitleRecord>) -> String {
    let movie = match state {
        ViewState::Loading => return page("SMDb", None, loading_body()),
        ViewState::Error(message) => return page("SMDb", None, &error_body(message)),
        ViewState::Ready(movie) => movie,
    };

    let genres = movie
        .genre_list()
        .iter()
        .map(|g| format!(r#"<span class="genre">{}</span>"#, escape(g)))
        .collect::<Vec<_>>()
        .join(", ");

    let body = format!(
        r#"<div class="container">
    <div class="banner">
        <p>IMDb / {kind}</p>
        <h1>{title}</h1>
    </div>
    <div class="details">
        <img src="{poster}" alt="{title}">
        <div class="info">
            <h2><em>{tagline}</em></h2>
            <p>{plot}</p>
            <div class="rating-box">&#9733; {rating}</div>
            <p><strong>Type:</strong> {kind}</p>
            <div><strong>Release Date</strong> {released}</div>
            <div><strong>Run Time</strong> {runtime}</div>
            <div><strong>Genres</strong> {genres}</div>
        </div>
    </div>
</div>"#,
        kind = movie.kind.label(),
        title = escape(&movie.title),
        poster = escape(&movie.poster_url),
        tagline = escape(&movie.tagline()),
        plot = escape(&movie.plot),
        rating = escape(&movie.rating),
        released = escape(&movie.release_date),
        runtime = escape(&movie.runtime),
        genres = genres,
    );

    page(&movie.title, None, &body)
}
