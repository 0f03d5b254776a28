use crate::models::{Suggestion, SuggestionKind};

use super::{escape, page};

/// Renders the suggestion form pre-filled with `suggestion`
pub fn render(suggestion: &Suggestion) -> String {
    let options = SuggestionKind::ALL
        .iter()
        .map(|kind| {
            let selected = if *kind == suggestion.kind { " selected" } else { "" };
            format!(
                r#"<option value="{value}"{selected}>{value}</option>"#,
                value = kind.as_str(),
                selected = selected
            )
        })
        .collect::<Vec<_>>()
        .join("\n            ");

    let body = format!(
        r#"<form class="suggest" action="/suggest-me" method="post">
    <h2>Add Movie/TV Show</h2>
    <label for="name">Name</label>
    <input id="name" type="text" name="name" value="{name}" placeholder="Enter movie/TV show name">
    <label for="genre">Genre</label>
    <input id="genre" type="text" name="genre" value="{genre}" placeholder="Enter genre">
    <label for="kind">Type</label>
    <select id="kind" name="kind">
            {options}
    </select>
    <button type="submit">Submit</button>
</form>"#,
        name = escape(&suggestion.name),
        genre = escape(&suggestion.genre),
        options = options,
    );

    page("Suggest a title", None, &body)
}
