//! Card for one repository in the projects grid.

#[cfg(test)]
#[path = "repo_card_test.rs"]
mod repo_card_test;

use leptos::prelude::*;

use crate::components::style::{card_title_class, use_theme, with_accent};
use crate::net::types::RepositorySummary;

/// Secondary line under the repository name, e.g. `Rust · ★ 12 · fork`.
/// `None` when the listing carries nothing worth showing.
pub fn repo_meta_line(repo: &RepositorySummary) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(language) = repo.language.as_deref() {
        parts.push(language.to_owned());
    }
    if repo.stargazers_count > 0 {
        parts.push(format!("\u{2605} {}", repo.stargazers_count));
    }
    if repo.fork {
        parts.push("fork".to_owned());
    }
    if parts.is_empty() { None } else { Some(parts.join(" \u{b7} ")) }
}

/// A link card opening the repository on GitHub in a new tab.
#[component]
pub fn RepoCard(repo: RepositorySummary) -> impl IntoView {
    let theme = use_theme();
    let meta = repo_meta_line(&repo);
    let name_class = move || with_accent("repo-card__name", card_title_class(theme.get()));

    view! {
        <a class="repo-card" href=repo.html_url target="_blank" rel="noreferrer">
            <div class=name_class>{repo.name}</div>
            {repo
                .description
                .map(|description| view! { <p class="repo-card__description">{description}</p> })}
            {meta.map(|meta| view! { <div class="repo-card__meta">{meta}</div> })}
        </a>
    }
}
