//! "Notable Projects" section fed by the repository feed.
//!
//! DESIGN
//! ======
//! Load failures are not shown as errors: the section keeps its loading text.
//! A successful load with zero repositories gets its own message so it no
//! longer reads as a load that never finished.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::repo_card::RepoCard;
use crate::components::style::{accent_class, use_theme, with_accent};
use crate::state::feed::{FeedState, RepositoryFeed};

pub const LOADING_TEXT: &str = "Loading repositories...";
pub const EMPTY_TEXT: &str = "No public repositories yet.";

/// Text to show instead of the grid, or `None` when there are cards.
pub fn projects_placeholder(state: &FeedState) -> Option<&'static str> {
    match state {
        FeedState::NotLoaded | FeedState::Loading | FeedState::Failed(_) => Some(LOADING_TEXT),
        FeedState::Loaded { repositories, .. } if repositories.is_empty() => Some(EMPTY_TEXT),
        FeedState::Loaded { .. } => None,
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let feed = expect_context::<RwSignal<RepositoryFeed>>();
    let theme = use_theme();
    let heading_class = move || with_accent("section__title", accent_class(theme.get()));

    let body = move || {
        feed.with(|f| match projects_placeholder(f.state()) {
            Some(text) => view! { <p class="projects__placeholder">{text}</p> }.into_any(),
            None => view! {
                <div class="projects__grid">
                    {f.repositories()
                        .iter()
                        .cloned()
                        .map(|repo| view! { <RepoCard repo=repo/> })
                        .collect::<Vec<_>>()}
                </div>
            }
            .into_any(),
        })
    };

    view! {
        <section id="projects" class="section">
            <h3 class=heading_class>"Notable Projects"</h3>
            {body}
        </section>
    }
}
