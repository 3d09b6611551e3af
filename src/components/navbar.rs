//! Fixed top navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only component that reads both page states: the theme for accents and
//! the toggle, the repository feed for the project-count badge.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

use crate::components::style::{accent_class, link_hover_class, use_theme, with_accent};
use crate::components::theme_toggle::ThemeToggle;
use crate::profile::PROFILE;
use crate::state::feed::RepositoryFeed;

/// In-page anchors, in display order.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#about", "About"),
    ("#skills", "Skills"),
    ("#education", "Education"),
    ("#contact", "Contact"),
];

/// Badge text for the project count.
pub fn projects_badge(display_count: &str) -> String {
    format!("{display_count} projects")
}

#[component]
pub fn Navbar() -> impl IntoView {
    let feed = expect_context::<RwSignal<RepositoryFeed>>();
    let theme = use_theme();

    let title_class = move || with_accent("navbar__title", accent_class(theme.get()));
    let link_class = move || with_accent("navbar__link", link_hover_class(theme.get()));
    let badge = move || projects_badge(&feed.with(RepositoryFeed::display_count));

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <h1 class=title_class>{PROFILE.name}</h1>
                <div class="navbar__links">
                    {NAV_LINKS
                        .iter()
                        .map(|(href, label)| {
                            view! {
                                <a href=*href class=link_class>
                                    {*label}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                    <span class="navbar__badge">{badge}</span>
                    <ThemeToggle/>
                </div>
            </div>
        </nav>
    }
}
