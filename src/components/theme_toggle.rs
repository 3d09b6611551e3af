//! Navbar button that flips between the dark and light themes.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::state::theme::{Theme, ThemePreference};

/// Glyph for the toggle: the sun switches to light, the moon to dark.
pub fn toggle_glyph(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "\u{2600}",
        Theme::Light => "\u{263E}",
    }
}

/// Toggle button. Persisting happens inside `ThemePreference::toggle`; the
/// root effect reflects the new value onto `<html>`.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemePreference>>();

    let on_toggle = move |_| {
        theme.update(|pref| {
            pref.toggle();
        });
    };

    view! {
        <button
            class="btn navbar__theme-toggle"
            on:click=on_toggle
            aria-label="Toggle theme"
            title="Toggle theme"
        >
            {move || toggle_glyph(theme.with(ThemePreference::get))}
        </button>
    }
}
