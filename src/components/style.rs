//! Theme-dependent class names shared by the page components.
//!
//! The stylesheet handles most light/dark differences through the root
//! `.dark` class. These helpers cover the accents that switch class outright.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use leptos::prelude::*;

use crate::state::theme::{Theme, ThemePreference};

/// Current theme from the `RwSignal<ThemePreference>` context.
pub fn use_theme() -> Signal<Theme> {
    let pref = expect_context::<RwSignal<ThemePreference>>();
    Signal::derive(move || pref.with(ThemePreference::get))
}

/// Section headings and the navbar title.
pub fn accent_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "text-ocean-500",
        Theme::Light => "text-black",
    }
}

pub fn link_hover_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "hover:text-ocean-500",
        Theme::Light => "hover:text-gray-700",
    }
}

/// Repository names inside project cards.
pub fn card_title_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "text-ocean-200",
        Theme::Light => "text-black",
    }
}

/// Contact link and other inline accents.
pub fn inline_link_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "text-ocean-300",
        Theme::Light => "text-black",
    }
}

pub fn muted_class(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "text-neutral-500",
        Theme::Light => "text-black",
    }
}

/// Join a base class list with a theme accent.
pub fn with_accent(base: &str, accent: &str) -> String {
    format!("{base} {accent}")
}
