//! Root application component with context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::SiteConfig;
use crate::pages::portfolio::PortfolioPage;
use crate::profile::PROFILE;
use crate::state::feed::RepositoryFeed;
use crate::state::theme::ThemePreference;
use crate::util::dark_mode;
use crate::util::storage::BrowserStorage;

/// Root application component.
///
/// Constructs the page state once and provides it to child components:
/// `SiteConfig`, `RwSignal<ThemePreference>` and `RwSignal<RepositoryFeed>`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::load();
    let theme = RwSignal::new(ThemePreference::new(BrowserStorage));
    let feed = RwSignal::new(RepositoryFeed::new());

    provide_context(config);
    provide_context(theme);
    provide_context(feed);

    // Reflect the theme onto <html> at startup and after every toggle.
    Effect::new(move || dark_mode::apply(theme.with(ThemePreference::get)));

    view! {
        <Title text=PROFILE.name/>
        <PortfolioPage/>
    }
}
