//! The portfolio page: every section plus the one-time repository load.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounting the page claims the feed's single load and spawns the request.
//! A `MountGuard` owned by the page's cleanup hook cancels the result if the
//! page is torn down before GitHub answers.

#[cfg(test)]
#[path = "portfolio_test.rs"]
mod portfolio_test;

use leptos::prelude::*;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::projects::ProjectsSection;
use crate::components::sections::{About, Contact, Education, Hero, Skills};
use crate::config::SiteConfig;
use crate::net::github::{GithubApi, RepositorySource};
use crate::state::feed::{LoadOutcome, RepositoryFeed, fetch_then};
use crate::util::cancel::{CancelToken, MountGuard};

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let feed = expect_context::<RwSignal<RepositoryFeed>>();

    start_feed_load(feed, &config);

    view! {
        <div class="page">
            <Navbar/>
            <main class="page__main">
                <Hero/>
                <About/>
                <Skills/>
                <Education/>
                <ProjectsSection/>
                <Contact/>
                <Footer/>
            </main>
        </div>
    }
}

fn start_feed_load(feed: RwSignal<RepositoryFeed>, config: &SiteConfig) {
    let Some(token) = claim_feed_load(feed) else {
        return;
    };

    let source = GithubApi::new(config);
    let owner = config.owner_handle.clone();
    leptos::task::spawn_local(async move {
        let outcome = run_feed_load(feed, &source, &owner, &token).await;
        log::debug!("repository load for {owner} finished: {outcome:?}");
    });
}

/// Claim the feed's single load for the current mount. Returns `None` when
/// an earlier mount already claimed it. The returned token is cancelled when
/// the current owner is cleaned up.
fn claim_feed_load(feed: RwSignal<RepositoryFeed>) -> Option<CancelToken> {
    if !feed.try_update(RepositoryFeed::begin).unwrap_or(false) {
        return None;
    }

    let guard = MountGuard::new();
    let token = guard.token();
    on_cleanup(move || drop(guard));
    Some(token)
}

async fn run_feed_load<S: RepositorySource>(
    feed: RwSignal<RepositoryFeed>,
    source: &S,
    owner: &str,
    token: &CancelToken,
) -> LoadOutcome {
    fetch_then(source, owner, token, move |result| {
        feed.update(|f| f.apply(result));
    })
    .await
}
