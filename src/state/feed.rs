//! Repository feed for the projects section.
//!
//! DESIGN
//! ======
//! The feed is an explicit state machine so "still loading" and "loaded, but
//! the owner has no repositories" render differently:
//!
//! ```text
//! NotLoaded --begin--> Loading --apply(Ok)--> Loaded
//!                              \--apply(Err)--> Failed
//! ```
//!
//! `begin` succeeds once per feed, which is what limits a page to a single
//! outbound request. A failed load keeps the (empty) sequence it started
//! with; there is no retry.
//!
//! The async half (`fetch_then`) is split from the state so the page can run
//! it inside `spawn_local` and apply the result through a signal, while
//! tests drive `RepositoryFeed::load` directly.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use crate::net::error::FeedError;
use crate::net::github::RepositorySource;
use crate::net::types::RepositorySummary;
use crate::util::cancel::CancelToken;

/// Repositories kept for display.
pub const FEED_CAP: usize = 25;

/// Load state of the repository feed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FeedState {
    #[default]
    NotLoaded,
    Loading,
    /// `fetched` is how many entries the API returned before capping.
    Loaded { repositories: Vec<RepositorySummary>, fetched: usize },
    Failed(FeedError),
}

/// What happened to a load's result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The result reached the feed.
    Applied,
    /// The page went away first; the result was dropped.
    Discarded,
    /// A load had already run, so no request was made.
    Skipped,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RepositoryFeed {
    state: FeedState,
}

impl RepositoryFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FeedState {
        &self.state
    }

    /// True until a load has produced a result.
    pub fn is_pending(&self) -> bool {
        matches!(self.state, FeedState::NotLoaded | FeedState::Loading)
    }

    /// Claim the feed's single load. Returns `false` if one already started.
    pub fn begin(&mut self) -> bool {
        if self.state != FeedState::NotLoaded {
            return false;
        }
        self.state = FeedState::Loading;
        true
    }

    /// Record the outcome of the load started by [`Self::begin`].
    ///
    /// Successful listings are capped to the first [`FEED_CAP`] entries in
    /// the order the API returned them. Failures are logged and kept as the
    /// state; the repository sequence stays empty.
    pub fn apply(&mut self, result: Result<Vec<RepositorySummary>, FeedError>) {
        if self.state != FeedState::Loading {
            log::debug!("ignoring repository result outside a load");
            return;
        }
        self.state = match result {
            Ok(mut repositories) => {
                let fetched = repositories.len();
                repositories.truncate(FEED_CAP);
                log::info!("repository feed loaded: {fetched} fetched, {} kept", repositories.len());
                FeedState::Loaded { repositories, fetched }
            }
            Err(err) => {
                log::warn!("repository feed failed: {err}");
                FeedState::Failed(err)
            }
        };
    }

    /// Repositories to render. Empty unless loaded.
    pub fn repositories(&self) -> &[RepositorySummary] {
        match &self.state {
            FeedState::Loaded { repositories, .. } => repositories,
            _ => &[],
        }
    }

    /// Count shown in the navbar badge: the kept count, or `"25+"` when the
    /// API returned more than the cap.
    pub fn display_count(&self) -> String {
        match &self.state {
            FeedState::Loaded { fetched, .. } if *fetched > FEED_CAP => format!("{FEED_CAP}+"),
            _ => self.repositories().len().to_string(),
        }
    }

    /// Run this feed's single load against `source`.
    pub async fn load<S: RepositorySource>(&mut self, source: &S, owner: &str, token: &CancelToken) -> LoadOutcome {
        if !self.begin() {
            return LoadOutcome::Skipped;
        }
        fetch_then(source, owner, token, |result| self.apply(result)).await
    }
}

/// Fetch `owner`'s repositories and hand the result to `apply`, unless
/// `token` was cancelled while the request was in flight.
pub async fn fetch_then<S, F>(source: &S, owner: &str, token: &CancelToken, apply: F) -> LoadOutcome
where
    S: RepositorySource,
    F: FnOnce(Result<Vec<RepositorySummary>, FeedError>),
{
    log::info!("requesting repositories for {owner}");
    let result = source.list_repositories(owner).await;
    if token.is_cancelled() {
        log::debug!("discarding stale repository response for {owner}");
        return LoadOutcome::Discarded;
    }
    apply(result);
    LoadOutcome::Applied
}
