use std::cell::{Cell, RefCell};

use futures::executor::block_on;

use super::*;
use crate::util::cancel::MountGuard;

/// Source that replays one canned response and records each request.
struct ScriptedSource {
    response: Result<Vec<RepositorySummary>, FeedError>,
    calls: Cell<usize>,
    owners: RefCell<Vec<String>>,
}

impl ScriptedSource {
    fn ok(repositories: Vec<RepositorySummary>) -> Self {
        Self { response: Ok(repositories), calls: Cell::new(0), owners: RefCell::new(Vec::new()) }
    }

    fn err(err: FeedError) -> Self {
        Self { response: Err(err), calls: Cell::new(0), owners: RefCell::new(Vec::new()) }
    }
}

impl RepositorySource for ScriptedSource {
    async fn list_repositories(&self, owner: &str) -> Result<Vec<RepositorySummary>, FeedError> {
        self.calls.set(self.calls.get() + 1);
        self.owners.borrow_mut().push(owner.to_owned());
        self.response.clone()
    }
}

fn repo(id: u64) -> RepositorySummary {
    RepositorySummary {
        id,
        name: format!("repo-{id}"),
        html_url: format!("https://github.com/niks1107/repo-{id}"),
        description: None,
        language: None,
        stargazers_count: 0,
        fork: false,
    }
}

fn repos(n: u64) -> Vec<RepositorySummary> {
    (1..=n).map(repo).collect()
}

fn loaded_with(n: u64) -> RepositoryFeed {
    let mut feed = RepositoryFeed::new();
    assert!(feed.begin());
    feed.apply(Ok(repos(n)));
    feed
}

// =============================================================
// State machine
// =============================================================

#[test]
fn feed_starts_not_loaded_and_empty() {
    let feed = RepositoryFeed::default();
    assert_eq!(feed.state(), &FeedState::NotLoaded);
    assert!(feed.is_pending());
    assert!(feed.repositories().is_empty());
    assert_eq!(feed.display_count(), "0");
}

#[test]
fn begin_moves_to_loading_once() {
    let mut feed = RepositoryFeed::new();
    assert!(feed.begin());
    assert_eq!(feed.state(), &FeedState::Loading);
    assert!(feed.is_pending());
    assert!(!feed.begin());
}

#[test]
fn begin_is_refused_after_a_result() {
    let mut feed = loaded_with(2);
    assert!(!feed.begin());
    assert_eq!(feed.repositories().len(), 2);
}

#[test]
fn apply_outside_a_load_is_ignored() {
    let mut feed = RepositoryFeed::new();
    feed.apply(Ok(repos(3)));
    assert_eq!(feed.state(), &FeedState::NotLoaded);
}

#[test]
fn loaded_empty_is_distinct_from_loading() {
    let feed = loaded_with(0);
    assert!(!feed.is_pending());
    assert_eq!(feed.state(), &FeedState::Loaded { repositories: Vec::new(), fetched: 0 });
}

// =============================================================
// Truncation
// =============================================================

#[test]
fn apply_keeps_first_entries_in_input_order() {
    for n in [0_u64, 1, 3, 24, 25, 26, 30, 100] {
        let feed = loaded_with(n);
        let expected = usize::try_from(n).unwrap().min(FEED_CAP);
        assert_eq!(feed.repositories().len(), expected, "n = {n}");
        let ids: Vec<u64> = feed.repositories().iter().map(|r| r.id).collect();
        let want: Vec<u64> = (1..=n).take(FEED_CAP).collect();
        assert_eq!(ids, want, "n = {n}");
    }
}

#[test]
fn apply_does_not_resort() {
    let mut feed = RepositoryFeed::new();
    feed.begin();
    feed.apply(Ok(vec![repo(9), repo(2), repo(5)]));
    let ids: Vec<u64> = feed.repositories().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![9, 2, 5]);
}

// =============================================================
// Display count
// =============================================================

#[test]
fn display_count_reports_kept_length() {
    assert_eq!(loaded_with(0).display_count(), "0");
    assert_eq!(loaded_with(17).display_count(), "17");
    assert_eq!(loaded_with(25).display_count(), "25");
}

#[test]
fn display_count_caps_with_plus_when_api_returned_more() {
    let feed = loaded_with(30);
    assert_eq!(feed.repositories().len(), 25);
    assert_eq!(feed.display_count(), "25+");
    assert_eq!(loaded_with(26).display_count(), "25+");
}

#[test]
fn display_count_is_zero_while_loading_or_failed() {
    let mut feed = RepositoryFeed::new();
    feed.begin();
    assert_eq!(feed.display_count(), "0");
    feed.apply(Err(FeedError::Status { status: 403 }));
    assert_eq!(feed.display_count(), "0");
}

// =============================================================
// Failure
// =============================================================

#[test]
fn failure_leaves_sequence_unchanged() {
    let mut feed = RepositoryFeed::new();
    let before = feed.repositories().to_vec();
    let source = ScriptedSource::err(FeedError::Network("offline".into()));
    let guard = MountGuard::new();

    let outcome = block_on(feed.load(&source, "niks1107", &guard.token()));

    assert_eq!(outcome, LoadOutcome::Applied);
    assert_eq!(feed.repositories(), before.as_slice());
    assert_eq!(feed.state(), &FeedState::Failed(FeedError::Network("offline".into())));
    assert!(!feed.is_pending());
}

#[test]
fn every_failure_kind_is_recorded() {
    let errors = [
        FeedError::Network("dns".into()),
        FeedError::Status { status: 404 },
        FeedError::MalformedPayload("expected a sequence".into()),
        FeedError::Timeout { after_ms: 10_000 },
        FeedError::Unavailable,
    ];
    for err in errors {
        let mut feed = RepositoryFeed::new();
        feed.begin();
        feed.apply(Err(err.clone()));
        assert_eq!(feed.state(), &FeedState::Failed(err));
        assert!(feed.repositories().is_empty());
    }
}

// =============================================================
// Async load
// =============================================================

#[test]
fn load_issues_one_request_for_the_owner() {
    let mut feed = RepositoryFeed::new();
    let source = ScriptedSource::ok(repos(3));
    let guard = MountGuard::new();

    let first = block_on(feed.load(&source, "niks1107", &guard.token()));
    let second = block_on(feed.load(&source, "niks1107", &guard.token()));

    assert_eq!(first, LoadOutcome::Applied);
    assert_eq!(second, LoadOutcome::Skipped);
    assert_eq!(source.calls.get(), 1);
    assert_eq!(source.owners.borrow().as_slice(), ["niks1107".to_owned()]);
}

#[test]
fn load_end_to_end_three_repositories() {
    let input = vec![
        RepositorySummary {
            id: 101,
            name: "portfolio".into(),
            html_url: "https://github.com/niks1107/portfolio".into(),
            description: Some("Personal site".into()),
            language: Some("JavaScript".into()),
            stargazers_count: 1,
            fork: false,
        },
        RepositorySummary {
            id: 102,
            name: "ml-playground".into(),
            html_url: "https://github.com/niks1107/ml-playground".into(),
            description: None,
            language: Some("Python".into()),
            stargazers_count: 0,
            fork: false,
        },
        RepositorySummary {
            id: 103,
            name: "dotfiles".into(),
            html_url: "https://github.com/niks1107/dotfiles".into(),
            description: None,
            language: None,
            stargazers_count: 0,
            fork: true,
        },
    ];
    let mut feed = RepositoryFeed::new();
    let source = ScriptedSource::ok(input.clone());
    let guard = MountGuard::new();

    block_on(feed.load(&source, "niks1107", &guard.token()));

    assert_eq!(feed.repositories().len(), 3);
    assert_eq!(feed.display_count(), "3");
    for (stored, given) in feed.repositories().iter().zip(&input) {
        assert_eq!(stored.html_url, given.html_url);
    }
}

#[test]
fn load_discards_result_after_teardown() {
    let mut feed = RepositoryFeed::new();
    let source = ScriptedSource::ok(repos(5));
    let guard = MountGuard::new();
    let token = guard.token();
    drop(guard);

    let outcome = block_on(feed.load(&source, "niks1107", &token));

    assert_eq!(outcome, LoadOutcome::Discarded);
    assert_eq!(source.calls.get(), 1);
    assert!(feed.repositories().is_empty());
    assert_eq!(feed.state(), &FeedState::Loading);
}

#[test]
fn fetch_then_hands_result_to_callback() {
    let source = ScriptedSource::ok(repos(2));
    let guard = MountGuard::new();
    let received = RefCell::new(None);

    let outcome = block_on(fetch_then(&source, "octocat", &guard.token(), |result| {
        *received.borrow_mut() = Some(result);
    }));

    assert_eq!(outcome, LoadOutcome::Applied);
    assert_eq!(received.into_inner(), Some(Ok(repos(2))));
    assert_eq!(source.owners.borrow().as_slice(), ["octocat".to_owned()]);
}

#[test]
fn fetch_then_skips_callback_when_cancelled() {
    let source = ScriptedSource::ok(repos(2));
    let guard = MountGuard::new();
    let token = guard.token();
    drop(guard);
    let called = Cell::new(false);

    let outcome = block_on(fetch_then(&source, "octocat", &token, |_| called.set(true)));

    assert_eq!(outcome, LoadOutcome::Discarded);
    assert!(!called.get());
}
