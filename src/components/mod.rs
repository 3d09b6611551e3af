//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page sections while reading the theme and feed
//! signals from Leptos context providers set up by `app::App`.

pub mod footer;
pub mod navbar;
pub mod projects;
pub mod repo_card;
pub mod sections;
pub mod style;
pub mod theme_toggle;
