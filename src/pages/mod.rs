//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site is a single page. The page owns its async orchestration and
//! delegates rendering details to `components`.

pub mod portfolio;
