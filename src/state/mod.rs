//! Page state containers.
//!
//! DESIGN
//! ======
//! `theme` and `feed` are independent: neither reads the other, and each is
//! constructed once by the root component and shared through context.

pub mod feed;
pub mod theme;
