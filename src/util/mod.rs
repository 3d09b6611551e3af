//! Utility helpers shared across the page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (`localStorage`, the document
//! root, teardown) from state and component logic so both stay testable
//! natively.

pub mod cancel;
pub mod dark_mode;
#[cfg(test)]
pub mod memory_store;
pub mod storage;
