//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page, store, and
//! router logic so those stay testable natively.

pub mod storage;
