//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure display
//! rules from page and component logic to improve reuse and testability.

pub mod browser;
pub mod property_display;
