//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure decision and formatting logic lives here so pages and components stay
//! thin and the rules can be unit tested without a browser.

pub mod format;
pub mod guard;
pub mod markdown;
pub mod storage;
