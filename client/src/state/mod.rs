//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `dialog`, `table`, `toast`) so the
//! generic screen components can depend on small focused models.

pub mod auth;
pub mod dialog;
pub mod table;
pub mod toast;
