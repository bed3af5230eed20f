//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so components depend on small focused models.
//! Only the signed-in session is shared app-wide; page-local UI state (menu
//! overlays and the like) lives in component signals.

pub mod session;
