//! Pure helpers shared by state and rendering modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! URL classification and display formatting are used by the add form, the
//! template loader, and the renderer. Keeping them here keeps those call sites
//! from drifting apart.

pub mod format;
pub mod url;
