//! Panel state modules.
//!
//! DESIGN
//! ======
//! State is split by panel section (`queue`, `logs`, `form`, `files`,
//! `terminal`) so each section can be reduced and tested without a renderer
//! or a network. `panel` composes them behind a single reducer.

pub mod clipboard;
pub mod files;
pub mod form;
pub mod logs;
pub mod panel;
pub mod queue;
pub mod templates;
pub mod terminal;
