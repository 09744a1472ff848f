//! Ratatui widgets, one per panel. Widgets borrow state and theme, never own
//! or mutate anything, and tolerate zero-sized areas.

pub mod editor;
pub mod explorer;
pub mod problems;
pub mod search;
pub mod status_bar;
pub mod tabs;
pub mod terminal;
