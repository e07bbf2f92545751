//! Ratatui widgets for the scentfind TUI.

pub mod card;
pub mod command_bar;
pub mod help;
pub mod query_bar;
pub mod result_list;
pub mod status_bar;
