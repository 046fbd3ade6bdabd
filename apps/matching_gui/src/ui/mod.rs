//! UI layer for the matching exercise: app shell and board layout.

pub mod app;
pub mod layout;

pub use app::MatchingGameApp;
