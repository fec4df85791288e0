//! Ratatui front-end: the form and card views, the footer, and the event
//! loop that drives them.

mod app;
mod forms;
mod helpers;
mod terminal;

pub use app::App;
pub use terminal::run_app;
