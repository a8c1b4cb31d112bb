// ABOUTME: Application state and event handling for the quote widget

pub mod events;
pub mod state;

pub use events::EventHandler;
pub use state::{App, AppMessage, AppState, AsyncAction};
