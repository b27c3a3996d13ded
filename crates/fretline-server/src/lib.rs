//! Fretline — HTTP relay between a guitar-tutor frontend and a chat-completion API.

pub mod routes;
pub mod state;

pub use routes::build_router;
pub use state::AppState;
