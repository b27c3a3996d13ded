//! Guitar tutor chat: fixed persona prompt and the external completion provider.
//!
//! Completions are non-streaming; one question maps to one provider call.

pub mod persona;
pub mod providers;
pub mod types;

pub use persona::{ask, build_messages, SYSTEM_PROMPT};
pub use providers::{CompletionProvider, OpenAiProvider};
pub use types::*;
