//! Application services built on top of the ports.

pub mod chat_session;

pub use chat_session::{CHAT_FAILED_MESSAGE, ChatSession, EMPTY_REPLY_FALLBACK};
