//! Command handlers.
//!
//! Handlers follow one pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<(), CliError>`
//! - Thin wrappers that validate CLI input, call a port or the playback
//!   controller, and format output for the terminal.

pub mod chat;
pub mod shell;
pub mod speak;
pub mod vision;
pub mod voices;
