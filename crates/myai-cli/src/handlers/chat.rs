//! `myai chat` and the AI Chat screen.

use myai_core::{CHAT_FAILED_MESSAGE, ChatPort, ChatSession};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// One-shot when `message` is given, otherwise an interactive session.
pub async fn execute(ctx: &CliContext, message: Option<String>) -> Result<(), CliError> {
    let mut session = ChatSession::new();
    match message {
        Some(message) => {
            let reply = session.send(ctx.chat(), &message).await?;
            println!("{}", reply.text);
            Ok(())
        }
        None => interactive(ctx.chat(), &mut session).await,
    }
}

async fn interactive(port: &dyn ChatPort, session: &mut ChatSession) -> Result<(), CliError> {
    let mut editor = DefaultEditor::new()?;
    println!("AI Chat - type a message, :clear to start over, :quit to leave.");

    loop {
        let line = match editor.readline("you> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };
        let _ = editor.add_history_entry(line.as_str());

        match line.trim() {
            "" => {}
            ":quit" | ":q" => break,
            ":clear" => {
                session.clear();
                println!("(conversation cleared)");
            }
            text => print_turn(port, session, text).await,
        }
    }
    Ok(())
}

/// Send one message and print the reply, or the user-facing failure text.
pub async fn print_turn(port: &dyn ChatPort, session: &mut ChatSession, text: &str) {
    match session.send(port, text).await {
        Ok(reply) => println!("ai> {}", reply.text),
        Err(e) => {
            tracing::debug!(error = %e, "Chat turn failed");
            println!("ai> {CHAT_FAILED_MESSAGE}");
        }
    }
}
