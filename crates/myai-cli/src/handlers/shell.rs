//! Interactive shell with one screen per feature.
//!
//! Lines starting with `:` are commands; anything else is input for the
//! current screen (a chat message, an image prompt, or text to speak).

use std::path::PathBuf;

use myai_core::{ChatSession, ImageInput, Navigator, Screen, Voice};
use myai_voice::SPEECH_FAILED_MESSAGE;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use super::{chat, speak, vision};
use crate::bootstrap::CliContext;
use crate::error::CliError;

/// One parsed line of shell input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellInput {
    Navigate(Screen),
    Image(PathBuf),
    Analyze,
    Voice(Voice),
    Clear,
    Help,
    Quit,
    Text(String),
    Empty,
}

/// Parse a shell line. Unknown commands are reported as `Err(message)`.
pub fn parse_line(line: &str) -> Result<ShellInput, String> {
    let line = line.trim();
    let Some(command) = line.strip_prefix(':') else {
        return Ok(if line.is_empty() {
            ShellInput::Empty
        } else {
            ShellInput::Text(line.to_string())
        });
    };

    let (name, arg) = command
        .split_once(char::is_whitespace)
        .map_or((command, ""), |(n, a)| (n, a.trim()));

    match name.to_ascii_lowercase().as_str() {
        "quit" | "q" | "exit" => Ok(ShellInput::Quit),
        "help" | "h" | "?" => Ok(ShellInput::Help),
        "clear" => Ok(ShellInput::Clear),
        "analyze" => Ok(ShellInput::Analyze),
        "image" if arg.is_empty() => Err("usage: :image <path>".to_string()),
        "image" => Ok(ShellInput::Image(PathBuf::from(arg))),
        "voice" => arg
            .parse()
            .map(ShellInput::Voice)
            .map_err(|e: myai_core::UnknownVoice| e.to_string()),
        other => other
            .parse()
            .map(ShellInput::Navigate)
            .map_err(|_| format!("unknown command ':{other}' (try :help)")),
    }
}

/// Per-session state of the shell.
struct Shell<'a> {
    ctx: &'a CliContext,
    nav: Navigator,
    chat: ChatSession,
    image: Option<ImageInput>,
    voice: Voice,
}

/// Run the shell until `:quit` or end of input.
pub async fn execute(ctx: &CliContext) -> Result<(), CliError> {
    let mut editor = DefaultEditor::new()?;
    let (controller, mut events) = ctx.speech();
    let mut shell = Shell {
        ctx,
        nav: Navigator::new(),
        chat: ChatSession::new(),
        image: None,
        voice: ctx.settings.default_voice,
    };

    print_screen(shell.nav.current());
    loop {
        let prompt = format!("{}> ", shell.nav.current().key());
        let line = match editor.readline(&prompt) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        };
        let _ = editor.add_history_entry(line.as_str());

        match parse_line(&line) {
            Ok(ShellInput::Quit) => break,
            Ok(ShellInput::Empty) => {}
            Ok(ShellInput::Help) => print_help(),
            Ok(ShellInput::Navigate(screen)) => {
                if shell.nav.navigate(screen) {
                    print_screen(screen);
                }
            }
            Ok(ShellInput::Clear) => {
                shell.chat.clear();
                shell.image = None;
                println!("(cleared)");
            }
            Ok(ShellInput::Voice(voice)) => {
                shell.voice = voice;
                println!("Voice: {}", voice.label());
            }
            Ok(ShellInput::Image(path)) => shell.load_image(path).await,
            Ok(ShellInput::Analyze) => shell.analyze("").await,
            Ok(ShellInput::Text(text)) => match shell.nav.current() {
                Screen::Home => println!("Pick a screen first (:chat, :vision, :speech)."),
                Screen::Chat => chat::print_turn(shell.ctx.chat(), &mut shell.chat, &text).await,
                Screen::Vision => shell.analyze(&text).await,
                Screen::Speech => {
                    if let Err(e) = speak::speak(&controller, &mut events, &text, shell.voice).await {
                        tracing::debug!(error = %e, "Speech failed in shell");
                        println!("{SPEECH_FAILED_MESSAGE}");
                    }
                }
            },
            Err(message) => println!("{message}"),
        }
    }
    Ok(())
}

impl Shell<'_> {
    async fn load_image(&mut self, path: PathBuf) {
        match ImageInput::load(&path).await {
            Ok(image) => {
                println!("Loaded {} ({})", path.display(), image.mime_type);
                self.image = Some(image);
                if self.nav.navigate(Screen::Vision) {
                    print_screen(Screen::Vision);
                }
            }
            Err(e) => println!("{e}"),
        }
    }

    async fn analyze(&self, prompt: &str) {
        let Some(image) = &self.image else {
            println!("Load an image first with :image <path>.");
            return;
        };
        match vision::analyze(self.ctx.vision(), image, prompt).await {
            Ok(result) => print!("{}", vision::render(&result)),
            Err(e) => println!("{e}"),
        }
    }
}

fn print_screen(screen: Screen) {
    println!();
    println!("== {} ==", screen.label());
    match screen {
        Screen::Home => {
            for feature in Screen::features() {
                println!("  :{:<7} {:<8} {}", feature.key(), feature.label(), feature.description());
            }
            println!("  :help for all commands");
        }
        Screen::Chat => println!("Type a message. :clear starts a new conversation."),
        Screen::Vision => {
            println!("Load an image with :image <path>, then type a prompt or :analyze.");
        }
        Screen::Speech => println!("Type text to speak. :voice <name> switches voice."),
    }
}

fn print_help() {
    println!(":home :chat :vision :speech   switch screen");
    println!(":image <path>                 load an image (Vision)");
    println!(":analyze                      describe the loaded image");
    println!(":voice <name>                 Kore, Puck, Fenrir or Zephyr");
    println!(":clear                        clear chat history and image");
    println!(":quit                         leave");
}
