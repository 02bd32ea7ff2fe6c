//! Terminal frontend for the application.
//!
//! The frontend owns the user-facing side of the bridge: it reads commands
//! from stdin on a dedicated thread and renders backend events (subtitle
//! updates, notifications, configuration dumps) to stdout. It is the only
//! writer of the subtitle display surface.

use std::io::{self, BufRead};
use std::thread;

use sublate_bridge::notification::{InputField, NotificationMessage, NotificationType};
use sublate_bridge::{MessageFromBackend, MessageToBackend, config::Config};
use tokio::sync::mpsc::{Receiver, Sender};

/// Errors that can occur while running the frontend.
#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    /// The frontend's own runtime could not be built.
    #[error("failed to build the frontend runtime: {0}")]
    Runtime(#[from] io::Error),
}

/// A parsed line of user input.
enum Command {
    /// Forward a request to the backend.
    Backend(MessageToBackend),
    /// Print the command overview.
    Help,
    /// Leave the application.
    Quit,
}

/// Run the frontend until the user quits or the backend closes the bridge.
pub fn run(
    mut rx: Receiver<MessageFromBackend>,
    tx: Sender<MessageToBackend>,
) -> Result<(), FrontendError> {
    print_help();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async move {
        let (quit_tx, mut quit_rx) = tokio::sync::mpsc::channel::<()>(1);
        spawn_input_thread(tx, quit_tx);
        loop {
            tokio::select! {
                message = rx.recv() => match message {
                    Some(message) => render_message(message),
                    None => break,
                },
                _ = quit_rx.recv() => break,
            }
        }
    });
    Ok(())
}

/// Reads stdin line by line and forwards parsed commands to the backend.
fn spawn_input_thread(tx: Sender<MessageToBackend>, quit_tx: Sender<()>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match parse_command(&line) {
                None => {}
                Some(Command::Help) => print_help(),
                Some(Command::Quit) => break,
                Some(Command::Backend(message)) => {
                    if tx.blocking_send(message).is_err() {
                        log::error!("The backend closed the bridge, shutting down");
                        break;
                    }
                }
            }
        }
        // Either `quit` or EOF: tell the render loop to stop.
        let _ = quit_tx.blocking_send(());
    });
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    let (command, argument) = match line.split_once(' ') {
        Some((command, argument)) => (command, argument.trim()),
        None => (line, ""),
    };
    match command {
        // An empty link is forwarded as-is; the backend owns link validation.
        "play" => Some(Command::Backend(MessageToBackend::PlayRequest(
            argument.to_string(),
        ))),
        "stop" => Some(Command::Backend(MessageToBackend::StopRequest)),
        "key" => Some(Command::Backend(MessageToBackend::UpdateApiKeyRequest(
            argument.to_string(),
        ))),
        "config" => Some(Command::Backend(MessageToBackend::ConfigurationRequest)),
        "quit" | "exit" => Some(Command::Quit),
        _ => Some(Command::Help),
    }
}

fn render_message(message: MessageFromBackend) {
    match message {
        MessageFromBackend::SubtitleUpdate { text } => render_subtitles(&text),
        MessageFromBackend::NotificationMessage(notification) => {
            render_notification(&notification);
        }
        MessageFromBackend::ConfigurationResponse(config) => render_config(&config),
        MessageFromBackend::FieldErrorResponse { field, message } => {
            let label = match field {
                InputField::VideoLink => "link",
                InputField::ApiKey => "key",
            };
            println!("[{label}] {message}");
        }
        MessageFromBackend::PlaybackStartedResponse { video_id } => {
            println!("* playing video {video_id}");
        }
        MessageFromBackend::PlaybackStoppedResponse => {
            println!("* playback stopped");
        }
    }
}

fn render_subtitles(text: &str) {
    if text.is_empty() {
        return;
    }
    println!("  ----");
    for line in text.lines() {
        println!("  | {line}");
    }
}

fn render_notification(notification: &NotificationMessage) {
    let severity = match notification.notification_type {
        NotificationType::Info => "info",
        NotificationType::Success => "ok",
        NotificationType::Warning => "warn",
        NotificationType::Error => "error",
    };
    println!("[{severity}] {}", notification.message);
}

fn render_config(config: &Config) {
    println!("recognition enabled:  {}", config.enable_recognition);
    println!("subtitle lines:       {}", config.subtitle_config.max_lines);
    println!(
        "translation:          {} -> {} via {}",
        config.translation_config.source_language,
        config.translation_config.target_language,
        config.translation_config.endpoint,
    );
    println!(
        "api key:              {}",
        match config.playback_config.api_key.as_deref() {
            Some(api_key) => mask_api_key(api_key),
            None => "(not set)".to_string(),
        }
    );
}

/// Masks an API key for display, keeping only a short prefix.
fn mask_api_key(api_key: &str) -> String {
    let prefix: String = api_key.chars().take(4).collect();
    format!("{prefix}***")
}

fn print_help() {
    println!("commands:");
    println!("  play <link>   play a YouTube link with translated subtitles");
    println!("  stop          stop playback and subtitle generation");
    println!("  key <value>   store the YouTube API key");
    println!("  config        show the current configuration");
    println!("  quit          exit");
}
