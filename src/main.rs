use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use rust_transcript_chat::config::{self, AppConfig};
use rust_transcript_chat::replay::{self, RowFormat};
use rust_transcript_chat::transcript::{InputMode, Transcript};
use rust_transcript_chat::ui::ChatApp;

#[derive(Parser)]
#[command(
    name = "rust_transcript_chat",
    version,
    about = "Single-user chat transcript with a desktop UI"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Override the local user id
    #[arg(long, env = "CHAT_USER_ID")]
    user_id: Option<String>,
    /// Override the local display name
    #[arg(long, env = "CHAT_DISPLAY_NAME")]
    display_name: Option<String>,
    /// Parse Send input as `<sender id>, <message>`
    #[arg(long)]
    sender_prefixed: bool,
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Clone, PartialEq, Eq)]
enum Mode {
    /// Replay `<sender id>, <message>` lines and print the rendered rows (no UI)
    Replay {
        /// Script file; stdin when omitted
        #[arg(long, value_name = "FILE")]
        input: Option<PathBuf>,
        /// Print JSON lines instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<(), eframe::Error> {
    dotenv().ok();
    // Khởi tạo Logger để debug
    env_logger::init();

    let cli = Cli::parse();
    let app_config = resolve_config(&cli);

    if let Some(Mode::Replay { input, json }) = cli.mode {
        let format = if json { RowFormat::Json } else { RowFormat::Text };
        if let Err(err) = run_replay(input, format, &app_config) {
            log::error!("Replay failed: {err}");
        }
        return Ok(());
    }

    run_gui(app_config, PathBuf::from(&cli.config))
}

fn resolve_config(cli: &Cli) -> AppConfig {
    let mut app_config = config::load_config(&cli.config).unwrap_or_else(|err| {
        log::warn!("{err}; using defaults");
        AppConfig::default()
    });
    if let Some(user_id) = &cli.user_id {
        app_config.session.user_id = user_id.clone();
    }
    if let Some(display_name) = &cli.display_name {
        app_config.session.display_name = display_name.clone();
    }
    if cli.sender_prefixed {
        app_config.input_mode = InputMode::SenderPrefixed;
    }
    app_config
}

fn run_replay(
    input: Option<PathBuf>,
    format: RowFormat,
    app_config: &AppConfig,
) -> io::Result<()> {
    let reader: Box<dyn BufRead> = match input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };

    let mut transcript = Transcript::new(app_config.session.clone());
    replay::replay(reader, &mut transcript, app_config)?;
    replay::render_rows(&transcript, format, &mut io::stdout().lock())
}

fn run_gui(app_config: AppConfig, config_path: PathBuf) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();

    log::info!(
        "Chat started as {} ({}), input mode {:?}",
        app_config.session.display_name,
        app_config.session.user_id,
        app_config.input_mode
    );

    eframe::run_native(
        "Rust Transcript Chat",
        options,
        Box::new(move |cc| Ok(Box::new(ChatApp::new(cc, app_config, config_path)))),
    )
}
