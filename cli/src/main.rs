//! CLI entrypoint for chatpane
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use chatpane_application::{BehaviorConfig, MessageStore, SubmitMessageUseCase};
use chatpane_domain::{Conversation, TranscriptFormat};
use chatpane_infrastructure::{
    ConfigLoader, FileConfig, FileTuiConfig, ResponderKind, TracingObserver, build_responder,
};
use chatpane_presentation::{ChatApp, Cli, IconSet, ResponderArg, TranscriptFormatter, TuiConfig};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "chatpane.log";
const MAX_INPUT_HEIGHT: u16 = 50;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    // Keep the guard alive so buffered log lines are flushed on exit
    let _log_guard = init_logging(cli.verbose);
    info!("Starting chatpane");

    // Load configuration
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };
    report_issues(&config);

    // Resolve responder: CLI flag wins over config
    let mut responder_config = config.responder.clone();
    if let Some(arg) = cli.responder {
        responder_config.kind = responder_kind(arg);
    }

    // === Dependency Injection ===
    let responder = build_responder(responder_config.kind, &responder_config);
    let behavior = BehaviorConfig::from_timeout_seconds(responder_config.timeout_seconds);
    let use_case = Arc::new(SubmitMessageUseCase::new(responder).with_behavior(behavior));

    let conversation = if cli.empty {
        Conversation::new()
    } else {
        let (conversation, _) = config.conversation.to_conversation();
        conversation
    };
    let observer = Arc::new(TracingObserver::new());
    let mut store = MessageStore::with_conversation(conversation);
    store.subscribe(observer.clone());

    info!(
        responder = %responder_config.kind,
        seeded = store.len(),
        "Session ready"
    );

    let app = ChatApp::new(store, use_case, tui_config(&config.tui));
    let store = app.run().await.context("Terminal UI failed")?;
    info!(
        appended = observer.appended(),
        total = store.len(),
        "Session ended"
    );

    // Print transcript after the terminal is restored
    let format: TranscriptFormat = cli
        .transcript
        .map(Into::into)
        .unwrap_or(config.output.transcript);
    if let Some(transcript) = TranscriptFormatter::format(store.conversation(), format)? {
        print!("{}", transcript);
    }

    Ok(())
}

/// Initialize file logging based on verbosity level.
///
/// The TUI owns the terminal, so logs go to `chatpane.log` in the data
/// directory. `RUST_LOG` overrides the `-v` level.
fn init_logging(verbose: u8) -> WorkerGuard {
    let default_filter = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let appender = tracing_appender::rolling::never(log_dir(), LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    guard
}

fn log_dir() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join("chatpane"))
        .filter(|dir| std::fs::create_dir_all(dir).is_ok())
        .unwrap_or_else(std::env::temp_dir)
}

/// Log config issues; offending entries are skipped when the config is used
fn report_issues(config: &FileConfig) {
    for issue in config.validate() {
        warn!("Config: {}", issue.message);
    }
}

fn responder_kind(arg: ResponderArg) -> ResponderKind {
    match arg {
        ResponderArg::Rules => ResponderKind::Rules,
        ResponderArg::Echo => ResponderKind::Echo,
        ResponderArg::Unavailable => ResponderKind::Unavailable,
    }
}

fn tui_config(file: &FileTuiConfig) -> TuiConfig {
    TuiConfig {
        max_input_height: file.max_input_height.clamp(1, MAX_INPUT_HEIGHT),
        tick: Duration::from_millis(file.tick_ms.max(16)),
        icons: IconSet::new(file.icons.user.as_str(), file.icons.assistant.as_str()),
        ..TuiConfig::default()
    }
}
