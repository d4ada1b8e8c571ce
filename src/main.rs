// Main entry point
use clap::Parser;
use colored::Colorize;
use libretrans::application::session::TranslationSession;
use libretrans::infrastructure::config::{self, load_config, Logging};
use libretrans::interfaces::cli::Cli;
use libretrans::presentation::busy::{spinner, with_busy_indicator};
use libretrans::presentation::theme::Theme;
use libretrans::presentation::view;
use libretrans::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = load_config()?;

    // Initialize logging
    if config.logging.enable {
        init_logging(&config.logging)?;
    }

    if cli.generate_config {
        config::generate_config_sample()?;
        return Ok(());
    }
    if cli.edit_config {
        edit_config().await?;
        return Ok(());
    }

    if let Some(base_url) = &cli.base_url {
        config.base_url = base_url.clone();
    }

    let state = AppState::new(config)?;
    let session = state.session();
    let theme_name = cli.theme.as_deref().unwrap_or(state.config.theme.as_str());
    let theme = Theme::from_name(theme_name);

    // Ctrl-C ends the process; an in-flight request is dropped with it
    let finished = tokio::select! {
        code = run(&cli, &state, &session, &theme) => code,
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\nInterrupted");
            130
        }
    };

    if finished != 0 {
        std::process::exit(finished);
    }

    Ok(())
}

/// Drive the session the way an interactive front-end would. Returns the exit code.
async fn run(cli: &Cli, state: &AppState, session: &TranslationSession, theme: &Theme) -> i32 {
    with_busy_indicator(session.subscribe(), spinner(), session.initialize()).await;
    if show_alert(session, theme) {
        return 1;
    }

    if cli.languages {
        let snapshot = session.snapshot();
        if cli.json {
            print_json(&snapshot.languages);
        } else {
            print!("{}", view::format_languages(&snapshot, theme));
        }
        return 0;
    }

    let text = cli.text.join(" ");
    if text.is_empty() {
        eprintln!("{}", "Please provide text to translate".red());
        return 1;
    }

    let target_code = cli.to.as_deref().unwrap_or(state.config.default_target.as_str());
    let Some(target) = session.find_language(target_code) else {
        eprintln!(
            "{}",
            format!("Unsupported target language: {} (see --languages)", target_code).red()
        );
        return 1;
    };

    tracing::debug!("Translating {} chars into {}", text.len(), target.id);
    with_busy_indicator(session.subscribe(), spinner(), session.translate(&text, &target)).await;

    let snapshot = session.snapshot();
    if cli.json {
        print_json(&snapshot);
    }
    if show_alert(session, theme) {
        return 1;
    }
    if !cli.json {
        print!("{}", view::format_translation(&text, &snapshot, theme));
    }

    0
}

/// Print a raised error and acknowledge it, like pressing "Okay" on an alert.
fn show_alert(session: &TranslationSession, theme: &Theme) -> bool {
    let snapshot = session.snapshot();
    if !snapshot.has_error {
        return false;
    }
    eprint!("{}", view::format_alert(&snapshot, theme));
    session.dismiss_error();
    true
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("{}", format!("Failed to encode JSON: {}", e).red()),
    }
}

async fn edit_config() -> anyhow::Result<()> {
    let Some(config_path) = config::get_config_path() else {
        eprintln!("{}", "Config file not found".red());
        return Ok(());
    };
    if !config_path.exists() {
        config::generate_config_sample()?;
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    // Run editor in blocking task
    tokio::task::spawn_blocking(move || {
        std::process::Command::new(editor)
            .arg(&config_path)
            .status()
    })
    .await??;

    Ok(())
}

/// Initialize logging with path and level configuration
fn init_logging(logging: &Logging) -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let level = match logging.level.to_uppercase().as_str() {
        "TRACE" => "trace",
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARN" => "warn",
        "ERROR" => "error",
        _ => "warn",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    if let Some(path) = logging.path.as_deref().filter(|p| !p.is_empty()) {
        // Log to file
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::sync::Mutex::new(file))
            .init();
        return Ok(());
    }

    // Log to stderr (default)
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
