//! Cadastro Binary
//!
//! Starts the interactive student roster on stdin/stdout.

use cadastro::{Config, Console, Menu};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

/// Cadastro de Alunos
///
/// Takes no options: the roster always lives in `alunos_cadastrados.csv`
/// in the working directory.
#[derive(Parser, Debug)]
#[command(name = "cadastro")]
#[command(about = "Interactive student roster persisted to a CSV file")]
#[command(version)]
struct Args {}

fn main() {
    // Logs go to stderr so they never mix with the menu
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let _args = Args::parse();

    let config = Config::default();

    tracing::debug!("Cadastro v{}", cadastro::VERSION);
    tracing::debug!("Data file: {}", config.data_file.display());

    let mut menu = match Menu::open(&config, Console::stdio()) {
        Ok(menu) => menu,
        Err(e) => {
            tracing::error!("Failed to load {}: {}", config.data_file.display(), e);
            eprintln!("[ERRO FATAL] {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = menu.run() {
        tracing::error!("Session aborted: {}", e);
        eprintln!("[ERRO FATAL] {}", e);
        std::process::exit(1);
    }
}
