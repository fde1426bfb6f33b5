use crate::application::{Config, DEFAULT_LOG_FILTER, DiaryApp, Terminal, Theme};
use clap::Parser;
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "diary")]
#[command(about = "A personal diary for the terminal")]
#[command(version)]
pub struct Cli {
    /// Diary file to read and write (defaults to diary.csv in the current directory)
    pub file: Option<PathBuf>,
}

impl Cli {
    pub fn run() -> anyhow::Result<()> {
        let cli = Self::parse();
        init_logging();

        let config = Config::new(cli.file);
        info!("Using diary file {}", config.data_file.display());

        let mut app = DiaryApp::open(&config)?;
        let mut console = Terminal::stdio(Theme::default());
        app.run(&mut console)
    }
}

// Logs go to stderr so they never mix with the menu on stdout
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();
}
