use std::path::PathBuf;

pub const DEFAULT_DATA_FILE: &str = "diary.csv";
pub const DEFAULT_LOG_FILTER: &str = "warn";

pub struct Config {
    pub data_file: PathBuf,
}

impl Config {
    /// Uses `data_file` when given, otherwise `diary.csv` in the working directory.
    pub fn new(data_file: Option<PathBuf>) -> Self {
        let data_file = data_file.unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));
        Self { data_file }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}
