use std::io;
use std::path::PathBuf;
use std::time::Duration;

// Resolved settings for one run
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub log_file: PathBuf,
    pub log_level: String,
    pub runtime_dir: PathBuf,
    pub user_data_dir: PathBuf,
    pub settle_delay: Duration,
    pub surface_width: u32,
    pub surface_height: u32,
}

// Where the settings come from
pub trait ConfigPort {
    fn get_config(&self) -> io::Result<AppConfig>;
}
