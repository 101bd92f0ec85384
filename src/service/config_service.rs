use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::config::config::default_output_path;
use crate::config::ports::{AppConfig, ConfigPort};

pub const LOG_FILE_NAME: &str = "error.log";
pub const RUNTIME_DIR_NAME: &str = "chromium";
pub const USER_DATA_DIR_NAME: &str = "html2pdf-cache";
pub const SETTLE_DELAY: Duration = Duration::from_millis(1000);
pub const SURFACE_WIDTH: u32 = 1200;
pub const SURFACE_HEIGHT: u32 = 800;

// Wraps whichever config adapter the caller picked
pub struct ConfigService {
    config_port: Box<dyn ConfigPort>,
}

impl ConfigService {
    pub fn new(config_port: Box<dyn ConfigPort>) -> Self {
        ConfigService { config_port }
    }

    pub fn get_config(&self) -> io::Result<AppConfig> {
        self.config_port.get_config()
    }
}

/// Directory containing the running executable.
pub fn executable_dir() -> io::Result<PathBuf> {
    let exe = env::current_exe()?;
    match exe.parent() {
        Some(dir) => Ok(dir.to_path_buf()),
        None => env::current_dir(),
    }
}

// Defaults for everything except the two paths the user supplies
pub struct DefaultConfigAdapter {
    input: PathBuf,
    output: Option<PathBuf>,
}

impl DefaultConfigAdapter {
    pub fn new(input: impl Into<PathBuf>, output: Option<PathBuf>) -> Self {
        DefaultConfigAdapter {
            input: input.into(),
            output,
        }
    }

    fn config_in(&self, base_dir: &Path) -> AppConfig {
        let output = self
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input));
        AppConfig {
            input: self.input.clone(),
            output,
            log_file: base_dir.join(LOG_FILE_NAME),
            log_level: "info".to_string(),
            runtime_dir: base_dir.join(RUNTIME_DIR_NAME),
            user_data_dir: env::temp_dir().join(USER_DATA_DIR_NAME),
            settle_delay: SETTLE_DELAY,
            surface_width: SURFACE_WIDTH,
            surface_height: SURFACE_HEIGHT,
        }
    }
}

impl ConfigPort for DefaultConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        Ok(self.config_in(&executable_dir()?))
    }
}
