use std::path::PathBuf;

use crate::config::ports::AppConfig;

/// The one conversion a process run performs.
#[derive(Clone, Debug, PartialEq)]
pub struct ConversionRequest {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
}

impl From<&AppConfig> for ConversionRequest {
    fn from(config: &AppConfig) -> Self {
        ConversionRequest {
            input_path: config.input.clone(),
            output_path: config.output.clone(),
        }
    }
}

#[derive(Debug)]
pub struct ConversionOutput {
    pub output_path: PathBuf,
    pub bytes_written: u64,
}
