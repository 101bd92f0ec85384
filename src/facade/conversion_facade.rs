use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, info};
use tokio::fs;

use crate::config::ports::AppConfig;
use crate::error::{ConvertError, EngineError, Result};
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{ConversionOutput, ConversionRequest};
use crate::models::engine::{EngineOptions, PrintSettings};
use crate::service::host::HostSurface;
use crate::service::traits::i_service::{EngineSession, RenderEngine};
use crate::utils::utils::{format_file_size, full_path, has_pdf_extension};

/// Sequences one HTML to PDF conversion.
///
/// Stages run strictly in order and none is retried: read the input, start
/// the engine, load the document, wait for it to settle, prepare the output
/// path, print.
pub struct ConversionFacade<E> {
    engine: E,
    runtime_dir: PathBuf,
    user_data_dir: PathBuf,
    settle_delay: Duration,
}

impl<E: RenderEngine> ConversionFacade<E> {
    pub fn new(engine: E, config: &AppConfig) -> Self {
        ConversionFacade {
            engine,
            runtime_dir: config.runtime_dir.clone(),
            user_data_dir: config.user_data_dir.clone(),
            settle_delay: config.settle_delay,
        }
    }

    async fn read_input(&self, input_path: &Path) -> Result<String> {
        if !input_path.is_file() {
            return Err(ConvertError::InputNotFound(input_path.to_path_buf()));
        }
        let bytes = fs::read(input_path).await?;
        let html = String::from_utf8_lossy(&bytes).into_owned();
        if html.trim().is_empty() {
            return Err(ConvertError::InvalidInput(input_path.to_path_buf()));
        }
        info!("Read {} ({})", input_path.display(), format_file_size(bytes.len() as u64));
        Ok(html)
    }

    async fn engine_options(&self, width: u32, height: u32) -> std::result::Result<EngineOptions, EngineError> {
        let runtime_dir = if self.runtime_dir.is_dir() {
            Some(self.runtime_dir.clone())
        } else {
            None
        };
        fs::create_dir_all(&self.user_data_dir).await?;
        Ok(EngineOptions {
            runtime_dir,
            user_data_dir: self.user_data_dir.clone(),
            width,
            height,
        })
    }

    async fn start_session(&self, width: u32, height: u32) -> std::result::Result<E::Session, EngineError> {
        let options = self.engine_options(width, height).await?;
        self.engine.initialize(&options).await
    }
}

/// Makes `output_path` absolute, creates its directory, and checks the
/// extension. The directory is created before the extension is checked.
pub async fn prepare_output_path(output_path: &Path) -> Result<PathBuf> {
    let full = full_path(output_path)?;
    let dir = match full.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
        _ => return Err(ConvertError::OutputPath(full.clone())),
    };
    if !dir.exists() {
        fs::create_dir_all(&dir).await?;
        info!("Created output directory {}", dir.display());
    }
    if !has_pdf_extension(&full) {
        return Err(ConvertError::InvalidExtension(full));
    }
    Ok(full)
}

impl<E: RenderEngine> ConversionFacadeTrait for ConversionFacade<E> {
    type Session = E::Session;

    async fn execute_conversion(
        &self,
        surface: &mut HostSurface<E::Session>,
        request: ConversionRequest,
    ) -> Result<ConversionOutput> {
        let html = self.read_input(&request.input_path).await?;

        let (width, height) = surface.size();
        let session = self
            .start_session(width, height)
            .await
            .map_err(ConvertError::EngineInit)?;
        let session = surface.attach(session);
        debug!("Rendering engine initialized");

        session.load_html(&html).await.map_err(ConvertError::Load)?;
        debug!("Navigation completed, settling for {:?}", self.settle_delay);
        tokio::time::sleep(self.settle_delay).await;

        let output_path = prepare_output_path(&request.output_path).await?;
        let settings = PrintSettings::default();
        match session.export_pdf(&output_path, &settings).await {
            Ok(true) => {}
            Ok(false) => return Err(ConvertError::Export(EngineError::NoOutput)),
            Err(e) => return Err(ConvertError::Export(e)),
        }

        let bytes_written = fs::metadata(&output_path).await?.len();
        info!("Wrote {} ({})", output_path.display(), format_file_size(bytes_written));
        Ok(ConversionOutput {
            output_path,
            bytes_written,
        })
    }
}
