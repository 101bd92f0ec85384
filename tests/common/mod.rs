//! Scripted rendering engine shared by the integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use html2pdf::config::ports::{AppConfig, ConfigPort};
use html2pdf::error::EngineError;
use html2pdf::models::engine::{EngineOptions, PrintSettings};
use html2pdf::service::config_service::DefaultConfigAdapter;
use html2pdf::service::traits::i_service::{EngineSession, RenderEngine};
use tempfile::TempDir;
use tokio::time::Instant;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Failure {
    None,
    Init,
    Load,
    ExportError,
    ExportEmpty,
}

/// Records every engine call so tests can check what ran and in which order.
#[derive(Clone)]
pub struct FakeEngine {
    failure: Failure,
    pub calls: Arc<Mutex<Vec<String>>>,
    pub moments: Arc<Mutex<Vec<(String, Instant)>>>,
    pub options: Arc<Mutex<Option<EngineOptions>>>,
    pub settings: Arc<Mutex<Option<PrintSettings>>>,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self::failing(Failure::None)
    }

    pub fn failing(failure: Failure) -> Self {
        FakeEngine {
            failure,
            calls: Arc::new(Mutex::new(Vec::new())),
            moments: Arc::new(Mutex::new(Vec::new())),
            options: Arc::new(Mutex::new(None)),
            settings: Arc::new(Mutex::new(None)),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Time at which `call` was made, on tokio's clock.
    pub fn moment(&self, call: &str) -> Option<Instant> {
        self.moments
            .lock()
            .unwrap()
            .iter()
            .find(|(name, _)| name == call)
            .map(|(_, at)| *at)
    }

    fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_string());
        self.moments.lock().unwrap().push((call.to_string(), Instant::now()));
    }
}

pub struct FakeSession {
    engine: FakeEngine,
    html: String,
}

impl RenderEngine for FakeEngine {
    type Session = FakeSession;

    async fn initialize(&self, options: &EngineOptions) -> Result<FakeSession, EngineError> {
        self.record("initialize");
        *self.options.lock().unwrap() = Some(options.clone());
        if self.failure == Failure::Init {
            return Err(EngineError::Config("runtime not found".to_string()));
        }
        Ok(FakeSession {
            engine: self.clone(),
            html: String::new(),
        })
    }
}

impl EngineSession for FakeSession {
    async fn load_html(&mut self, html: &str) -> Result<(), EngineError> {
        self.engine.record("load_html");
        if self.engine.failure == Failure::Load {
            return Err(EngineError::Config("navigation aborted".to_string()));
        }
        self.html = html.to_string();
        Ok(())
    }

    async fn export_pdf(&mut self, output_path: &Path, settings: &PrintSettings) -> Result<bool, EngineError> {
        self.engine.record("export_pdf");
        *self.engine.settings.lock().unwrap() = Some(settings.clone());
        match self.engine.failure {
            Failure::ExportError => Err(EngineError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "printer offline",
            ))),
            Failure::ExportEmpty => Ok(false),
            _ => {
                let pdf = format!("%PDF-1.7\n% {}\n%%EOF\n", self.html.len());
                std::fs::write(output_path, pdf)?;
                Ok(true)
            }
        }
    }

    async fn close(self) -> Result<(), EngineError> {
        self.engine.record("close");
        Ok(())
    }
}

/// A scratch workspace with config paths pointing inside it.
pub struct Workspace {
    pub dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        Workspace {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    pub fn config(&self, input: PathBuf, output: Option<PathBuf>) -> AppConfig {
        let mut config = DefaultConfigAdapter::new(input, output).get_config().unwrap();
        config.log_file = self.path("error.log");
        config.runtime_dir = self.path("chromium");
        config.user_data_dir = self.path("cache");
        config.settle_delay = Duration::ZERO;
        config
    }

    pub fn log(&self) -> String {
        std::fs::read_to_string(self.path("error.log")).unwrap_or_default()
    }
}
