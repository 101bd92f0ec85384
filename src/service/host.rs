use log::{info, warn};

use crate::config::ports::AppConfig;
use crate::error::Result;
use crate::facade::traits::i_conversion::ConversionFacadeTrait;
use crate::models::conversion::{ConversionOutput, ConversionRequest};
use crate::service::error_log::ErrorLog;
use crate::service::traits::i_service::EngineSession;

/// Headless render context hosting the engine session for one conversion.
///
/// Nothing is ever shown on screen. The surface is consumed by [`run`], so a
/// process gets exactly one attempt, and the session it holds is closed on
/// every path out of that attempt.
///
/// [`run`]: HostSurface::run
pub struct HostSurface<S: EngineSession> {
    width: u32,
    height: u32,
    session: Option<S>,
    error_log: ErrorLog,
}

impl<S: EngineSession> HostSurface<S> {
    pub fn new(width: u32, height: u32, error_log: ErrorLog) -> Self {
        HostSurface {
            width,
            height,
            session: None,
            error_log,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.surface_width,
            config.surface_height,
            ErrorLog::new(config.log_file.clone()),
        )
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Hands ownership of a freshly started session to the surface.
    pub fn attach(&mut self, session: S) -> &mut S {
        self.session.insert(session)
    }

    pub fn is_attached(&self) -> bool {
        self.session.is_some()
    }

    pub async fn run<F>(mut self, facade: &F, request: ConversionRequest) -> Result<ConversionOutput>
    where
        F: ConversionFacadeTrait<Session = S>,
    {
        info!(
            "Converting {} to {}",
            request.input_path.display(),
            request.output_path.display()
        );
        let result = facade.execute_conversion(&mut self, request).await;
        if let Err(ref e) = result {
            self.error_log.append(e);
        }
        self.close().await;
        result
    }

    async fn close(self) {
        if let Some(session) = self.session {
            if let Err(e) = session.close().await {
                warn!("Failed to close the rendering engine: {}", e);
            }
        }
    }
}
