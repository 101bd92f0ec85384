mod common;

use common::{FakeEngine, FakeSession, Workspace};
use html2pdf::error::{ConvertError, Result};
use html2pdf::facade::traits::i_conversion::ConversionFacadeTrait;
use html2pdf::models::conversion::{ConversionOutput, ConversionRequest};
use html2pdf::models::engine::EngineOptions;
use html2pdf::service::error_log::ErrorLog;
use html2pdf::service::host::HostSurface;
use html2pdf::service::traits::i_service::RenderEngine;

/// Starts a session, then fails or succeeds without touching the filesystem.
struct AttachThen {
    engine: FakeEngine,
    fail: bool,
}

impl ConversionFacadeTrait for AttachThen {
    type Session = FakeSession;

    async fn execute_conversion(
        &self,
        surface: &mut HostSurface<FakeSession>,
        request: ConversionRequest,
    ) -> Result<ConversionOutput> {
        let (width, height) = surface.size();
        let options = EngineOptions {
            runtime_dir: None,
            user_data_dir: request.input_path.clone(),
            width,
            height,
        };
        let session = self.engine.initialize(&options).await.map_err(ConvertError::EngineInit)?;
        surface.attach(session);
        assert!(surface.is_attached());

        if self.fail {
            return Err(ConvertError::OutputPath(request.output_path));
        }
        Ok(ConversionOutput {
            output_path: request.output_path,
            bytes_written: 0,
        })
    }
}

fn request(ws: &Workspace) -> ConversionRequest {
    ConversionRequest {
        input_path: ws.path("in.html"),
        output_path: ws.path("out.pdf"),
    }
}

#[tokio::test]
async fn closes_session_after_success() {
    let ws = Workspace::new();
    let facade = AttachThen { engine: FakeEngine::new(), fail: false };
    let surface = HostSurface::new(1200, 800, ErrorLog::new(ws.path("error.log")));

    surface.run(&facade, request(&ws)).await.unwrap();

    assert_eq!(facade.engine.calls(), ["initialize", "close"]);
    assert_eq!(ws.log(), "");
}

#[tokio::test]
async fn logs_then_closes_after_failure() {
    let ws = Workspace::new();
    let facade = AttachThen { engine: FakeEngine::new(), fail: true };
    let surface = HostSurface::new(1200, 800, ErrorLog::new(ws.path("error.log")));

    let err = surface.run(&facade, request(&ws)).await.unwrap_err();

    assert!(matches!(err, ConvertError::OutputPath(_)));
    assert_eq!(facade.engine.calls(), ["initialize", "close"]);
    assert_eq!(ws.log().matches("could not determine the output directory").count(), 1);
}

#[tokio::test]
async fn fresh_surface_has_no_session() {
    let ws = Workspace::new();
    let surface: HostSurface<FakeSession> = HostSurface::new(640, 480, ErrorLog::new(ws.path("error.log")));
    assert!(!surface.is_attached());
    assert_eq!(surface.size(), (640, 480));
}
