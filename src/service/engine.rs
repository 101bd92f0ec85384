use std::fmt::Display;
use std::path::{Path, PathBuf};

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::page::PrintToPdfParams;
use chromiumoxide::Page;
use futures::{Stream, StreamExt};
use log::{debug, info, warn};
use tokio::task::JoinHandle;

use crate::error::EngineError;
use crate::models::engine::{EngineOptions, PrintSettings};
use crate::service::traits::i_service::{EngineSession, RenderEngine};

/// Executable names looked up inside a bundled runtime directory, in order.
const RUNTIME_EXECUTABLES: &[&str] = &[
    "chrome",
    "chrome.exe",
    "chromium",
    "chromium-browser",
    "chrome-headless-shell",
    "chrome-headless-shell.exe",
    "headless_shell",
];

/// Headless Chromium driven over the DevTools protocol.
pub struct ChromiumEngine;

impl ChromiumEngine {
    pub fn new() -> Self {
        ChromiumEngine
    }
}

impl Default for ChromiumEngine {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ChromiumSession {
    browser: Browser,
    page: Page,
    handler: JoinHandle<()>,
}

/// First known browser executable inside `dir`, if any.
pub fn find_runtime_executable(dir: &Path) -> Option<PathBuf> {
    RUNTIME_EXECUTABLES
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Polls the browser event stream until the connection closes.
///
/// Messages the protocol definitions cannot decode surface as errors, but the
/// connection keeps working after them, so they are skipped. Returns the
/// number of skipped errors.
pub async fn drive_events<S, T, E>(events: &mut S) -> usize
where
    S: Stream<Item = Result<T, E>> + Unpin,
    E: Display,
{
    let mut skipped = 0;
    while let Some(event) = events.next().await {
        if let Err(e) = event {
            debug!("Ignoring browser event error: {}", e);
            skipped += 1;
        }
    }
    skipped
}

impl RenderEngine for ChromiumEngine {
    type Session = ChromiumSession;

    async fn initialize(&self, options: &EngineOptions) -> Result<ChromiumSession, EngineError> {
        let mut builder = BrowserConfig::builder()
            .window_size(options.width, options.height)
            .viewport(None)
            .user_data_dir(&options.user_data_dir);

        if let Some(dir) = &options.runtime_dir {
            let executable = find_runtime_executable(dir).ok_or_else(|| {
                EngineError::Config(format!("no browser executable found in {}", dir.display()))
            })?;
            info!("Using bundled browser runtime: {}", executable.display());
            builder = builder.chrome_executable(executable);
        }

        let config = builder.build().map_err(EngineError::Config)?;
        let (browser, mut handler) = Browser::launch(config).await?;

        // The handler must be polled for any command to make progress
        let handler = tokio::spawn(async move {
            drive_events(&mut handler).await;
        });

        let page = browser.new_page("about:blank").await?;
        debug!("Browser session ready, profile at {}", options.user_data_dir.display());

        Ok(ChromiumSession { browser, page, handler })
    }
}

impl EngineSession for ChromiumSession {
    async fn load_html(&mut self, html: &str) -> Result<(), EngineError> {
        // Resolves after the frame's navigation triggered by document.open() completes
        self.page.set_content(html).await?;
        Ok(())
    }

    async fn export_pdf(&mut self, output_path: &Path, settings: &PrintSettings) -> Result<bool, EngineError> {
        if settings.selection_only {
            warn!("Selection-only printing is not supported by the DevTools protocol; printing the whole document");
        }
        let params = PrintToPdfParams {
            print_background: Some(settings.print_backgrounds),
            display_header_footer: Some(settings.header_and_footer),
            ..Default::default()
        };

        let pdf = self.page.pdf(params).await?;
        if pdf.is_empty() {
            return Ok(false);
        }
        tokio::fs::write(output_path, &pdf).await?;
        Ok(true)
    }

    async fn close(mut self) -> Result<(), EngineError> {
        self.browser.close().await?;
        self.browser.wait().await?;
        if let Err(e) = self.handler.await {
            debug!("Browser event loop task ended abnormally: {}", e);
        }
        Ok(())
    }
}
