use std::path::Path;

use crate::error::EngineError;
use crate::models::engine::{EngineOptions, PrintSettings};

// Rendering engine port: starts a browser session bound to the given directories
#[allow(async_fn_in_trait)]
pub trait RenderEngine: Send + Sync {
    type Session: EngineSession;

    /// Starts the engine.
    /// # Parameters
    /// - options: runtime and profile directories, surface size
    /// # Errors
    /// - The browser runtime cannot be found or fails to launch
    async fn initialize(&self, options: &EngineOptions) -> Result<Self::Session, EngineError>;
}

// A live engine instance, owned by exactly one conversion attempt
#[allow(async_fn_in_trait)]
pub trait EngineSession: Send + Sized {
    /// Loads `html` as the document content (not through a file URL) and
    /// resolves once navigation has completed.
    async fn load_html(&mut self, html: &str) -> Result<(), EngineError>;

    /// Prints the loaded document to `output_path`.
    /// # Returns
    /// - `false` when the engine finished without producing a document
    async fn export_pdf(&mut self, output_path: &Path, settings: &PrintSettings) -> Result<bool, EngineError>;

    async fn close(self) -> Result<(), EngineError>;
}
