use std::path::PathBuf;

/// Everything the engine needs to start a session.
#[derive(Clone, Debug)]
pub struct EngineOptions {
    /// Directory holding a bundled browser build; `None` lets the driver find one.
    pub runtime_dir: Option<PathBuf>,
    /// Profile and cache directory for the browser instance.
    pub user_data_dir: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Print settings handed to the engine's PDF export.
#[derive(Clone, Debug, PartialEq)]
pub struct PrintSettings {
    pub print_backgrounds: bool,
    pub selection_only: bool,
    pub header_and_footer: bool,
}

impl Default for PrintSettings {
    fn default() -> Self {
        PrintSettings {
            print_backgrounds: true,
            selection_only: false,
            header_and_footer: false,
        }
    }
}
