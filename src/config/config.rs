use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Clone, Debug)]
#[command(
    name = "html2pdf",
    about = "Convert an HTML file to PDF",
    long_about = "Converts a local HTML file to PDF using the print-to-PDF support of a headless Chromium browser.\nFailures are appended to error.log, next to the executable.",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Path of the input HTML file
    #[arg(long = "entrada", value_name = "PATH")]
    pub entrada: String,
    /// Path of the output PDF file (defaults to the input path with a .pdf extension)
    #[arg(long = "salida", value_name = "PATH")]
    pub salida: Option<String>,
    #[arg(long, default_value = "info", value_parser = ["debug", "info", "warn", "error"])]
    pub log_level: String,
}

/// Output path used when `--salida` is absent: the input with its extension
/// swapped for `.pdf`.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("pdf")
}

/// Picks the output path from the optional `--salida` value, treating a blank
/// value like a missing one.
pub fn resolve_output_path(input: &Path, salida: Option<&str>) -> PathBuf {
    match salida {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => default_output_path(input),
    }
}
