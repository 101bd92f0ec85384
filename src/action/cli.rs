use std::ffi::OsString;
use std::io;
use std::path::PathBuf;

use clap::Parser;

use crate::config::config::{resolve_output_path, Cli};
use crate::config::ports::{AppConfig, ConfigPort};
use crate::error::Result;
use crate::facade::conversion_facade::ConversionFacade;
use crate::models::conversion::{ConversionOutput, ConversionRequest};
use crate::service::config_service::{ConfigService, DefaultConfigAdapter};
use crate::service::engine::ChromiumEngine;
use crate::service::host::HostSurface;
use crate::service::traits::i_service::RenderEngine;
use crate::utils::utils::setup_logging;

/// Parses `args` (program name first) and runs the conversion with Chromium.
///
/// A missing `--entrada` is reported by clap, which prints usage and exits with status 2.
pub async fn process_args<I, T>(args: I) -> Result<ConversionOutput>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::parse_from(args);
    setup_logging(&cli.log_level)?;

    let config_port: Box<dyn ConfigPort> = Box::new(CliConfigAdapter::new(cli));
    let config = ConfigService::new(config_port).get_config()?;

    run_conversion(ChromiumEngine::new(), &config).await
}

/// Runs a single conversion described by `config` on the given engine.
pub async fn run_conversion<E: RenderEngine>(engine: E, config: &AppConfig) -> Result<ConversionOutput> {
    let facade = ConversionFacade::new(engine, config);
    let surface = HostSurface::from_config(config);
    surface.run(&facade, ConversionRequest::from(config)).await
}

// Config adapter fed by command-line arguments
pub struct CliConfigAdapter {
    cli: Cli,
}

impl CliConfigAdapter {
    pub fn new(cli: Cli) -> Self {
        CliConfigAdapter { cli }
    }
}

impl ConfigPort for CliConfigAdapter {
    fn get_config(&self) -> io::Result<AppConfig> {
        let input = PathBuf::from(&self.cli.entrada);
        let output = resolve_output_path(&input, self.cli.salida.as_deref());
        let mut config = DefaultConfigAdapter::new(input, Some(output)).get_config()?;
        config.log_level = self.cli.log_level.clone();
        Ok(config)
    }
}
