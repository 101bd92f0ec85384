use std::process::ExitCode;

use html2pdf::action::cli::process_args;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match process_args(std::env::args_os()).await {
        Ok(output) => {
            log::info!("Conversion finished: {}", output.output_path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
