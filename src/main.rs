use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use statuscheck::core::config::ProbeConfig;
use statuscheck::core::view::render;
use statuscheck::tui;
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "statuscheck",
    version,
    about = "Check the HTTP status of https://charm.sh/ from the terminal"
)]
struct Args {
    /// Write debug logs to this file (nothing is logged otherwise)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();

    // File logger only; writing to the terminal would corrupt the TUI
    if let Some(path) = &args.log_file {
        let log_config = ConfigBuilder::new()
            .set_time_format_rfc3339()
            .build();

        match File::create(path) {
            Ok(log_file) => {
                let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
            }
            Err(e) => eprintln!("Could not open log file {}: {}", path.display(), e),
        }
    }

    let config = ProbeConfig::default();
    log::info!("statuscheck starting up, target {}", config.url);

    match tui::run(config).await {
        Ok(session) => {
            print!("{}", render(&session));
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Terminal runtime failed: {}", e);
            println!("Uh oh, there was an error: {e}");
            ExitCode::FAILURE
        }
    }
}
