use std::{fs::File, process};

use anyhow::{Context, Result};
use log::{error, info};

use marks_predictor::{
    app,
    config::{AppConfig, CONFIG_PATH},
    PredictorError, PredictorService,
};

/// The terminal belongs to the UI, so logs go to a file.
const LOG_PATH: &str = "marks-predictor.log";

fn main() -> Result<()> {
    init_logging()?;

    let config = match AppConfig::load_or_default(CONFIG_PATH) {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration: {e}");
            eprintln!("Invalid configuration: {e}");
            process::exit(1);
        }
    };

    // Nothing can be served without the model: halt before touching the terminal.
    let service = match PredictorService::load(&config.artifact_path) {
        Ok(service) => service,
        Err(e) => {
            error!("{e}");
            match e {
                PredictorError::ArtifactNotFound { .. } => {
                    eprintln!("Error: {e}. Please provide the model file.")
                }
                _ => eprintln!("Error: {e}"),
            }
            process::exit(1);
        }
    };

    app::run::run(&service, config.initial_record())?;
    info!("bye");
    Ok(())
}

fn init_logging() -> Result<()> {
    let file =
        File::create(LOG_PATH).with_context(|| format!("cannot create log file '{LOG_PATH}'"))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();

    Ok(())
}
