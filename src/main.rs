use financing_advisor::{cli, errors};
use tracing_subscriber::EnvFilter;

use errors::{AppError, AppResult};

/// Logs go to stderr so generated HTML on stdout stays clean.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> AppResult<()> {
    let matches = cli::command().get_matches();
    let settings = cli::load_settings(&matches)?;
    init_tracing(&settings.log_level);

    let rt = tokio::runtime::Runtime::new().map_err(|e| AppError::IoError(e.to_string()))?;
    let output = rt.block_on(cli::run(&matches, &settings))?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
