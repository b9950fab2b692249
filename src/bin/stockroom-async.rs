use std::error::Error;
use std::process;

use stockroom::{run_async, telemetry, Config};

#[tokio::main]
async fn main() {
    telemetry::init();
    if let Err(err) = run_app().await {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

async fn run_app() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = Config::from_env()?;
    run_async(&config, std::io::stdout()).await
}
