use std::error::Error;
use std::process;

use stockroom::{run, telemetry, Config};

fn main() {
    telemetry::init();
    if let Err(err) = run_app() {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run_app() -> Result<(), Box<dyn Error + Send + Sync>> {
    let config = Config::from_env()?;
    run(&config, std::io::stdout())
}
