mod scenario;

use std::process::ExitCode;

use simplelog::{Config, LevelFilter, WriteLogger};

use scenario::Scenario;

const USAGE: &str = "usage: datagrid-cli <scenario.json>";

fn log_level() -> LevelFilter {
    std::env::var("DATAGRID_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

fn main() -> ExitCode {
    if let Err(e) = WriteLogger::init(log_level(), Config::default(), std::io::stderr()) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("{}", USAGE);
        return ExitCode::FAILURE;
    };

    let confirmed = match Scenario::load(&path).and_then(Scenario::replay) {
        Ok(confirmed) => confirmed,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    for event in confirmed {
        match serde_json::to_string(&event) {
            Ok(line) => println!("{}", line),
            Err(e) => log::error!("Failed to serialize {:?}: {}", event, e),
        }
    }
    ExitCode::SUCCESS
}
