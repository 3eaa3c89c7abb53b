mod commands;
mod config;

use std::path::Path;

use config::Config;

#[derive(Debug)]
enum Error {
    File(String),
    Output(String),
    Config(String),
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(e) => write!(f, "File error: {}", e),
            Self::Output(e) => write!(f, "Output error: {}", e),
            Self::Config(e) => write!(f, "Config error: {}", e),
        }
    }
}

struct TimeLogger {
    start: std::time::Instant,
}

impl Drop for TimeLogger {
    fn drop(&mut self) {
        log::info!(
            "Run completed in {}",
            humantime::format_duration(self.start.elapsed())
        );
    }
}

fn main() -> Result<(), Error> {
    // will log the duration of the program
    let _time_logger = TimeLogger {
        start: std::time::Instant::now(),
    };

    pretty_env_logger::init();

    // no options, but --help/--version work and stray arguments are rejected
    clap::command!().get_matches();

    let cfg = Config::default();
    log::debug!("Running with config:\n{}", cfg.to_yaml()?);

    let mut rng = rand::thread_rng();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::run(&cfg, &mut rng, Path::new("."), &mut out)?;

    log::debug!("All files written");
    Ok(())
}
