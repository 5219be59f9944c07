use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use log::debug;
use walktime::Config;
use walktime::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let default_level = if cli.verbose { "debug" } else { config.logging.level.as_str() };

    // Initialize logging with custom format
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format(|buf, record| {
            use chrono::Local;
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();

    debug!("Loaded configuration: {:?}", config);
    walktime::commands::run(cli, config)
}
