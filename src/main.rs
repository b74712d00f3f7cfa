// std imports
use std::{
    io::{ErrorKind, stdout},
    process,
};

// third-party imports
use clap::Parser;
use env_logger::{self as logger};

// local imports
use agrep::{App, app, cli, config, error::*};

const AGREP_DEBUG_LOG: &str = "AGREP_DEBUG_LOG";
const AGREP_DEBUG_LOG_STYLE: &str = "AGREP_DEBUG_LOG_STYLE";

// ---

fn bootstrap() {
    if std::env::var(AGREP_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(logger::Env::new().filter(AGREP_DEBUG_LOG).write_style(AGREP_DEBUG_LOG_STYLE))
            .format_timestamp_micros()
            .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }
}

fn run() -> Result<()> {
    bootstrap();

    let opt = cli::Opt::parse();
    let settings = config::load(opt.config.as_deref())?;
    log::debug!("settings: {settings:?}");

    let app = App::new(app::options(opt, settings)?);

    match app.run(&mut stdout().lock()) {
        Ok(_) => Ok(()),
        Err(Error::Io(ref e)) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        Err(err) => Err(err),
    }
}

fn main() {
    if let Err(err) = run() {
        log::debug!("{err:?}");
        eprintln!("error: {err}");
        process::exit(1);
    }
}
