use log::{LevelFilter, SetLoggerError};
use log4rs::{
    append::console::{ConsoleAppender, Target},
    config::{runtime::ConfigErrors, Appender, Logger, Root},
    encode::pattern::PatternEncoder,
    Config,
};

/// Failure to install the console logger.
#[derive(thiserror::Error, Debug)]
pub enum LoggerError {
    /// The log4rs configuration was rejected.
    #[error("Invalid logger configuration: {0}")]
    Config(#[from] ConfigErrors),
    /// A logger is already installed.
    #[error("Logger already installed: {0}")]
    Install(#[from] SetLoggerError),
}

const APPENDER: &str = "stderr";

/// Installs a console logger on stderr and logs panics before they unwind.
///
/// Records of this crate are kept down to `level`, other crates only report warnings. Drivers call
/// this once before converting a graph.
pub fn init_log(level: LevelFilter) -> Result<(), LoggerError> {
    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("[{h({l})} {t}] {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build(APPENDER, Box::new(stderr)))
        .logger(Logger::builder().build(env!("CARGO_CRATE_NAME"), level))
        .build(
            Root::builder()
                .appender(APPENDER)
                .build(LevelFilter::Warn.min(level)),
        )?;

    log4rs::init_config(config)?;
    update_panic_hook();

    Ok(())
}

fn update_panic_hook() {
    let hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |info| {
        log::error!(target: env!("CARGO_CRATE_NAME"), "Panic during conversion: {info}");
        hook(info);
    }));
}
