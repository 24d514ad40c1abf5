use tracing::{
    Level, info,
    subscriber::{SetGlobalDefaultError, set_global_default},
};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt::format::FmtSpan, layer::SubscriberExt};

/// Registers a stdout logger, keep the returned guard alive until exit so buffered logs are
/// flushed.
pub fn setup_logger(debug: bool) -> Result<WorkerGuard, SetGlobalDefaultError> {
    let level = if debug { Level::TRACE } else { Level::INFO };
    let filter = tracing_subscriber::filter::Targets::new().with_default(level);

    let (std_writer, std_guard) = tracing_appender::non_blocking(std::io::stdout());
    let std_logger = tracing_subscriber::fmt::layer()
        .with_writer(std_writer)
        .with_ansi(false)
        .with_target(false)
        .with_span_events(FmtSpan::CLOSE);

    let collector = tracing_subscriber::registry().with(std_logger).with(filter);

    set_global_default(collector)?;

    info!("Display Dump {}", env!("CARGO_PKG_VERSION"));
    Ok(std_guard)
}
