use chrono::Local;
use std::error::Error;
use std::str::FromStr;
use tracing::Level;
use tracing_log::LogTracer;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::FmtSubscriber;

const LOG_LEVEL_VAR: &str = "VOICE_DESIGN_LOG";

struct CustomTimeFormatter;

impl FormatTime for CustomTimeFormatter {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let local_time = Local::now();
        write!(w, "{}", local_time.format("%Y-%m-%d %H:%M:%S"))
    }
}

/// `VOICE_DESIGN_LOG=trace` shows request ids and response statuses
fn max_level() -> Result<Level, Box<dyn Error>> {
    match std::env::var(LOG_LEVEL_VAR) {
        Ok(level) => Level::from_str(level.trim()).map_err(|_| {
            Box::<dyn Error>::from(format!(
                "{} must be one of trace, debug, info, warn, error; got {:?}",
                LOG_LEVEL_VAR, level
            ))
        }),
        Err(_) => Ok(Level::INFO),
    }
}

pub fn reg_log() -> Result<(), Box<dyn Error>> {
    LogTracer::init()?;
    let layer = FmtSubscriber::builder()
        .with_max_level(max_level()?)
        .with_timer(CustomTimeFormatter {})
        .finish();
    tracing::subscriber::set_global_default(layer)?;
    Ok(())
}
