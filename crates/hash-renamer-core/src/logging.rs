use log::{error, info, warn, LevelFilter};
use std::path::{Path, PathBuf};

// For file-based logging with rotation
use log4rs::append::rolling_file::policy::compound::roll::fixed_window::FixedWindowRoller;
use log4rs::append::rolling_file::policy::compound::trigger::size::SizeTrigger;
use log4rs::append::rolling_file::policy::compound::CompoundPolicy;
use log4rs::append::rolling_file::RollingFileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

/// Environment variable that overrides the file logger level
pub const LOG_ENV_VAR: &str = "HASH_RENAMER_LOG";

/// Initialize a rotating file logger in `log_dir`.
///
/// Returns the path of the active log file. The level comes from
/// `HASH_RENAMER_LOG` when set, otherwise from `default_level`.
pub fn init_logger(
    log_dir: &Path,
    default_level: LevelFilter,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    std::fs::create_dir_all(log_dir)?;

    let log_file_path = log_dir.join("hash-renamer.log");
    let archived_logs_pattern = format!("{}/hash-renamer.{{}}.log", log_dir.display());

    // Rotate at 10MB, keep 5 archived log files
    let file_trigger = SizeTrigger::new(10 * 1024 * 1024);
    let file_roller = FixedWindowRoller::builder()
        .build(&archived_logs_pattern, 5)
        .map_err(|e| format!("Failed to create log roller: {}", e))?;

    let compound_policy = CompoundPolicy::new(Box::new(file_trigger), Box::new(file_roller));

    let rolling_file = RollingFileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} [{l}] [{M}:{L}] - {m}{n}",
        )))
        .build(&log_file_path, Box::new(compound_policy))
        .map_err(|e| format!("Failed to create log appender: {}", e))?;

    let level = std::env::var(LOG_ENV_VAR)
        .ok()
        .and_then(|value| value.parse::<LevelFilter>().ok())
        .unwrap_or(default_level);

    let config = Config::builder()
        .appender(Appender::builder().build("file", Box::new(rolling_file)))
        .build(Root::builder().appender("file").build(level))
        .map_err(|e| format!("Failed to build log config: {}", e))?;

    log4rs::init_config(config).map_err(|e| format!("Failed to initialize log4rs: {}", e))?;

    info!("Logging to file: {}", log_file_path.display());
    Ok(log_file_path)
}

/// A rename or removal that could not be carried out
pub fn log_file_error(path: &Path, operation: &str, error: &dyn std::error::Error) {
    error!("Could not {} {}: {}", operation, path.display(), error);
}

/// A file whose contents could not be hashed
pub fn log_hash_error(path: &Path, error: &dyn std::error::Error) {
    warn!("Skipping {}, unable to hash: {}", path.display(), error);
}

/// A change made on disk; `related` is the rename target or the kept duplicate
pub fn log_fs_change(action: &str, path: &Path, related: Option<&Path>) {
    match related {
        Some(related) => info!("{} {} ({})", action, path.display(), related.display()),
        None => info!("{} {}", action, path.display()),
    }
}
